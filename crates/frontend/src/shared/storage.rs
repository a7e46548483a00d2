//! Per-browser list preferences kept in localStorage

use contracts::EntityKind;
use web_sys::window;

use super::config::{DEFAULT_PER_PAGE, PAGE_SIZE_OPTIONS};

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn per_page_key(kind: EntityKind) -> String {
    format!("crm_{}_per_page", kind.resource())
}

/// Only sizes the pager offers are accepted back
fn parse_per_page(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.parse::<u32>().ok())
        .filter(|v| PAGE_SIZE_OPTIONS.contains(v))
        .unwrap_or(DEFAULT_PER_PAGE)
}

/// Page size last chosen for this list
pub fn load_per_page(kind: EntityKind) -> u32 {
    let raw = get_local_storage().and_then(|s| s.get_item(&per_page_key(kind)).ok().flatten());
    parse_per_page(raw)
}

/// Remember the page size chosen for this list
pub fn save_per_page(kind: EntityKind, per_page: u32) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&per_page_key(kind), &per_page.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_per_page() {
        assert_eq!(parse_per_page(Some("25".into())), 25);
        assert_eq!(parse_per_page(Some("7".into())), DEFAULT_PER_PAGE);
        assert_eq!(parse_per_page(Some("abc".into())), DEFAULT_PER_PAGE);
        assert_eq!(parse_per_page(None), DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_key_per_resource() {
        assert_eq!(per_page_key(EntityKind::ActivityLogs), "crm_activity-logs_per_page");
    }
}
