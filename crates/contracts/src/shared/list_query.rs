//! Active query of a list view
//!
//! Serialized straight into the request query string. Filter keys are the
//! `value`s of the view's [`FilterOption`](super::list_options::FilterOption)s.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
    /// Flattened: every filter is a top-level query parameter
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            search: None,
            sort: None,
            direction: SortDirection::Asc,
            filters: BTreeMap::new(),
        }
    }

    /// Sets or clears one filter. A blank value removes the filter.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search = None;
        self.page = 1;
    }

    pub fn set_search(&mut self, text: &str) {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_string());
        self.page = 1;
    }

    /// Clicking the current sort field flips direction, any other field
    /// becomes the new ascending sort.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort.as_deref() == Some(field) {
            self.direction = self.direction.toggled();
        } else {
            self.sort = Some(field.to_string());
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.len() + usize::from(self.search.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_reset_page() {
        let mut q = ListQuery::new(15);
        q.go_to(4);
        q.set_filter("status", "won");
        assert_eq!(q.page, 1);
        assert_eq!(q.filters.get("status").map(String::as_str), Some("won"));

        q.go_to(2);
        q.set_filter("status", "   ");
        assert!(q.filters.is_empty());
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = ListQuery::new(15);
        q.toggle_sort("name");
        assert_eq!((q.sort.as_deref(), q.direction), (Some("name"), SortDirection::Asc));
        q.toggle_sort("name");
        assert_eq!(q.direction, SortDirection::Desc);
        q.toggle_sort("created_at");
        assert_eq!((q.sort.as_deref(), q.direction), (Some("created_at"), SortDirection::Asc));
    }

    #[test]
    fn test_filters_are_top_level_keys() {
        let mut q = ListQuery::new(10);
        q.set_filter("status", "new");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["status"], "new");
        assert_eq!(json["direction"], "asc");
        assert!(json.get("filters").is_none());
        assert!(json.get("sort").is_none());
    }

    #[test]
    fn test_active_filters_count() {
        let mut q = ListQuery::new(15);
        q.set_search("acme");
        q.set_filter("source_id", "3");
        assert_eq!(q.active_filters_count(), 2);
        q.toggle_sort("name");
        q.go_to(3);
        q.clear_filters();
        assert_eq!(q.active_filters_count(), 0);
        assert_eq!((q.page, q.sort.as_deref()), (1, Some("name")));
        q.set_per_page(0);
        assert_eq!(q.per_page, 1);
    }
}
