//! Paginated list envelope returned by every list endpoint
//!
//! The envelope is authoritative: views render `data` as-is and never
//! re-sort, re-filter or re-slice it. A new query response replaces the
//! previous envelope wholesale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::flash::FlashMessage;

/// One pager control sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

impl PageLink {
    /// Page number carried in the link URL (`?page=N`), decoded with the
    /// same query-string rules used to build list requests
    pub fn page(&self) -> Option<u32> {
        let url = self.url.as_deref()?;
        let (_, query) = url.split_once('?')?;
        let query = query.split('#').next().unwrap_or_default();
        serde_qs::from_str::<PageParam>(query).ok()?.page
    }

    pub fn is_disabled(&self) -> bool {
        self.url.is_none()
    }

    /// Label with the HTML entities used by the server decoded
    pub fn display_label(&self) -> String {
        self.label
            .replace("&laquo;", "«")
            .replace("&raquo;", "»")
            .replace("&amp;", "&")
    }
}

#[derive(Deserialize)]
struct PageParam {
    page: Option<u32>,
}

/// One page of query results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

/// Envelope invariant broken by the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeViolation {
    #[error("current page {current} is outside 1..={last}")]
    PageOutOfRange { current: u32, last: u32 },
    #[error("page holds {len} records but per_page is {per_page}")]
    PageOverflow { len: usize, per_page: u32 },
    #[error("empty result must have null bounds and last_page 0 or 1")]
    EmptyBounds,
    #[error("bounds {from:?}..{to:?} do not fit total {total}")]
    BoundsMismatch {
        from: Option<u64>,
        to: Option<u64>,
        total: u64,
    },
    #[error("expected exactly one active link for page {current}, found {found}")]
    ActiveLink { current: u32, found: usize },
}

impl<T> Paginated<T> {
    /// Envelope for a query that matched nothing
    pub fn empty(per_page: u32) -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            per_page,
            total: 0,
            from: None,
            to: None,
            links: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Human-readable position of the page, `None` when nothing matched
    pub fn summary(&self) -> Option<String> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if self.total > 0 => {
                Some(format!("Showing {}–{} of {}", from, to, self.total))
            }
            _ => None,
        }
    }

    pub fn has_pages(&self) -> bool {
        self.last_page > 1
    }

    pub fn active_link(&self) -> Option<&PageLink> {
        self.links.iter().find(|l| l.active)
    }

    /// Checks the envelope invariants, reporting the first violation
    pub fn validate(&self) -> Result<(), EnvelopeViolation> {
        if self.total == 0 {
            if self.from.is_some() || self.to.is_some() || self.last_page > 1 {
                return Err(EnvelopeViolation::EmptyBounds);
            }
        } else {
            if self.current_page < 1 || self.current_page > self.last_page {
                return Err(EnvelopeViolation::PageOutOfRange {
                    current: self.current_page,
                    last: self.last_page,
                });
            }
            let bounds_ok = match (self.from, self.to) {
                (Some(from), Some(to)) => from >= 1 && from <= to && to <= self.total,
                (None, None) => self.data.is_empty(),
                _ => false,
            };
            if !bounds_ok {
                return Err(EnvelopeViolation::BoundsMismatch {
                    from: self.from,
                    to: self.to,
                    total: self.total,
                });
            }
        }

        if self.data.len() > self.per_page as usize {
            return Err(EnvelopeViolation::PageOverflow {
                len: self.data.len(),
                per_page: self.per_page,
            });
        }

        if self.has_pages() {
            let current = self.current_page.to_string();
            let active: Vec<&PageLink> = self.links.iter().filter(|l| l.active).collect();
            if active.len() != 1 || active[0].label != current {
                return Err(EnvelopeViolation::ActiveLink {
                    current: self.current_page,
                    found: active.len(),
                });
            }
        }

        Ok(())
    }
}

/// Body of a list endpoint response: the page plus the flash payload of
/// this navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Paginated<T>,
    #[serde(default)]
    pub flash: FlashMessage,
}

/// What a list view shows in its body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListBody<'a, T> {
    Loading,
    Empty,
    Rows(&'a [T]),
}

impl<'a, T> ListBody<'a, T> {
    /// Projects the request state and the latest envelope onto the body.
    ///
    /// An in-flight request always shows the loading state; an envelope with
    /// `total = 0` shows the empty state.
    pub fn project(loading: bool, envelope: Option<&'a Paginated<T>>) -> Self {
        match envelope {
            _ if loading => ListBody::Loading,
            None => ListBody::Loading,
            Some(page) if page.is_empty() => ListBody::Empty,
            Some(page) => ListBody::Rows(&page.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(page: Option<u32>, label: &str, active: bool) -> PageLink {
        PageLink {
            url: page.map(|p| format!("http://crm.test/leads?page={}", p)),
            label: label.to_string(),
            active,
        }
    }

    fn second_page() -> Paginated<u32> {
        Paginated {
            data: (11..=20).collect(),
            current_page: 2,
            last_page: 3,
            per_page: 10,
            total: 25,
            from: Some(11),
            to: Some(20),
            links: vec![
                link(Some(1), "&laquo; Previous", false),
                link(Some(1), "1", false),
                link(Some(2), "2", true),
                link(Some(3), "3", false),
                link(Some(3), "Next &raquo;", false),
            ],
        }
    }

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{
            "data": [],
            "total": 0,
            "current_page": 1,
            "last_page": 1,
            "per_page": 10,
            "from": null,
            "to": null,
            "links": []
        }"#;
        let page: Paginated<u32> = serde_json::from_str(json).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.summary(), None);
        assert_eq!(page.validate(), Ok(()));
        assert_eq!(ListBody::project(false, Some(&page)), ListBody::Empty);
        assert_eq!(page, Paginated::empty(10));
    }

    #[test]
    fn test_list_response_without_flash() {
        let json = r#"{"items": {"data": [1, 2], "current_page": 1, "last_page": 1,
            "per_page": 10, "total": 2, "from": 1, "to": 2}}"#;
        let response: ListResponse<u32> = serde_json::from_str(json).unwrap();
        assert!(response.flash.is_empty());
        assert!(response.items.links.is_empty());
        assert_eq!(response.items.summary().as_deref(), Some("Showing 1–2 of 2"));
        assert_eq!(response.items.validate(), Ok(()));
    }

    #[test]
    fn test_summary_and_rows() {
        let page = second_page();
        assert_eq!(page.validate(), Ok(()));
        assert_eq!(page.summary().as_deref(), Some("Showing 11–20 of 25"));
        assert_eq!(page.active_link().and_then(|l| l.page()), Some(2));
        match ListBody::project(false, Some(&page)) {
            ListBody::Rows(rows) => assert_eq!(rows, page.data.as_slice()),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_loading_is_distinct_from_empty() {
        let page = Paginated::<u32>::empty(10);
        assert_eq!(ListBody::project(true, Some(&page)), ListBody::Loading);
        assert_eq!(ListBody::<u32>::project(true, None), ListBody::Loading);
    }

    #[test]
    fn test_validate_reports_violations() {
        let mut page = second_page();
        page.links[2].active = false;
        assert_eq!(
            page.validate(),
            Err(EnvelopeViolation::ActiveLink { current: 2, found: 0 })
        );

        let mut page = second_page();
        page.current_page = 4;
        assert!(matches!(
            page.validate(),
            Err(EnvelopeViolation::PageOutOfRange { current: 4, last: 3 })
        ));

        let mut page = Paginated::<u32>::empty(10);
        page.from = Some(1);
        assert_eq!(page.validate(), Err(EnvelopeViolation::EmptyBounds));

        let mut page = second_page();
        page.per_page = 5;
        assert!(matches!(page.validate(), Err(EnvelopeViolation::PageOverflow { .. })));
    }

    #[test]
    fn test_empty_result_last_page() {
        let mut page = Paginated::<u32>::empty(10);
        page.last_page = 0;
        assert_eq!(page.validate(), Ok(()));
        assert_eq!(ListBody::project(false, Some(&page)), ListBody::Empty);

        page.last_page = 2;
        assert_eq!(page.validate(), Err(EnvelopeViolation::EmptyBounds));
    }

    #[test]
    fn test_link_helpers() {
        let prev = link(None, "&laquo; Previous", false);
        assert!(prev.is_disabled());
        assert_eq!(prev.page(), None);
        assert_eq!(prev.display_label(), "« Previous");

        let next = PageLink {
            url: Some("/leads?status=new&page=3&sort=name".into()),
            label: "Next &raquo;".into(),
            active: false,
        };
        assert_eq!(next.page(), Some(3));
        assert_eq!(next.display_label(), "Next »");

        let encoded = PageLink {
            url: Some("/leads?search=a%26b&page=%32#top".into()),
            label: "2".into(),
            active: false,
        };
        assert_eq!(encoded.page(), Some(2));

        let without_page = PageLink {
            url: Some("/leads?sort=name".into()),
            ..encoded
        };
        assert_eq!(without_page.page(), None);
    }
}
