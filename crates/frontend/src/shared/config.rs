//! Defaults shared by every list view

/// Page sizes offered by the pager
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 15, 25, 50];

/// Page size of a freshly mounted list
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Delay before a typed search is sent, in milliseconds
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search text shorter than this is not sent
pub const MIN_SEARCH_LEN: usize = 2;
