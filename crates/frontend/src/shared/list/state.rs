use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::Paginated;
use contracts::EntityKind;
use leptos::prelude::*;

use crate::shared::storage::load_per_page;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub query: ListQuery,
    /// Latest envelope; replaced wholesale by every response
    pub page: Option<Paginated<T>>,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the newest request; older responses are dropped
    pub request_seq: u64,
}

impl<T> ListState<T> {
    pub fn new(per_page: u32) -> Self {
        Self {
            query: ListQuery::new(per_page),
            page: None,
            loading: false,
            error: None,
            request_seq: 0,
        }
    }

    /// Start a request, returning its sequence number
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Whether a response for request `seq` is still wanted
    pub fn is_current(&self, seq: u64) -> bool {
        self.request_seq == seq
    }

    pub fn total(&self) -> u64 {
        self.page.as_ref().map(|p| p.total).unwrap_or(0)
    }
}

/// Whether the response to request `seq` should still be applied.
///
/// False once a newer request started, and also once the list was unmounted
/// and its state disposed.
pub fn response_wanted<T: Send + Sync + 'static>(state: RwSignal<ListState<T>>, seq: u64) -> bool {
    state.try_with_untracked(|s| s.is_current(seq)).unwrap_or(false)
}

pub fn create_state<T: Send + Sync + 'static>(kind: EntityKind) -> RwSignal<ListState<T>> {
    RwSignal::new(ListState::new(load_per_page(kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superseded_request_is_not_current() {
        let mut state = ListState::<u32>::new(15);
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
        assert!(state.loading);
        assert_eq!(state.total(), 0);
    }

    #[test]
    fn test_response_after_unmount_is_dropped() {
        let section = Owner::new();
        let state = section.with(|| RwSignal::new(ListState::<u32>::new(15)));
        let seq = state.try_update(|s| s.begin_request()).unwrap();
        assert!(response_wanted(state, seq));

        // switching to another section disposes the list
        section.cleanup();
        assert!(!response_wanted(state, seq));
        assert!(state.try_update(|s| s.begin_request()).is_none());
    }
}
