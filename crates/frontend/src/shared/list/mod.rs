//! Generic list view shared by every record kind

pub mod api;
pub mod page;
pub mod state;

pub use page::entity_list;
