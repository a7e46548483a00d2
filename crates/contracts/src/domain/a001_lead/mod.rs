pub mod aggregate;
pub mod list;

pub use aggregate::{Lead, LeadStatus};
pub use list::lead_columns;
