//! Types shared by all CRM records

pub mod crm_entity;
pub mod refs;

pub use crm_entity::CrmEntity;
pub use refs::{ref_name, NamedRef, UserRef};
