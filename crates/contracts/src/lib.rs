//! Shared contracts of the CRM frontend
//!
//! Records, column sets, list option schemas, the paginated envelope and
//! flash payloads. Pure data and logic, no UI dependency.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;

pub use domain::common::CrmEntity;
pub use enums::entity_kind::EntityKind;
