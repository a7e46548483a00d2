use crate::enums::entity_kind::EntityKind;
use crate::shared::table::{ColumnSet, DeleteHandler};

/// Record type that can be listed in a table
///
/// Binds a record to its [`EntityKind`] tag, its primary key and its column
/// set builder.
pub trait CrmEntity: Sized + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Primary key of the record
    fn id(&self) -> i64;

    /// Builds the table columns for the given capabilities
    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Self>;
}
