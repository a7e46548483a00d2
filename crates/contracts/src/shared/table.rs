//! Column descriptors for list tables
//!
//! A table is described by an ordered [`ColumnSet`] of [`Column`]s. Each
//! column knows its header label and how to turn one record into a
//! [`CellValue`]. The frontend maps cell values onto concrete widgets; the
//! contract itself never touches the DOM.
//!
//! ```rust,ignore
//! let columns = user_columns(on_delete, caps.can_edit, caps.can_delete);
//! for column in columns.iter() {
//!     let cell = column.render(&user);
//! }
//! ```

use std::fmt;
use std::sync::Arc;

/// Header label of the trailing row-actions column
pub const ACTIONS_LABEL: &str = "Actions";

/// Text shown wherever an optional value or relation is absent
pub const PLACEHOLDER: &str = "N/A";

/// Callback receiving the primary key of the record to delete.
/// `None` means the deletion was cancelled and nothing must be removed.
pub type DeleteHandler = Arc<dyn Fn(Option<i64>) + Send + Sync>;

type RenderFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Visual tone of a badge cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Neutral,
    Primary,
    Success,
    Warning,
    Error,
}

impl BadgeTone {
    /// CSS modifier used by the `badge` component
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "badge--neutral",
            BadgeTone::Primary => "badge--primary",
            BadgeTone::Success => "badge--success",
            BadgeTone::Warning => "badge--warning",
            BadgeTone::Error => "badge--error",
        }
    }
}

/// Displayable result of rendering one column for one record
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    /// Absent value, shown as [`PLACEHOLDER`]
    Placeholder,
    Badge { text: String, tone: BadgeTone },
    /// ISO-8601 timestamp, formatted by the view
    DateTime(String),
    Actions(RowActions),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Text cell for an optional value, falling back to the placeholder
    pub fn optional_text<S: AsRef<str>>(value: Option<S>) -> Self {
        match value {
            Some(v) if !v.as_ref().trim().is_empty() => CellValue::Text(v.as_ref().to_string()),
            _ => CellValue::Placeholder,
        }
    }

    pub fn badge(text: impl Into<String>, tone: BadgeTone) -> Self {
        CellValue::Badge {
            text: text.into(),
            tone,
        }
    }

    /// Plain-text form of the cell (used for titles and exports)
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) | CellValue::DateTime(s) => s.clone(),
            CellValue::Placeholder => PLACEHOLDER.to_string(),
            CellValue::Badge { text, .. } => text.clone(),
            CellValue::Actions(_) => String::new(),
        }
    }
}

/// Affordances rendered in the actions cell of one row
#[derive(Clone, PartialEq)]
pub struct RowActions {
    pub record_id: i64,
    pub edit: bool,
    pub delete: Option<DeleteTrigger>,
}

impl fmt::Debug for RowActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("record_id", &self.record_id)
            .field("edit", &self.edit)
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

/// Delete affordance bound to one record.
///
/// Two triggers are equal when they target the same record; the handler
/// identity does not take part in comparison.
#[derive(Clone)]
pub struct DeleteTrigger {
    record_id: i64,
    handler: DeleteHandler,
}

impl DeleteTrigger {
    pub fn new(record_id: i64, handler: DeleteHandler) -> Self {
        Self { record_id, handler }
    }

    pub fn record_id(&self) -> i64 {
        self.record_id
    }

    /// User confirmed the deletion
    pub fn confirm(&self) {
        (self.handler)(Some(self.record_id));
    }

    /// User dismissed the confirmation
    pub fn cancel(&self) {
        (self.handler)(None);
    }
}

impl PartialEq for DeleteTrigger {
    fn eq(&self, other: &Self) -> bool {
        self.record_id == other.record_id
    }
}

impl fmt::Debug for DeleteTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteTrigger")
            .field("record_id", &self.record_id)
            .finish()
    }
}

/// One column of a table over records of type `T`
pub struct Column<T> {
    label: &'static str,
    class_name: Option<&'static str>,
    render: RenderFn<T>,
}

impl<T> Column<T> {
    pub fn new<F>(label: &'static str, render: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            label,
            class_name: None,
            render: Arc::new(render),
        }
    }

    /// Layout hint forwarded to the header and body cells
    pub fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn class_name(&self) -> Option<&'static str> {
        self.class_name
    }

    pub fn render(&self, record: &T) -> CellValue {
        (self.render)(record)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            class_name: self.class_name,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Ordered columns of one table.
///
/// Built once per view from the capability flags; rebuilt, never mutated,
/// when the flags change.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T: 'static> ColumnSet<T> {
    /// Assembles a column set from the data columns and appends the actions
    /// column when at least one capability is granted.
    pub fn build<F>(
        data_columns: Vec<Column<T>>,
        record_id: F,
        on_delete: DeleteHandler,
        can_edit: bool,
        can_delete: bool,
    ) -> Self
    where
        F: Fn(&T) -> i64 + Send + Sync + 'static,
    {
        let mut columns = data_columns;
        if can_edit || can_delete {
            columns.push(
                Column::new(ACTIONS_LABEL, move |record: &T| {
                    let id = record_id(record);
                    CellValue::Actions(RowActions {
                        record_id: id,
                        edit: can_edit,
                        delete: can_delete.then(|| DeleteTrigger::new(id, on_delete.clone())),
                    })
                })
                .with_class("table__col--actions"),
            );
        }
        Self { columns }
    }
}

impl<T> ColumnSet<T> {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label).collect()
    }

    pub fn has_actions(&self) -> bool {
        self.columns
            .last()
            .map(|c| c.label == ACTIONS_LABEL)
            .unwrap_or(false)
    }

    /// Renders every column for one record, in column order
    pub fn render_row(&self, record: &T) -> Vec<CellValue> {
        self.columns.iter().map(|c| c.render(record)).collect()
    }
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a ColumnSet<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Handler that ignores every call; handy for read-only tables
pub fn noop_delete_handler() -> DeleteHandler {
    Arc::new(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Row {
        id: i64,
        name: Option<String>,
    }

    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Row> {
        ColumnSet::build(
            vec![Column::new("Name", |r: &Row| CellValue::optional_text(r.name.as_deref()))],
            |r| r.id,
            on_delete,
            can_edit,
            can_delete,
        )
    }

    #[test]
    fn test_actions_presence_follows_flags() {
        for can_edit in [false, true] {
            for can_delete in [false, true] {
                let set = columns(noop_delete_handler(), can_edit, can_delete);
                assert_eq!(set.has_actions(), can_edit || can_delete);
                assert_eq!(set.len(), if can_edit || can_delete { 2 } else { 1 });
                assert_eq!(set.labels()[0], "Name");
            }
        }
    }

    #[test]
    fn test_missing_value_renders_placeholder() {
        let set = columns(noop_delete_handler(), false, false);
        let row = Row { id: 1, name: None };
        assert_eq!(set.render_row(&row), vec![CellValue::Placeholder]);
        assert_eq!(CellValue::Placeholder.display_text(), PLACEHOLDER);
    }

    #[test]
    fn test_delete_trigger_invokes_handler() {
        let calls: Arc<Mutex<Vec<Option<i64>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let set = columns(Arc::new(move |id| sink.lock().unwrap().push(id)), false, true);
        let row = Row {
            id: 42,
            name: Some("Ada".into()),
        };

        // rendering alone must not call the handler
        let cells = set.render_row(&row);
        assert!(calls.lock().unwrap().is_empty());

        let CellValue::Actions(actions) = &cells[1] else {
            panic!("expected actions cell");
        };
        assert!(!actions.edit);
        let trigger = actions.delete.as_ref().unwrap();
        trigger.cancel();
        trigger.confirm();
        assert_eq!(*calls.lock().unwrap(), vec![None, Some(42)]);
    }

    #[test]
    fn test_edit_only_has_no_delete_trigger() {
        let set = columns(noop_delete_handler(), true, false);
        let row = Row { id: 7, name: None };
        match set.render_row(&row).pop() {
            Some(CellValue::Actions(actions)) => {
                assert_eq!(actions.record_id, 7);
                assert!(actions.edit);
                assert!(actions.delete.is_none());
            }
            other => panic!("unexpected cell {:?}", other),
        }
    }
}
