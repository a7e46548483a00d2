use serde::{Deserialize, Serialize};

use crate::domain::common::{ref_name, CrmEntity, UserRef};
use crate::enums::entity_kind::EntityKind;
use crate::shared::list_options::{FilterOption, SelectChoice, SortOption};
use crate::shared::table::{BadgeTone, CellValue, Column, ColumnSet, DeleteHandler};

/// Audit trail entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    pub description: String,
    #[serde(default)]
    pub event: Option<String>,
    /// User who caused the change; absent for system jobs
    #[serde(default)]
    pub causer: Option<UserRef>,
    #[serde(default)]
    pub subject_type: Option<String>,
    pub created_at: String,
}

pub const EVENT_CHOICES: &[SelectChoice] = &[
    SelectChoice { label: "Created", value: "created" },
    SelectChoice { label: "Updated", value: "updated" },
    SelectChoice { label: "Deleted", value: "deleted" },
];

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption::select("Event", "event", EVENT_CHOICES, "All events"),
    FilterOption::text("Causer", "causer", "User name"),
    FilterOption::date("Date", "date", "Select date"),
];

pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption::new("Date", "created_at"),
    SortOption::new("Event", "event"),
];

fn event_tone(event: &str) -> BadgeTone {
    match event {
        "created" => BadgeTone::Success,
        "updated" => BadgeTone::Primary,
        "deleted" => BadgeTone::Error,
        _ => BadgeTone::Neutral,
    }
}

pub fn activity_log_columns(
    on_delete: DeleteHandler,
    can_edit: bool,
    can_delete: bool,
) -> ColumnSet<ActivityLog> {
    ColumnSet::build(
        vec![
            Column::new("Causer", |a: &ActivityLog| {
                CellValue::optional_text(ref_name(a.causer.as_ref()))
            }),
            Column::new("Event", |a: &ActivityLog| match a.event.as_deref() {
                Some(event) if !event.is_empty() => CellValue::badge(event, event_tone(event)),
                _ => CellValue::Placeholder,
            }),
            Column::new("Description", |a: &ActivityLog| {
                let text = match a.subject_type.as_deref() {
                    Some(subject) if !subject.is_empty() => {
                        format!("{} ({})", a.description, subject)
                    }
                    _ => a.description.clone(),
                };
                CellValue::Text(text)
            }),
            Column::new("Date", |a: &ActivityLog| CellValue::DateTime(a.created_at.clone()))
                .with_class("table__col--date"),
        ],
        |a| a.id,
        on_delete,
        can_edit,
        can_delete,
    )
}

impl CrmEntity for ActivityLog {
    const KIND: EntityKind = EntityKind::ActivityLogs;

    fn id(&self) -> i64 {
        self.id
    }

    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Self> {
        activity_log_columns(on_delete, can_edit, can_delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::noop_delete_handler;

    #[test]
    fn test_entry_without_causer_renders_placeholder() {
        let json = r#"{"id": 5, "description": "Lead imported", "created_at": "2024-05-02T09:30:00Z"}"#;
        let entry: ActivityLog = serde_json::from_str(json).unwrap();
        let cells = activity_log_columns(noop_delete_handler(), false, false).render_row(&entry);
        assert_eq!(cells[0], CellValue::Placeholder);
        assert_eq!(cells[0].display_text(), "N/A");
        assert_eq!(cells[1], CellValue::Placeholder);
        assert_eq!(cells[2], CellValue::text("Lead imported"));
    }

    #[test]
    fn test_subject_is_appended() {
        let entry = ActivityLog {
            id: 9,
            description: "updated".into(),
            event: Some("updated".into()),
            causer: Some(UserRef { id: 1, name: "Ada".into() }),
            subject_type: Some("Lead".into()),
            created_at: "2024-05-02T09:30:00Z".into(),
        };
        let cells = activity_log_columns(noop_delete_handler(), false, true).render_row(&entry);
        assert_eq!(cells[0], CellValue::text("Ada"));
        assert_eq!(cells[1], CellValue::badge("updated", BadgeTone::Primary));
        assert_eq!(cells[2], CellValue::text("updated (Lead)"));
        assert_eq!(cells.len(), 5);
    }
}
