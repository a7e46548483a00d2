use serde::{Deserialize, Serialize};

use crate::domain::common::CrmEntity;
use crate::enums::entity_kind::EntityKind;
use crate::shared::list_options::{FilterOption, SelectChoice, SortOption};
use crate::shared::table::{BadgeTone, CellValue, Column, ColumnSet, DeleteHandler};

/// In-app notification addressed to the current user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    /// Notification type sent by the server, e.g. `lead_assigned`
    pub kind: String,
    #[serde(default)]
    pub read_at: Option<String>,
    pub created_at: String,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}

pub const READ_CHOICES: &[SelectChoice] = &[
    SelectChoice { label: "Unread", value: "unread" },
    SelectChoice { label: "Read", value: "read" },
];

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption::select("Status", "read_status", READ_CHOICES, "All"),
    FilterOption::date("Received", "date", "Select date"),
];

pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption::new("Received", "created_at"),
    SortOption::new("Title", "title"),
];

pub fn notification_columns(
    on_delete: DeleteHandler,
    can_edit: bool,
    can_delete: bool,
) -> ColumnSet<Notification> {
    ColumnSet::build(
        vec![
            Column::new("Title", |n: &Notification| CellValue::text(&n.title)),
            Column::new("Message", |n: &Notification| {
                CellValue::optional_text(Some(&n.message))
            }),
            Column::new("Status", |n: &Notification| {
                if n.is_read() {
                    CellValue::badge("Read", BadgeTone::Neutral)
                } else {
                    CellValue::badge("Unread", BadgeTone::Primary)
                }
            }),
            Column::new("Received", |n: &Notification| {
                CellValue::DateTime(n.created_at.clone())
            })
            .with_class("table__col--date"),
        ],
        |n| n.id,
        on_delete,
        can_edit,
        can_delete,
    )
}

impl CrmEntity for Notification {
    const KIND: EntityKind = EntityKind::Notifications;

    fn id(&self) -> i64 {
        self.id
    }

    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Self> {
        notification_columns(on_delete, can_edit, can_delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::noop_delete_handler;

    #[test]
    fn test_read_state_badge() {
        let mut n = Notification {
            id: 1,
            title: "Lead assigned".into(),
            message: " ".into(),
            kind: "lead_assigned".into(),
            read_at: None,
            created_at: "2024-05-02T09:30:00Z".into(),
        };
        let columns = notification_columns(noop_delete_handler(), false, true);
        assert_eq!(columns.render_row(&n)[2].display_text(), "Unread");
        assert_eq!(columns.render_row(&n)[1], CellValue::Placeholder);

        n.read_at = Some("2024-05-03T10:00:00Z".into());
        assert_eq!(columns.render_row(&n)[2].display_text(), "Read");
        assert!(columns.has_actions());
    }

    #[test]
    fn test_deserialize_notification() {
        let json = r#"{"id": 3, "title": "Lead assigned", "message": "Acme was assigned to you",
            "kind": "lead_assigned", "read_at": null, "created_at": "2024-05-02T09:30:00Z"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, "lead_assigned");
        assert!(!n.is_read());
        let cells = notification_columns(noop_delete_handler(), false, false).render_row(&n);
        assert_eq!(cells[1], CellValue::text("Acme was assigned to you"));
        assert_eq!(cells.len(), 4);
    }
}
