//! Table schema of the leads list

use crate::domain::common::{ref_name, CrmEntity};
use crate::enums::entity_kind::EntityKind;
use crate::shared::list_options::{FilterOption, SelectChoice, SortOption};
use crate::shared::table::{CellValue, Column, ColumnSet, DeleteHandler};

use super::aggregate::Lead;

pub const STATUS_CHOICES: &[SelectChoice] = &[
    SelectChoice { label: "New", value: "new" },
    SelectChoice { label: "Contacted", value: "contacted" },
    SelectChoice { label: "Qualified", value: "qualified" },
    SelectChoice { label: "Proposal", value: "proposal" },
    SelectChoice { label: "Won", value: "won" },
    SelectChoice { label: "Lost", value: "lost" },
];

pub const SOURCE_CHOICES: &[SelectChoice] = &[
    SelectChoice { label: "Website", value: "website" },
    SelectChoice { label: "Referral", value: "referral" },
    SelectChoice { label: "Cold call", value: "cold_call" },
    SelectChoice { label: "Social media", value: "social_media" },
    SelectChoice { label: "Event", value: "event" },
];

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption::select("Status", "status", STATUS_CHOICES, "All statuses"),
    FilterOption::select("Source", "source", SOURCE_CHOICES, "All sources"),
    FilterOption::text("Assigned to", "assigned_to", "Assignee name"),
    FilterOption::date("Created from", "created_from", "Start date"),
    FilterOption::date("Created to", "created_to", "End date"),
];

pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption::new("Name", "name"),
    SortOption::new("Status", "status"),
    SortOption::new("Created At", "created_at"),
];

pub fn lead_columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Lead> {
    ColumnSet::build(
        vec![
            Column::new("Name", |l: &Lead| CellValue::text(&l.name)),
            Column::new("Email", |l: &Lead| CellValue::optional_text(l.email.as_deref())),
            Column::new("Status", |l: &Lead| {
                CellValue::badge(l.status.display_name(), l.status.tone())
            }),
            Column::new("Source", |l: &Lead| {
                CellValue::optional_text(ref_name(l.source.as_ref()))
            }),
            Column::new("Assigned To", |l: &Lead| {
                CellValue::optional_text(ref_name(l.assigned_to.as_ref()))
            }),
            Column::new("Created At", |l: &Lead| CellValue::DateTime(l.created_at.clone()))
                .with_class("table__col--date"),
        ],
        |l| l.id,
        on_delete,
        can_edit,
        can_delete,
    )
}

impl CrmEntity for Lead {
    const KIND: EntityKind = EntityKind::Leads;

    fn id(&self) -> i64 {
        self.id
    }

    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Self> {
        lead_columns(on_delete, can_edit, can_delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_lead::LeadStatus;
    use crate::shared::table::noop_delete_handler;

    const LEAD_JSON: &str = r#"{
        "id": 17,
        "name": "Acme Corp",
        "email": null,
        "status": "qualified",
        "source": {"id": 2, "name": "Referral"},
        "assigned_to": null,
        "created_at": "2024-05-02T09:30:00.000000Z"
    }"#;

    #[test]
    fn test_absent_relations_render_placeholder() {
        let lead: Lead = serde_json::from_str(LEAD_JSON).unwrap();
        let cells = lead_columns(noop_delete_handler(), false, false).render_row(&lead);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], CellValue::Placeholder);
        assert_eq!(cells[3], CellValue::text("Referral"));
        assert_eq!(cells[4], CellValue::Placeholder);
    }

    #[test]
    fn test_status_badge() {
        let lead: Lead = serde_json::from_str(LEAD_JSON).unwrap();
        assert_eq!(lead.status, LeadStatus::Qualified);
        let cells = Lead::columns(noop_delete_handler(), true, true).render_row(&lead);
        assert_eq!(cells[2].display_text(), "Qualified");
        assert_eq!(cells.len(), 7);
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = LEAD_JSON.replace("qualified", "nurturing");
        let lead: Lead = serde_json::from_str(&json).unwrap();
        assert_eq!(lead.status, LeadStatus::Unknown);
    }

    #[test]
    fn test_status_choices_match_codes() {
        for choice in STATUS_CHOICES {
            let status: LeadStatus =
                serde_json::from_value(serde_json::Value::String(choice.value.into())).unwrap();
            assert_eq!(status.code(), choice.value);
        }
    }
}
