use serde::{Deserialize, Serialize};

use crate::domain::common::{ref_name, CrmEntity, NamedRef};
use crate::enums::entity_kind::EntityKind;
use crate::shared::list_options::{FilterOption, SelectChoice, SortOption};
use crate::shared::table::{BadgeTone, CellValue, Column, ColumnSet, DeleteHandler};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<NamedRef>,
    pub created_at: String,
}

pub const ROLE_CHOICES: &[SelectChoice] = &[
    SelectChoice { label: "Admin", value: "admin" },
    SelectChoice { label: "Manager", value: "manager" },
    SelectChoice { label: "Sales", value: "sales" },
];

pub const FILTER_OPTIONS: &[FilterOption] = &[
    FilterOption::select("Role", "role", ROLE_CHOICES, "All roles"),
    FilterOption::date("Joined after", "created_from", "Select date"),
];

pub const SORT_OPTIONS: &[SortOption] = &[
    SortOption::new("Name", "name"),
    SortOption::new("Email", "email"),
    SortOption::new("Created At", "created_at"),
];

fn role_tone(role: &str) -> BadgeTone {
    match role.to_lowercase().as_str() {
        "admin" => BadgeTone::Warning,
        "manager" => BadgeTone::Primary,
        _ => BadgeTone::Neutral,
    }
}

/// Columns of the users table: Name, Email, Role, Created At, then Actions
/// when editing or deleting is allowed.
pub fn user_columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<User> {
    ColumnSet::build(
        vec![
            Column::new("Name", |u: &User| CellValue::text(&u.name)),
            Column::new("Email", |u: &User| CellValue::text(&u.email)),
            Column::new("Role", |u: &User| match ref_name(u.role.as_ref()) {
                Some(role) => CellValue::badge(role, role_tone(role)),
                None => CellValue::Placeholder,
            }),
            Column::new("Created At", |u: &User| CellValue::DateTime(u.created_at.clone()))
                .with_class("table__col--date"),
        ],
        |u| u.id,
        on_delete,
        can_edit,
        can_delete,
    )
}

impl CrmEntity for User {
    const KIND: EntityKind = EntityKind::Users;

    fn id(&self) -> i64 {
        self.id
    }

    fn columns(on_delete: DeleteHandler, can_edit: bool, can_delete: bool) -> ColumnSet<Self> {
        user_columns(on_delete, can_edit, can_delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::{noop_delete_handler, ACTIONS_LABEL};

    fn sample(role: Option<&str>) -> User {
        User {
            id: 3,
            name: "Grace Hopper".into(),
            email: "grace@crm.test".into(),
            role: role.map(|name| NamedRef { id: 1, name: name.into() }),
            created_at: "2024-03-15T14:02:26.000000Z".into(),
        }
    }

    #[test]
    fn test_no_capabilities_yields_four_columns() {
        let columns = user_columns(noop_delete_handler(), false, false);
        assert_eq!(columns.labels(), vec!["Name", "Email", "Role", "Created At"]);
        assert!(!columns.has_actions());
    }

    #[test]
    fn test_edit_only_yields_actions_last() {
        let columns = user_columns(noop_delete_handler(), true, false);
        assert_eq!(columns.len(), 5);
        assert_eq!(columns.labels().last(), Some(&ACTIONS_LABEL));
    }

    #[test]
    fn test_order_is_independent_of_flags() {
        let base = user_columns(noop_delete_handler(), false, false).labels();
        for (edit, delete) in [(true, false), (false, true), (true, true)] {
            let labels = user_columns(noop_delete_handler(), edit, delete).labels();
            assert_eq!(&labels[..base.len()], base.as_slice());
        }
    }

    #[test]
    fn test_render_is_repeatable_and_tolerates_missing_role() {
        let columns = user_columns(noop_delete_handler(), true, true);
        let user = sample(None);
        assert_eq!(columns.render_row(&user), columns.render_row(&user));
        assert_eq!(columns.render_row(&user)[2], CellValue::Placeholder);

        let admin = sample(Some("Admin"));
        assert_eq!(
            columns.render_row(&admin)[2],
            CellValue::badge("Admin", BadgeTone::Warning)
        );
    }

    #[test]
    fn test_deserialize_without_role() {
        let json = r#"{"id": 1, "name": "Ada", "email": "ada@crm.test", "created_at": "2024-01-01T00:00:00Z"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.role.is_none());
    }
}
