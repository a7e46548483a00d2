use serde::{Deserialize, Serialize};

use crate::enums::entity_kind::EntityKind;

/// Permission granting every action on every resource
pub const WILDCARD_PERMISSION: &str = "*";

/// Signed-in user as reported by `/api/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    /// Permission names such as `"leads.edit"` or `"users.delete"`
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn can(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == WILDCARD_PERMISSION || p == permission)
    }
}

/// Edit/delete affordances granted on one list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        can_edit: false,
        can_delete: false,
    };

    pub const ALL: Capabilities = Capabilities {
        can_edit: true,
        can_delete: true,
    };

    /// Looks up `<resource>.edit` and `<resource>.delete` for the kind
    pub fn resolve(kind: EntityKind, user: &CurrentUser) -> Self {
        let resource = kind.resource();
        Self {
            can_edit: user.can(&format!("{}.edit", resource)),
            can_delete: user.can(&format!("{}.delete", resource)),
        }
    }

    pub fn any(&self) -> bool {
        self.can_edit || self.can_delete
    }
}
