use serde::{Deserialize, Serialize};

use crate::domain::a001_lead::list as lead_list;
use crate::shared::list_options::{FilterOption, SortOption};
use crate::system::{activity_logs, notifications, users};

/// Record kinds shown in list views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Users,
    Leads,
    ActivityLogs,
    Notifications,
}

impl EntityKind {
    /// Resource segment of the API path and of permission names
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Leads => "leads",
            EntityKind::ActivityLogs => "activity-logs",
            EntityKind::Notifications => "notifications",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Users => "Users",
            EntityKind::Leads => "Leads",
            EntityKind::ActivityLogs => "Activity Log",
            EntityKind::Notifications => "Notifications",
        }
    }

    pub fn api_path(&self) -> String {
        format!("/api/{}", self.resource())
    }

    pub fn filter_options(&self) -> &'static [FilterOption] {
        match self {
            EntityKind::Users => users::FILTER_OPTIONS,
            EntityKind::Leads => lead_list::FILTER_OPTIONS,
            EntityKind::ActivityLogs => activity_logs::FILTER_OPTIONS,
            EntityKind::Notifications => notifications::FILTER_OPTIONS,
        }
    }

    pub fn sort_options(&self) -> &'static [SortOption] {
        match self {
            EntityKind::Users => users::SORT_OPTIONS,
            EntityKind::Leads => lead_list::SORT_OPTIONS,
            EntityKind::ActivityLogs => activity_logs::SORT_OPTIONS,
            EntityKind::Notifications => notifications::SORT_OPTIONS,
        }
    }

    pub fn all() -> Vec<EntityKind> {
        vec![
            EntityKind::Leads,
            EntityKind::Users,
            EntityKind::ActivityLogs,
            EntityKind::Notifications,
        ]
    }

    pub fn from_resource(resource: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.resource() == resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_options::FilterControl;

    #[test]
    fn test_every_filter_option_is_well_formed() {
        for kind in EntityKind::all() {
            for opt in kind.filter_options() {
                assert!(opt.is_well_formed(), "{:?}.{}", kind, opt.value);
                match opt.control {
                    FilterControl::Select { options } => assert!(!options.is_empty()),
                    FilterControl::Date | FilterControl::Text => {
                        assert!(opt.control.choices().is_none())
                    }
                }
            }
            assert!(!kind.sort_options().is_empty());
        }
    }

    #[test]
    fn test_resource_round_trip() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_resource(kind.resource()), Some(kind));
        }
        assert_eq!(EntityKind::Leads.api_path(), "/api/leads");
        assert_eq!(EntityKind::from_resource("deals"), None);
    }
}
