//! Filter and sort option schema of list views
//!
//! The `value` of every option is the exact query-parameter name the server
//! expects; there is no renaming layer between this schema and the request.

use serde::Serialize;

/// One enumerated choice of a select filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectChoice {
    pub label: &'static str,
    pub value: &'static str,
}

/// UI control needed to edit a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterControl {
    Select { options: &'static [SelectChoice] },
    Date,
    Text,
}

impl FilterControl {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterControl::Select { .. } => "select",
            FilterControl::Date => "date",
            FilterControl::Text => "text",
        }
    }

    pub fn choices(&self) -> Option<&'static [SelectChoice]> {
        match self {
            FilterControl::Select { options } => Some(*options),
            _ => None,
        }
    }
}

/// One filterable field of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub label: &'static str,
    pub value: &'static str,
    #[serde(flatten)]
    pub control: FilterControl,
    pub placeholder: &'static str,
}

impl FilterOption {
    pub const fn select(
        label: &'static str,
        value: &'static str,
        options: &'static [SelectChoice],
        placeholder: &'static str,
    ) -> Self {
        Self {
            label,
            value,
            control: FilterControl::Select { options },
            placeholder,
        }
    }

    pub const fn date(label: &'static str, value: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            value,
            control: FilterControl::Date,
            placeholder,
        }
    }

    pub const fn text(label: &'static str, value: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            value,
            control: FilterControl::Text,
            placeholder,
        }
    }

    /// A select filter must offer at least one choice
    pub fn is_well_formed(&self) -> bool {
        match self.control {
            FilterControl::Select { options } => !options.is_empty(),
            FilterControl::Date | FilterControl::Text => true,
        }
    }

    /// Label of the choice matching `value`, falling back to the raw value
    pub fn choice_label<'a>(&self, value: &'a str) -> &'a str {
        self.control
            .choices()
            .and_then(|choices| choices.iter().find(|c| c.value == value))
            .map(|c| c.label)
            .unwrap_or(value)
    }
}

/// One sortable field of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub label: &'static str,
    pub value: &'static str,
}

impl SortOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUSES: &[SelectChoice] = &[
        SelectChoice { label: "New", value: "new" },
        SelectChoice { label: "Won", value: "won" },
    ];

    #[test]
    fn test_select_serializes_options() {
        let opt = FilterOption::select("Status", "status", STATUSES, "All statuses");
        let json = serde_json::to_value(opt).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["value"], "status");
        assert_eq!(json["options"][1]["value"], "won");
        assert_eq!(json["placeholder"], "All statuses");
    }

    #[test]
    fn test_date_and_text_omit_options() {
        for opt in [
            FilterOption::date("Created", "created_at", "Pick a date"),
            FilterOption::text("Email", "email", "Search email"),
        ] {
            let json = serde_json::to_value(opt).unwrap();
            assert!(json.get("options").is_none());
            assert_eq!(json["type"], opt.control.as_str());
        }
    }

    #[test]
    fn test_well_formed_and_choice_label() {
        let opt = FilterOption::select("Status", "status", STATUSES, "");
        assert!(opt.is_well_formed());
        assert_eq!(opt.choice_label("won"), "Won");
        assert_eq!(opt.choice_label("lost"), "lost");
        assert!(!FilterOption::select("Empty", "empty", &[], "").is_well_formed());
    }
}
