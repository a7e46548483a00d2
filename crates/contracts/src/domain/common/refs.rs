use serde::{Deserialize, Serialize};

/// Embedded reference to a user (assignee, causer, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub name: String,
}

/// Embedded reference to a named lookup record (role, lead source, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

/// Name of an optional relation, if present and non-blank
pub fn ref_name<R: AsRef<str>>(relation: Option<&R>) -> Option<&str> {
    relation.map(|r| r.as_ref()).filter(|n| !n.trim().is_empty())
}

impl AsRef<str> for UserRef {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for NamedRef {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
