//! Flash messages attached to navigation responses
//!
//! A flash payload lives for exactly one navigation. [`FlashGate`] remembers
//! the last navigation it has seen so that re-rendering the same navigation
//! never shows the same toast twice.

use serde::{Deserialize, Serialize};

/// Transient notification payload of one response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Severity channel of the toast surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashChannel {
    /// success, message
    Positive,
    /// error, warning
    Negative,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            error: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dispatches().is_empty()
    }

    /// One dispatch per populated field. Blank strings are ignored.
    pub fn dispatches(&self) -> Vec<(FlashChannel, String)> {
        [
            (FlashChannel::Positive, &self.success),
            (FlashChannel::Positive, &self.message),
            (FlashChannel::Negative, &self.error),
            (FlashChannel::Negative, &self.warning),
        ]
        .into_iter()
        .filter_map(|(channel, text)| match text {
            Some(t) if !t.trim().is_empty() => Some((channel, t.clone())),
            _ => None,
        })
        .collect()
    }
}

/// Identity of one navigation (one list response, one delete response, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NavigationId(pub u64);

impl NavigationId {
    pub fn next(self) -> Self {
        NavigationId(self.0 + 1)
    }
}

/// One-shot filter keyed on navigation identity
#[derive(Debug, Clone, Default)]
pub struct FlashGate {
    last_seen: Option<NavigationId>,
}

impl FlashGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dispatches of `flash` the first time `navigation` is
    /// observed, and nothing on any later observation of it.
    pub fn observe(
        &mut self,
        navigation: NavigationId,
        flash: &FlashMessage,
    ) -> Vec<(FlashChannel, String)> {
        if self.last_seen == Some(navigation) {
            return Vec::new();
        }
        self.last_seen = Some(navigation);
        flash.dispatches()
    }

    pub fn last_seen(&self) -> Option<NavigationId> {
        self.last_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let flash = FlashMessage {
            success: Some("Saved".into()),
            error: Some("Failed".into()),
            message: Some("Heads up".into()),
            warning: Some("Careful".into()),
        };
        let dispatches = flash.dispatches();
        assert_eq!(dispatches.len(), 4);
        let positive = dispatches
            .iter()
            .filter(|(c, _)| *c == FlashChannel::Positive)
            .count();
        assert_eq!(positive, 2);
        assert!(dispatches.contains(&(FlashChannel::Negative, "Careful".into())));
    }

    #[test]
    fn test_gate_dispatches_once_per_navigation() {
        let flash = FlashMessage {
            success: Some("Saved".into()),
            error: Some("Failed".into()),
            ..FlashMessage::default()
        };
        let mut gate = FlashGate::new();
        let nav = NavigationId(1);

        let first = gate.observe(nav, &flash);
        assert_eq!(
            first,
            vec![
                (FlashChannel::Positive, "Saved".to_string()),
                (FlashChannel::Negative, "Failed".to_string()),
            ]
        );
        assert!(gate.observe(nav, &flash).is_empty());

        // a new navigation carrying the same payload is shown again
        assert_eq!(gate.observe(nav.next(), &flash).len(), 2);
    }

    #[test]
    fn test_missing_and_blank_fields() {
        let flash: FlashMessage = serde_json::from_str(r#"{"success": "  ", "warning": null}"#).unwrap();
        assert!(flash.is_empty());
        assert_eq!(serde_json::to_string(&FlashMessage::default()).unwrap(), "{}");
        assert!(!FlashMessage::error("Nope").is_empty());
    }
}
