//! Backlog and results entities

use crate::core::error::SessionError;
use crate::estimate::vote::Vote;
use serde::{Deserialize, Serialize};

/// A unit of work to be estimated
///
/// Decoded from the backlog file; unknown fields in the source object are
/// ignored, only `feature` matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    /// Short description of the work item
    pub feature: String,
}

impl BacklogItem {
    pub fn new(feature: impl Into<String>) -> Self {
        Self { feature: feature.into() }
    }
}

impl std::fmt::Display for BacklogItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.feature)
    }
}

/// The ordered, non-empty list of items for one session
///
/// Immutable once a session starts; replaced wholesale by a new-session
/// action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Backlog {
    items: Vec<BacklogItem>,
}

impl Backlog {
    /// Build a backlog, rejecting an empty item list
    pub fn new(items: Vec<BacklogItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::EmptyBacklog);
        }
        Ok(Self { items })
    }

    /// Items in estimation order
    pub fn items(&self) -> &[BacklogItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at a backlog position
    pub fn item_at(&self, index: usize) -> Option<&BacklogItem> {
        self.items.get(index)
    }
}

/// One line of the exported results: an item and its agreed note
///
/// The note is either the resolved numeric value or the BREAK marker
/// recorded when the table paused on this item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// The backlog item's feature text
    pub task: String,
    /// Agreed value, or "break" for a confirmed pause
    pub note: Vote,
}

impl ResultEntry {
    /// Record a resolved estimate for an item
    pub fn resolved(task: impl Into<String>, value: f64) -> Self {
        Self { task: task.into(), note: Vote::Estimate(value) }
    }

    /// Record a confirmed pause on an item
    pub fn break_marker(task: impl Into<String>) -> Self {
        Self { task: task.into(), note: Vote::Break }
    }

    /// Check if this entry marks a pause rather than an estimate
    pub fn is_break(&self) -> bool {
        self.note.is_break()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backlog_rejects_empty() {
        let result = Backlog::new(vec![]);
        assert!(matches!(result, Err(SessionError::EmptyBacklog)));
    }

    #[test]
    fn test_backlog_keeps_order() {
        let backlog = Backlog::new(vec![
            BacklogItem::new("login page"),
            BacklogItem::new("search api"),
        ])
        .unwrap();
        assert_eq!(backlog.len(), 2);
        assert_eq!(backlog.item_at(0).unwrap().feature, "login page");
        assert_eq!(backlog.item_at(1).unwrap().feature, "search api");
        assert!(backlog.item_at(2).is_none());
    }

    #[test]
    fn test_backlog_decodes_items_ignoring_extra_fields() {
        let json = r#"[
            {"feature": "login page", "id": 12, "priority": "high"},
            {"feature": "search api"}
        ]"#;
        let items: Vec<BacklogItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].feature, "login page");
    }

    #[test]
    fn test_result_entry_json_shape() {
        let entry = ResultEntry::resolved("login page", 2.75);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"task":"login page","note":2.75}"#);

        let pause = ResultEntry::break_marker("search api");
        let json = serde_json::to_string(&pause).unwrap();
        assert_eq!(json, r#"{"task":"search api","note":"break"}"#);
        assert!(pause.is_break());
    }
}
