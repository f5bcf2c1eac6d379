//! Parse diagnostics.
//!
//! DXF is intentionally extensible: unknown sections, unknown entity types,
//! unknown group codes and declared-count mismatches must not break a
//! consumer. Such conditions are collected as [`Notification`] items on the
//! parsed document instead of being silently dropped or escalated to hard
//! errors. After a parse the caller can inspect
//! [`DxfDocument::notifications`](crate::document::DxfDocument) to see what
//! was skipped or reconciled.

use std::fmt;

/// Severity / category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A section, entity type or object is not handled by this parser.
    Unsupported,
    /// Non-fatal inconsistency (count mismatch, dropped unnamed block, ...).
    Warning,
    /// An error that was recovered from without aborting the parse.
    Recovered,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "Unsupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Recovered => write!(f, "Recovered"),
        }
    }
}

/// A single diagnostic produced during parsing or interpretation.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub kind: NotificationKind,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Collects notifications during a parse or interpretation pass.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.items.push(Notification::new(kind, message));
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific kind.
    pub fn of_kind(&self, kind: NotificationKind) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.kind == kind).collect()
    }

    /// Check whether any notification of the given kind exists.
    pub fn has_kind(&self, kind: NotificationKind) -> bool {
        self.items.iter().any(|n| n.kind == kind)
    }
}

impl IntoIterator for Notifications {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notifications {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationKind::Warning, "block without a name dropped");
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.message, "block without a name dropped");
    }

    #[test]
    fn test_collection_basics() {
        let mut c = Notifications::new();
        assert!(c.is_empty());

        c.notify(NotificationKind::Warning, "w1");
        c.notify(NotificationKind::Unsupported, "u1");
        c.notify(NotificationKind::Warning, "w2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_kind(NotificationKind::Warning).len(), 2);
        assert!(c.has_kind(NotificationKind::Unsupported));
        assert!(!c.has_kind(NotificationKind::Recovered));
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationKind::Unsupported, "XLINE entity skipped");
        assert_eq!(format!("{}", n), "[Unsupported] XLINE entity skipped");
    }
}
