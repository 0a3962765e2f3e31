use std::fmt;

use uuid::Uuid;

/// Opaque handle for a posted notification.
///
/// Generated once at creation time and used as the sole external key for
/// dismissal and UI keying. Ids are practically unique within a session;
/// no collision regeneration is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
