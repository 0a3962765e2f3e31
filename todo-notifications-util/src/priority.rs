use serde::{Deserialize, Serialize};

/// Display precedence of a notification.
///
/// Priority ranks ahead of recency: a high-priority notification is shown
/// above every medium- and low-priority one regardless of age.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Priority {
    /// Low priority notification
    Low = 0,
    /// Medium priority notification (default)
    #[default]
    Medium = 1,
    /// High priority notification
    High = 2,
}
