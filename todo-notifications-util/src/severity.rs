use serde::{Deserialize, Serialize};

use crate::aria::AriaLive;
use crate::priority::Priority;

/// Kind of status message a notification conveys.
///
/// The severity chooses the default lifetime policy of a new notification:
/// errors are persistent and high priority until the caller says otherwise,
/// everything else is transient and medium priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Default display priority for this severity.
    pub fn default_priority(self) -> Priority {
        match self {
            Severity::Error => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Whether notifications of this severity stay up until dismissed
    /// when the caller does not decide.
    pub fn default_persistent(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Default politeness hint for the accessibility layer.
    pub fn default_aria_live(self) -> AriaLive {
        match self {
            Severity::Error => AriaLive::Assertive,
            _ => AriaLive::Polite,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}
