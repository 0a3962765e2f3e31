use serde::{Deserialize, Serialize};

/// Runtime settings for the notification manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// The maximum number of notifications that can be live at once.
    /// 0 disables the bound.
    #[serde(default = "default_max_notifications")]
    pub max_notifications: u32,
    /// Length of the exit-animation window in milliseconds: the time a
    /// notification stays in the removing phase before hard removal.
    #[serde(default = "default_animation_window_ms")]
    pub animation_window_ms: u64,
    /// Default auto-dismiss duration for success notifications (ms).
    #[serde(default = "default_duration_success_ms")]
    pub duration_success_ms: u64,
    /// Default auto-dismiss duration for error notifications (ms), applied
    /// when an error is posted as non-persistent.
    #[serde(default = "default_duration_error_ms")]
    pub duration_error_ms: u64,
    /// Default auto-dismiss duration for warning notifications (ms).
    #[serde(default = "default_duration_warning_ms")]
    pub duration_warning_ms: u64,
    /// Default auto-dismiss duration for info notifications (ms).
    #[serde(default = "default_duration_info_ms")]
    pub duration_info_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_notifications: default_max_notifications(),
            animation_window_ms: default_animation_window_ms(),
            duration_success_ms: default_duration_success_ms(),
            duration_error_ms: default_duration_error_ms(),
            duration_warning_ms: default_duration_warning_ms(),
            duration_info_ms: default_duration_info_ms(),
        }
    }
}

// Default value helpers for serde
const fn default_max_notifications() -> u32 {
    5
}

const fn default_animation_window_ms() -> u64 {
    300
}

const fn default_duration_success_ms() -> u64 {
    3000
}

const fn default_duration_error_ms() -> u64 {
    8000
}

const fn default_duration_warning_ms() -> u64 {
    5000
}

const fn default_duration_info_ms() -> u64 {
    5000
}
