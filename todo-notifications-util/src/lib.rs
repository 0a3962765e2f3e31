pub mod aria;
pub mod hooks;
pub mod id;
pub mod priority;
pub mod severity;

pub use aria::AriaLive;
pub use hooks::{HookFn, NotificationHooks};
pub use id::NotificationId;
pub use priority::Priority;
pub use severity::Severity;

use std::fmt;
use std::time::Duration;

use tokio::time::Instant;

/// A single status message shown by the to-do application.
///
/// Immutable once created; whether the record is mid-exit-animation is
/// tracked by the store, not here. The `id` is the sole external handle.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    /// Whether the record is eligible for timer-driven dismissal at all.
    pub auto_dismiss: bool,
    /// Delay before the auto-dismiss timer fires. Ignored when the record
    /// is persistent or `auto_dismiss` is off.
    pub duration: Duration,
    /// Persistent records stay up until dismissed, whatever
    /// `auto_dismiss`/`duration` say.
    pub persistent: bool,
    pub retryable: bool,
    pub priority: Priority,
    /// Whether a manual-dismiss affordance should be offered downstream.
    pub dismissible: bool,
    pub aria_live: AriaLive,
    pub screen_reader_announcement: Option<String>,
    /// Optional error detail attached by the caller, e.g. for retryable
    /// failure toasts.
    pub error: Option<String>,
    pub hooks: NotificationHooks,
    /// Monotonic creation stamp; the ordering tie-breaker and eviction key.
    pub created_at: Instant,
}

impl Notification {
    /// Build a record from caller options, filling every unspecified field
    /// from the severity's defaults. `default_duration` is the configured
    /// fallback auto-dismiss duration for this severity.
    pub fn from_options(
        message: impl Into<String>,
        severity: Severity,
        options: NotificationOptions,
        default_duration: Duration,
    ) -> Self {
        Self {
            id: NotificationId::generate(),
            severity,
            message: message.into(),
            auto_dismiss: options.auto_dismiss.unwrap_or(true),
            duration: options.duration.unwrap_or(default_duration),
            persistent: options.persistent.unwrap_or(severity.default_persistent()),
            retryable: options.retryable,
            priority: options.priority.unwrap_or(severity.default_priority()),
            dismissible: options.dismissible.unwrap_or(true),
            aria_live: options.aria_live.unwrap_or(severity.default_aria_live()),
            screen_reader_announcement: options.screen_reader_announcement,
            error: options.error,
            hooks: NotificationHooks {
                on_retry: options.on_retry,
                on_dismiss: options.on_dismiss,
            },
            created_at: Instant::now(),
        }
    }

    /// Delay until the auto-dismiss timer should fire, or `None` when the
    /// record is not eligible for timer-driven dismissal.
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        if self.persistent || !self.auto_dismiss || self.duration.is_zero() {
            None
        } else {
            Some(self.duration)
        }
    }
}

/// Caller-supplied overrides for a new notification.
///
/// Every field left `None` (or `false` for `retryable`) falls back to the
/// severity defaults described on [`Notification`].
#[derive(Clone, Default)]
pub struct NotificationOptions {
    pub auto_dismiss: Option<bool>,
    pub duration: Option<Duration>,
    pub persistent: Option<bool>,
    pub retryable: bool,
    pub priority: Option<Priority>,
    pub dismissible: Option<bool>,
    pub aria_live: Option<AriaLive>,
    pub screen_reader_announcement: Option<String>,
    pub error: Option<String>,
    pub on_retry: Option<HookFn>,
    pub on_dismiss: Option<HookFn>,
}

impl fmt::Debug for NotificationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationOptions")
            .field("auto_dismiss", &self.auto_dismiss)
            .field("duration", &self.duration)
            .field("persistent", &self.persistent)
            .field("retryable", &self.retryable)
            .field("priority", &self.priority)
            .field("dismissible", &self.dismissible)
            .field("aria_live", &self.aria_live)
            .field(
                "screen_reader_announcement",
                &self.screen_reader_announcement,
            )
            .field("error", &self.error)
            .field("on_retry", &self.on_retry.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
