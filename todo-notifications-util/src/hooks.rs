use std::fmt;
use std::sync::Arc;

/// Zero-argument callback attached to a notification record.
pub type HookFn = Arc<dyn Fn() + Send + Sync + 'static>;

/// Optional lifecycle callbacks carried by a notification.
///
/// `on_dismiss` is invoked by the manager exactly once when the record
/// leaves the live list, whatever the path (timer, explicit dismissal,
/// eviction, clear). `on_retry` is only meaningful for retryable records
/// and is invoked by the rendering layer, not the manager.
#[derive(Clone, Default)]
pub struct NotificationHooks {
    pub on_retry: Option<HookFn>,
    pub on_dismiss: Option<HookFn>,
}

impl NotificationHooks {
    /// Run the dismiss callback if one is attached.
    pub fn dismiss(&self) {
        if let Some(hook) = &self.on_dismiss {
            hook();
        }
    }

    /// Run the retry callback if one is attached.
    pub fn retry(&self) {
        if let Some(hook) = &self.on_retry {
            hook();
        }
    }
}

impl fmt::Debug for NotificationHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHooks")
            .field("on_retry", &self.on_retry.is_some())
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}
