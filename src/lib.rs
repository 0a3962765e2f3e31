//! Client-side notification manager for the to-do application.
//!
//! Accepts requests to display transient or persistent status messages,
//! assigns each a priority and lifetime policy, keeps the list in display
//! order, and retires entries either on a timer or on explicit dismissal,
//! with a two-phase removal (a visible "removing" state followed by hard
//! deletion) so the rendering layer can play exit animations.
//!
//! Rendering itself is out of scope: consumers read the sorted live list
//! and the removing-id set (or subscribe to [`NotificationEvent`]s) and
//! call back into [`NotificationCenter`] to dismiss.

mod center;
mod constants;
mod error;
mod events;
mod ranker;
mod scheduler;
mod state;

pub use center::NotificationCenter;
pub use error::NotificationError;
pub use events::{DismissReason, NotificationEvent};
pub use ranker::{display_order, eviction_order, rank};

pub use todo_notifications_config::NotificationsConfig;
pub use todo_notifications_util::{
    AriaLive, HookFn, Notification, NotificationHooks, NotificationId, NotificationOptions,
    Priority, Severity,
};

use std::sync::OnceLock;

static CENTER: OnceLock<NotificationCenter> = OnceLock::new();

/// Install the process-wide notification center.
///
/// Call once during application startup; subsequent calls fail with
/// [`NotificationError::AlreadyInitialized`]. Returns a handle to the
/// installed center. Code that owns its own [`NotificationCenter`] does
/// not need this at all.
pub fn init(config: NotificationsConfig) -> Result<NotificationCenter, NotificationError> {
    let center = NotificationCenter::new(config);
    CENTER
        .set(center.clone())
        .map_err(|_| NotificationError::AlreadyInitialized)?;
    Ok(center)
}

/// The process-wide center installed by [`init`].
///
/// Using the manager before `init` is a wiring bug in the host
/// application, reported loudly as
/// [`NotificationError::NotInitialized`] instead of degrading to an empty
/// store.
pub fn center() -> Result<NotificationCenter, NotificationError> {
    CENTER.get().cloned().ok_or(NotificationError::NotInitialized)
}
