use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tracing::{debug, warn};

use todo_notifications_config::NotificationsConfig;
use todo_notifications_util::{Notification, NotificationId, NotificationOptions, Severity};

use crate::constants::EVENT_CHANNEL_CAPACITY;
use crate::events::{DismissReason, NotificationEvent};
use crate::scheduler::DismissScheduler;
use crate::state::NotificationStore;

/// Owner of the live notification state for one application session.
///
/// Cheap to clone; all clones share the same state. Mutations take the
/// write lock and hold it across the whole transition with no await
/// inside, so every operation is atomic with respect to every other,
/// including the deferred actions the scheduler fires later, which
/// re-check state under the same lock and no-op when their target is
/// already gone.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<RwLock<Inner>>,
    events: broadcast::Sender<NotificationEvent>,
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter").finish_non_exhaustive()
    }
}

struct Inner {
    store: NotificationStore,
    scheduler: DismissScheduler,
    config: NotificationsConfig,
}

impl Inner {
    fn default_duration(&self, severity: Severity) -> Duration {
        let ms = match severity {
            Severity::Success => self.config.duration_success_ms,
            Severity::Error => self.config.duration_error_ms,
            Severity::Warning => self.config.duration_warning_ms,
            Severity::Info => self.config.duration_info_ms,
        };
        Duration::from_millis(ms)
    }
}

impl NotificationCenter {
    pub fn new(config: NotificationsConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                store: NotificationStore::new(),
                scheduler: DismissScheduler::new(),
                config,
            })),
            events,
        }
    }

    /// Subscribe to change events. Receivers that fall behind can always
    /// resynchronize from [`notifications`](Self::notifications) and
    /// [`removing`](Self::removing).
    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.events.subscribe()
    }

    /// Post a notification and return its id.
    ///
    /// Unset options fall back to the severity defaults. If the live list
    /// is at capacity, the lowest-priority, oldest entries are hard-dropped
    /// first (their `on_dismiss` runs, their timers are cancelled, no
    /// removing phase). The list is fully sorted again before this returns,
    /// and an auto-dismiss timer is armed when the record is eligible.
    pub async fn show_notification(
        &self,
        message: impl Into<String>,
        severity: Severity,
        options: NotificationOptions,
    ) -> NotificationId {
        let mut inner = self.inner.write().await;

        let notification = Notification::from_options(
            message,
            severity,
            options,
            inner.default_duration(severity),
        );
        let id = notification.id.clone();
        let delay = notification.auto_dismiss_after();

        self.evict_for_capacity(&mut inner);

        debug!(id = %id, severity = severity.as_str(), "notification posted");
        inner.store.push(notification);
        _ = self.events.send(NotificationEvent::Posted(id.clone()));

        if let Some(delay) = delay {
            let center = self.clone();
            let timer_id = id.clone();
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                center.begin_removal(&timer_id, DismissReason::Expired).await;
            });
            inner.scheduler.arm_dismiss(id.clone(), handle);
        }

        id
    }

    /// Immediate, non-animated removal. Runs `on_dismiss`, cancels any
    /// timers, and silently no-ops when the id is unknown.
    pub async fn dismiss_notification(&self, id: &NotificationId) {
        let mut inner = self.inner.write().await;
        self.remove_now(&mut inner, id, DismissReason::Dismissed);
    }

    /// Two-phase removal: the id joins the removing set immediately (the
    /// record stays in the live list, visibly "about to disappear"), and
    /// after the animation window the record is removed for good.
    ///
    /// Re-dismissing an id that is already removing, or unknown, is a
    /// no-op; `on_dismiss` never runs twice.
    pub async fn dismiss_notification_with_animation(&self, id: &NotificationId) {
        self.begin_removal(id, DismissReason::Dismissed).await;
    }

    /// Remove every live notification at once, without the removing phase.
    ///
    /// Each record's `on_dismiss` runs once, in display order; every armed
    /// timer is cancelled so nothing fires for a cleared id later.
    pub async fn clear_notifications(&self) {
        let mut inner = self.inner.write().await;
        inner.scheduler.cancel_all();
        let drained = inner.store.drain();
        debug!(count = drained.len(), "cleared all notifications");
        for notification in &drained {
            notification.hooks.dismiss();
        }
        if !drained.is_empty() {
            _ = self.events.send(NotificationEvent::Cleared);
        }
    }

    /// Sorted snapshot of the live notifications.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.inner.read().await.store.live().to_vec()
    }

    /// Snapshot of the ids currently mid-exit-animation.
    pub async fn removing(&self) -> HashSet<NotificationId> {
        self.inner.read().await.store.removing().clone()
    }

    /// True iff the live list is non-empty, removing-phase entries
    /// included.
    pub async fn has_active_notifications(&self) -> bool {
        !self.inner.read().await.store.is_empty()
    }

    /// Replace the runtime configuration. Takes effect from the next
    /// mutation; already-armed timers keep the durations they were
    /// created with.
    pub async fn update_config(&self, config: NotificationsConfig) {
        let mut inner = self.inner.write().await;
        debug!(max_notifications = config.max_notifications, "config updated");
        inner.config = config;
    }

    /// Post a success message with default options.
    pub async fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show_notification(message, Severity::Success, NotificationOptions::default())
            .await
    }

    /// Post an error message with default options.
    pub async fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show_notification(message, Severity::Error, NotificationOptions::default())
            .await
    }

    /// Post a warning message with default options.
    pub async fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.show_notification(message, Severity::Warning, NotificationOptions::default())
            .await
    }

    /// Post an info message with default options.
    pub async fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show_notification(message, Severity::Info, NotificationOptions::default())
            .await
    }

    /// Hard-drop entries until one more insertion fits the capacity bound.
    fn evict_for_capacity(&self, inner: &mut Inner) {
        let max = inner.config.max_notifications as usize;
        if max == 0 || inner.store.len() < max {
            return;
        }
        let overflow = inner.store.len() - max + 1;
        for id in inner.store.eviction_candidates(overflow) {
            inner.scheduler.cancel(&id);
            if let Some(evicted) = inner.store.remove(&id) {
                warn!(id = %id, severity = evicted.severity.as_str(), "capacity reached, evicting");
                evicted.hooks.dismiss();
                _ = self
                    .events
                    .send(NotificationEvent::Closed(id, DismissReason::Evicted));
            }
        }
    }

    /// First phase of a removal: flag the record as removing, stop its
    /// auto-dismiss timer, and arm the purge timer. Stale requests (id
    /// unknown or already removing) are ignored.
    async fn begin_removal(&self, id: &NotificationId, reason: DismissReason) {
        let mut inner = self.inner.write().await;
        if !inner.store.contains(id) || inner.store.is_removing(id) {
            debug!(id = %id, "stale removal request ignored");
            return;
        }

        inner.store.mark_removing(id);
        inner.scheduler.cancel_dismiss(id);
        _ = self.events.send(NotificationEvent::Removing(id.clone()));

        let window = Duration::from_millis(inner.config.animation_window_ms);
        let center = self.clone();
        let purge_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let mut inner = center.inner.write().await;
            center.remove_now(&mut inner, &purge_id, reason);
        });
        inner.scheduler.arm_purge(id.clone(), handle);
    }

    /// Second phase / immediate removal: cancel timers, drop the record
    /// from both structures, run `on_dismiss`, publish the close event.
    fn remove_now(&self, inner: &mut Inner, id: &NotificationId, reason: DismissReason) {
        inner.scheduler.cancel(id);
        if let Some(notification) = inner.store.remove(id) {
            debug!(id = %id, ?reason, "notification removed");
            notification.hooks.dismiss();
            _ = self
                .events
                .send(NotificationEvent::Closed(id.clone(), reason));
        }
    }
}
