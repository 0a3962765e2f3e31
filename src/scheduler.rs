use std::collections::HashMap;

use tokio::task::JoinHandle;
use tracing::trace;

use todo_notifications_util::NotificationId;

/// Owns the deferred actions attached to live notifications.
///
/// Two timers can exist per id, one per removal phase: the auto-dismiss
/// timer (fires after the record's `duration` and starts the exit
/// animation) and the purge timer (fires after the animation window and
/// deletes the record). Arming a phase for an id that already has a timer
/// in that phase replaces it, so no two timers ever race for the same id.
///
/// Cancellation aborts the task; an abort lands at the task's next await
/// point, which for a sleeping timer means it never runs its action. A
/// timer that already fired re-checks store state under the lock before
/// mutating anything, so a stale fire is a no-op rather than an error.
#[derive(Debug, Default)]
pub(crate) struct DismissScheduler {
    dismiss_timers: HashMap<NotificationId, JoinHandle<()>>,
    purge_timers: HashMap<NotificationId, JoinHandle<()>>,
}

impl DismissScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register the auto-dismiss timer for `id`, replacing any previous one.
    pub(crate) fn arm_dismiss(&mut self, id: NotificationId, handle: JoinHandle<()>) {
        trace!(id = %id, "arming auto-dismiss timer");
        if let Some(old) = self.dismiss_timers.insert(id, handle) {
            old.abort();
        }
    }

    /// Register the purge timer for `id`, replacing any previous one.
    pub(crate) fn arm_purge(&mut self, id: NotificationId, handle: JoinHandle<()>) {
        trace!(id = %id, "arming purge timer");
        if let Some(old) = self.purge_timers.insert(id, handle) {
            old.abort();
        }
    }

    /// Cancel the auto-dismiss timer for `id`, leaving any purge timer
    /// running. Used when a record enters the removing phase early.
    pub(crate) fn cancel_dismiss(&mut self, id: &NotificationId) {
        if let Some(handle) = self.dismiss_timers.remove(id) {
            handle.abort();
        }
    }

    /// Cancel every deferred action for `id`.
    pub(crate) fn cancel(&mut self, id: &NotificationId) {
        if let Some(handle) = self.dismiss_timers.remove(id) {
            handle.abort();
        }
        if let Some(handle) = self.purge_timers.remove(id) {
            handle.abort();
        }
    }

    /// Cancel everything. Used by clear-all.
    pub(crate) fn cancel_all(&mut self) {
        trace!(
            dismiss = self.dismiss_timers.len(),
            purge = self.purge_timers.len(),
            "cancelling all timers"
        );
        for (_, handle) in self.dismiss_timers.drain() {
            handle.abort();
        }
        for (_, handle) in self.purge_timers.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub(crate) fn dismiss_timer_count(&self) -> usize {
        self.dismiss_timers.len()
    }

    #[cfg(test)]
    pub(crate) fn purge_timer_count(&self) -> usize {
        self.purge_timers.len()
    }
}
