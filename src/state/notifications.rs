use std::collections::HashSet;

use todo_notifications_util::{Notification, NotificationId};

use crate::constants::INITIAL_LIVE_CAPACITY;
use crate::ranker;

/// Manages the state of the notification queues
///
/// Holds the live notification list (order is display order) and the set
/// of ids currently in the removing phase. A removing id always refers to
/// a record still present in the live list; final deletion drops it from
/// both at once.
pub(crate) struct NotificationStore {
    /// Currently live notifications, kept in display order
    live: Vec<Notification>,
    /// Ids mid-exit-animation
    removing: HashSet<NotificationId>,
}

impl NotificationStore {
    /// Create a new notification store
    pub(crate) fn new() -> Self {
        Self {
            live: Vec::with_capacity(INITIAL_LIVE_CAPACITY),
            removing: HashSet::new(),
        }
    }

    /// Live notifications in display order
    pub(crate) fn live(&self) -> &[Notification] {
        &self.live
    }

    /// Ids currently in the removing phase
    pub(crate) fn removing(&self) -> &HashSet<NotificationId> {
        &self.removing
    }

    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub(crate) fn contains(&self, id: &NotificationId) -> bool {
        self.live.iter().any(|n| &n.id == id)
    }

    pub(crate) fn is_removing(&self, id: &NotificationId) -> bool {
        self.removing.contains(id)
    }

    /// Insert a notification and restore display order
    pub(crate) fn push(&mut self, notification: Notification) {
        self.live.push(notification);
        ranker::rank(&mut self.live);
    }

    /// Remove a notification by id from both the live list and the
    /// removing set
    ///
    /// Returns the removed notification if found
    pub(crate) fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        self.removing.remove(id);
        let pos = self.live.iter().position(|n| &n.id == id)?;
        let notification = self.live.remove(pos);
        if self.live.is_empty() {
            self.live.shrink_to(INITIAL_LIVE_CAPACITY);
        }
        Some(notification)
    }

    /// Flag a live notification as mid-exit-animation
    ///
    /// Returns false when `id` is not live; a removing id with no live
    /// record would be invalid, so the flag is refused.
    pub(crate) fn mark_removing(&mut self, id: &NotificationId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.removing.insert(id.clone())
    }

    /// Ids of up to `count` eviction candidates, lowest priority and
    /// oldest first
    pub(crate) fn eviction_candidates(&self, count: usize) -> Vec<NotificationId> {
        let mut candidates: Vec<&Notification> = self.live.iter().collect();
        candidates.sort_by(|a, b| ranker::eviction_order(a, b));
        candidates
            .into_iter()
            .take(count)
            .map(|n| n.id.clone())
            .collect()
    }

    /// Empty the store, returning the drained notifications in display
    /// order
    pub(crate) fn drain(&mut self) -> Vec<Notification> {
        self.removing.clear();
        let drained: Vec<Notification> = self.live.drain(..).collect();
        self.live.shrink_to(INITIAL_LIVE_CAPACITY);
        drained
    }
}
