use std::cmp::Ordering;

use todo_notifications_util::Notification;

/// Display-order comparator: priority descending, then creation time
/// descending (newest first). Total and deterministic over any pair of
/// records.
pub fn display_order(a: &Notification, b: &Notification) -> Ordering {
    match b.priority.cmp(&a.priority) {
        Ordering::Equal => b.created_at.cmp(&a.created_at),
        other => other,
    }
}

/// Eviction-order comparator: lowest priority first, oldest first. The
/// exact reverse of [`display_order`].
pub fn eviction_order(a: &Notification, b: &Notification) -> Ordering {
    match a.priority.cmp(&b.priority) {
        Ordering::Equal => a.created_at.cmp(&b.created_at),
        other => other,
    }
}

/// Sort a notification list into display order.
///
/// The sort is stable, so records comparing equal keep their relative
/// insertion order instead of leaking whatever order the input happened
/// to be in.
pub fn rank(notifications: &mut [Notification]) {
    notifications.sort_by(display_order);
}
