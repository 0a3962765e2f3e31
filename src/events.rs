use todo_notifications_util::NotificationId;

/// Why a notification left the live list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-dismiss timer elapsed.
    Expired,
    /// Explicitly dismissed by the user or caller.
    Dismissed,
    /// Hard-dropped by the capacity policy to make room for a newer entry.
    Evicted,
    /// Removed by a clear-all operation.
    Cleared,
}

/// Change notification published to the rendering layer.
///
/// Events describe transitions that already happened; consumers that miss
/// events (lagging receivers) can always resynchronize from the live-list
/// and removing-set snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// A new notification entered the live list.
    Posted(NotificationId),
    /// A notification entered the removing phase; it is still rendered.
    Removing(NotificationId),
    /// A notification left the live list for good.
    Closed(NotificationId, DismissReason),
    /// The live list was emptied at once.
    Cleared,
}
