// Constants module for todo-notifications
// Centralizes magic numbers for better maintainability

/// Initial capacity for the live notification list
pub(crate) const INITIAL_LIVE_CAPACITY: usize = 8;

/// Buffered capacity of the change-event broadcast channel
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 100;
