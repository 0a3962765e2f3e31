use thiserror::Error;

/// Errors surfaced by the crate-level accessor pair.
///
/// Every state operation on a live center is total: dismissing an unknown
/// id, double-dismissing, or clearing an empty list are no-ops rather than
/// failures. The only reportable conditions are wiring mistakes around the
/// process-wide center.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification center is not initialized; call init() during application startup")]
    NotInitialized,

    #[error("notification center is already initialized")]
    AlreadyInitialized,
}
