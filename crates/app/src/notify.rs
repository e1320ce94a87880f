//! User-visible notifications.

/// Message shown for any fetch failure, whatever the cause
pub const FAILURE_MESSAGE: &str = "Failed to fetch recommendations";

/// Delivers a blocking, user-visible notification.
///
/// The controller calls this at most once per session, on the transition
/// into the failed state.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
