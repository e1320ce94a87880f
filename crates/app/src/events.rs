//! Messages flowing back into the controller from its background tasks.

use data_loader::RecommendationBundle;

/// Result of a background task, applied by `AppController::handle_event`
#[derive(Debug)]
pub enum AppEvent {
    /// The one fetch of this session finished
    Loaded(data_loader::Result<RecommendationBundle>),
    /// The fade-out delay of the pending transition elapsed
    FadeElapsed,
    /// The avatar image could not be loaded
    AvatarUnavailable,
}

/// What a call to `AppController::advance` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Fade-out began and the transition timer was scheduled
    Started,
    /// A transition was already pending; the call had no effect
    Ignored,
    /// No bundle is loaded yet, the fetch failed, or the controller is shut down
    NotReady,
}
