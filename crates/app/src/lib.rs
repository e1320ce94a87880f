//! Application crate for the ReelRecs viewer.
//!
//! This crate contains the controller that owns the session's bundle and
//! cycles through the recommendation strategies.

pub mod events;
pub mod notify;
pub mod avatar_probe;
pub mod screen;
pub mod controller;

pub use avatar_probe::{AvatarProbe, HttpAvatarProbe};
pub use controller::{AppController, AppState, ControllerConfig, CycleState, DEFAULT_FADE_DELAY};
pub use events::{AdvanceOutcome, AppEvent};
pub use notify::{FAILURE_MESSAGE, Notifier};
pub use screen::{QUIT_HINT, Screen};
