//! Pure renderers for the recommendation screen.
//!
//! This crate provides:
//! - `RecommendationView` for one strategy's heading, list and advance control
//! - `UserPanel` for the user's identity and avatar
//! - The `AvatarResolver` capability and `AvatarSlot` fallback holder
//! - The `Accent` palette used for strategy headings
//!
//! Nothing here owns or mutates the bundle. Views borrow what they show
//! and are rebuilt on every redraw.
//!
//! ## Example Usage
//! ```ignore
//! use views::{Accent, AdvanceControl, RecommendationView};
//!
//! let view = RecommendationView::new(key.title(), bundle.recommendations(key))
//!     .accent(Accent::for_strategy(key))
//!     .visible(true)
//!     .with_advance(AdvanceControl::default());
//! println!("{}", view);
//! ```

pub mod accent;
pub mod traits;
pub mod avatar;
pub mod recommendation_view;
pub mod user_panel;

// Re-export main types
pub use accent::Accent;
pub use avatar::{AvatarRef, AvatarSlot, DiceBearResolver, DEFAULT_AVATAR_BASE_URL, FALLBACK_AVATAR};
pub use recommendation_view::{AdvanceControl, RecommendationView, ViewAction};
pub use traits::AvatarResolver;
pub use user_panel::UserPanel;
