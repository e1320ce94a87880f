//! Core traits for the views.

use data_loader::UserId;

use crate::avatar::AvatarRef;

/// Maps a user id to the avatar image to show for it.
///
/// ## Contract
/// - Must be a pure function: the same id always yields the same reference,
///   so the result can be cached and compared in tests.
/// - Never fails. If the referenced image later cannot be loaded, the
///   `AvatarSlot` holding it swaps in `FALLBACK_AVATAR` once.
pub trait AvatarResolver: Send + Sync {
    fn resolve(&self, user_id: UserId) -> AvatarRef;
}
