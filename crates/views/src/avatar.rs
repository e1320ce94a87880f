//! Avatar references and the one-shot fallback.

use std::fmt;

use data_loader::UserId;

use crate::traits::AvatarResolver;

/// Avatar generation service queried by default
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Embedded image shown when the generated avatar cannot be loaded
pub const FALLBACK_AVATAR: &str = concat!(
    "data:image/svg+xml;utf8,",
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"128\" height=\"128\" viewBox=\"0 0 128 128\">",
    "<circle cx=\"64\" cy=\"64\" r=\"64\" fill=\"%234f46e5\"/>",
    "<text x=\"64\" y=\"72\" font-family=\"Arial\" font-size=\"48\" fill=\"white\" text-anchor=\"middle\">U</text>",
    "</svg>"
);

/// Location of an avatar image (URL or data URI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvatarRef(String);

impl AvatarRef {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is the embedded fallback image
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_AVATAR
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolver backed by the DiceBear avatar API, seeded by the user id
#[derive(Debug, Clone)]
pub struct DiceBearResolver {
    base_url: String,
}

impl DiceBearResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for DiceBearResolver {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_BASE_URL)
    }
}

impl AvatarResolver for DiceBearResolver {
    fn resolve(&self, user_id: UserId) -> AvatarRef {
        AvatarRef(format!(
            "{}?seed={}&size=128&radius=50",
            self.base_url, user_id
        ))
    }
}

/// The avatar of one mounted user panel.
///
/// Starts with the resolved reference. The first load failure swaps in
/// `FALLBACK_AVATAR`; every later failure is a no-op, so a broken fallback
/// cannot trigger another substitution.
#[derive(Debug, Clone)]
pub struct AvatarSlot {
    current: AvatarRef,
    fell_back: bool,
}

impl AvatarSlot {
    /// Mount a slot for `user_id`
    pub fn mount(user_id: UserId, resolver: &dyn AvatarResolver) -> Self {
        Self {
            current: resolver.resolve(user_id),
            fell_back: false,
        }
    }

    /// Reference currently displayed
    pub fn current(&self) -> &AvatarRef {
        &self.current
    }

    /// Report that the current image failed to load.
    ///
    /// Returns true if the fallback was substituted by this call.
    pub fn on_load_error(&mut self) -> bool {
        if self.fell_back {
            return false;
        }
        self.fell_back = true;
        self.current = AvatarRef::new(FALLBACK_AVATAR);
        true
    }

    pub fn is_fallback(&self) -> bool {
        self.fell_back
    }
}
