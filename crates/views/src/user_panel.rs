//! Renders the user's identity: avatar and id.

use std::fmt;

use colored::Colorize;
use data_loader::UserId;

use crate::avatar::AvatarSlot;

/// Side panel naming the current user.
///
/// Without an avatar slot a letter placeholder is drawn instead.
#[derive(Debug, Clone, Copy)]
pub struct UserPanel<'a> {
    user_id: UserId,
    avatar: Option<&'a AvatarSlot>,
}

impl<'a> UserPanel<'a> {
    pub fn new(user_id: UserId, avatar: Option<&'a AvatarSlot>) -> Self {
        Self { user_id, avatar }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn avatar(&self) -> Option<&'a AvatarSlot> {
        self.avatar
    }
}

impl fmt::Display for UserPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.avatar {
            Some(slot) if slot.is_fallback() => writeln!(f, "{} {}", "(U)".bold(), "default avatar".dimmed())?,
            Some(slot) => writeln!(f, "{} {}", "(@)".bold(), slot.current().as_str().dimmed())?,
            None => writeln!(f, "{}", "(U)".bold())?,
        }
        writeln!(f, "{}", format!("UserID #{}", self.user_id).bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::DiceBearResolver;

    #[test]
    fn test_panel_shows_user_id_and_avatar() {
        let slot = AvatarSlot::mount(512, &DiceBearResolver::default());
        let rendered = UserPanel::new(512, Some(&slot)).to_string();

        assert!(rendered.contains("UserID #512"));
        assert!(rendered.contains("seed=512"));
    }

    #[test]
    fn test_panel_after_fallback() {
        let mut slot = AvatarSlot::mount(9, &DiceBearResolver::default());
        slot.on_load_error();
        let rendered = UserPanel::new(9, Some(&slot)).to_string();

        assert!(rendered.contains("default avatar"));
        assert!(!rendered.contains("seed=9"));
    }

    #[test]
    fn test_panel_placeholder_without_avatar() {
        let rendered = UserPanel::new(3, None).to_string();
        assert!(rendered.contains("(U)"));
        assert!(rendered.contains("UserID #3"));
    }
}
