//! What the terminal shows for each controller state.

use std::fmt;

use colored::Colorize;
use views::{RecommendationView, UserPanel};

use crate::notify::FAILURE_MESSAGE;

/// Shown on the failed screen; there is nothing left to do but leave
pub const QUIT_HINT: &str = "Press q to quit.";

/// Composition of the views for one redraw
#[derive(Debug, Clone)]
pub enum Screen<'a> {
    Loading,
    Failed,
    Ready {
        user: UserPanel<'a>,
        list: RecommendationView<'a>,
    },
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Loading => writeln!(f, "Loading..."),
            Screen::Failed => {
                writeln!(f, "{}", FAILURE_MESSAGE.red())?;
                writeln!(f, "{}", QUIT_HINT.dimmed())
            }
            Screen::Ready { user, list } => {
                write!(f, "{}", user)?;
                writeln!(f, "{}", "-".repeat(40).dimmed())?;
                write!(f, "{}", list)
            }
        }
    }
}
