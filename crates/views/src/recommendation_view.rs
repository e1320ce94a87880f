//! Renders one strategy's heading, list and the advance control.

use std::fmt;

use colored::Colorize;
use data_loader::MovieItem;

use crate::accent::Accent;

/// Something the user did to a view that its owner should act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Advance,
}

/// The "next recommender" control.
///
/// Activated by its key, or by an empty line (Enter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceControl {
    pub key: char,
    pub label: &'static str,
}

impl Default for AdvanceControl {
    fn default() -> Self {
        Self {
            key: 'n',
            label: "Next Recommender",
        }
    }
}

impl AdvanceControl {
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input.is_empty() {
            return true;
        }
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.key),
            _ => false,
        }
    }
}

/// A strategy's list as it appears on screen.
///
/// Movies are shown in the order given. When `visible` is false the list is
/// mid-fade and drawn dimmed. Without an `AdvanceControl` no control is drawn
/// and input never produces `ViewAction::Advance`.
#[derive(Debug, Clone)]
pub struct RecommendationView<'a> {
    title: &'a str,
    movies: &'a [MovieItem],
    visible: bool,
    accent: Accent,
    advance: Option<AdvanceControl>,
}

impl<'a> RecommendationView<'a> {
    pub fn new(title: &'a str, movies: &'a [MovieItem]) -> Self {
        Self {
            title,
            movies,
            visible: true,
            accent: Accent::Plain,
            advance: None,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }

    pub fn with_advance(mut self, control: AdvanceControl) -> Self {
        self.advance = Some(control);
        self
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn advance_control(&self) -> Option<&AdvanceControl> {
        self.advance.as_ref()
    }

    /// Lines for each movie, one per item, in received order
    pub fn item_lines(&self) -> Vec<String> {
        self.movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                if movie.genres.is_empty() {
                    format!("{:>3}. {}", i + 1, movie.title)
                } else {
                    format!("{:>3}. {} [{}]", i + 1, movie.title, movie.genres)
                }
            })
            .collect()
    }

    /// Translate raw user input into an action, if this view reacts to it
    pub fn handle_input(&self, input: &str) -> Option<ViewAction> {
        self.advance
            .filter(|control| control.matches(input))
            .map(|_| ViewAction::Advance)
    }
}

impl fmt::Display for RecommendationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = self.accent.paint(self.title).bold();
        let heading = if self.visible { heading } else { heading.dimmed() };
        write!(f, "{}", heading)?;
        if let Some(control) = &self.advance {
            write!(f, "    [{}] {}", control.key, control.label.blue())?;
        }
        writeln!(f)?;

        if self.movies.is_empty() {
            return writeln!(f, "  {}", "(no recommendations)".dimmed());
        }
        for line in self.item_lines() {
            if self.visible {
                writeln!(f, "{}", line)?;
            } else {
                writeln!(f, "{}", line.dimmed())?;
            }
        }
        Ok(())
    }
}
