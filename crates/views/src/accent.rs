//! Heading colours per strategy.

use colored::{ColoredString, Colorize};
use data_loader::StrategyKey;

/// Colour used for a list heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Plain,
    Blue,
    Green,
    Purple,
    Yellow,
}

impl Accent {
    /// The accent each strategy is shown with
    pub fn for_strategy(key: StrategyKey) -> Self {
        match key {
            StrategyKey::UserBasedCF => Accent::Blue,
            StrategyKey::ItemBasedCF => Accent::Green,
            StrategyKey::ContentBased => Accent::Purple,
            StrategyKey::Hybrid => Accent::Yellow,
        }
    }

    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Accent::Plain => text.normal(),
            Accent::Blue => text.bright_blue(),
            Accent::Green => text.bright_green(),
            Accent::Purple => text.bright_magenta(),
            Accent::Yellow => text.bright_yellow(),
        }
    }
}
