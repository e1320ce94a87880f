//! Core domain types for a recommendation bundle.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (UserId, MovieId)
//! - Serde field renames that pin the wire contract
//! - A fixed, ordered enum instead of stringly-typed map keys
//! - Borrowing: accessors return slices (&[T]) not owned values

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier the server picked for this session
pub type UserId = u32;

/// Identifier of a movie, unique within one strategy's list
pub type MovieId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// One recommended movie as the backend sends it.
///
/// Field names on the wire are `MovieID`, `Title` and `Genres`; they are part
/// of the compatibility contract with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieItem {
    #[serde(rename = "MovieID")]
    pub movie_id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    /// Pipe-separated genre list, kept exactly as received (e.g. "Action|Sci-Fi")
    #[serde(rename = "Genres")]
    pub genres: String,
}

// =============================================================================
// Strategy Keys
// =============================================================================

/// The four recommendation strategies, in cycling order.
///
/// The order is fixed here and never derived from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKey {
    UserBasedCF,
    ItemBasedCF,
    ContentBased,
    Hybrid,
}

impl StrategyKey {
    /// All keys in cycling order
    pub const ALL: [StrategyKey; 4] = [
        StrategyKey::UserBasedCF,
        StrategyKey::ItemBasedCF,
        StrategyKey::ContentBased,
        StrategyKey::Hybrid,
    ];

    /// Number of strategies in one full cycle
    pub const COUNT: usize = Self::ALL.len();

    /// Key at a cycle position. Positions wrap, so any index is valid.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Position of this key in the cycle
    pub fn index(self) -> usize {
        match self {
            StrategyKey::UserBasedCF => 0,
            StrategyKey::ItemBasedCF => 1,
            StrategyKey::ContentBased => 2,
            StrategyKey::Hybrid => 3,
        }
    }

    /// The key that follows this one, wrapping from Hybrid back to UserBasedCF
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Human readable heading shown above the list
    pub fn title(self) -> &'static str {
        match self {
            StrategyKey::UserBasedCF => "User-Based CF",
            StrategyKey::ItemBasedCF => "Item-Based CF",
            StrategyKey::ContentBased => "Content-Based",
            StrategyKey::Hybrid => "Hybridization",
        }
    }

    /// Key name as it appears in the payload
    pub fn wire_name(self) -> &'static str {
        match self {
            StrategyKey::UserBasedCF => "UserBasedCF",
            StrategyKey::ItemBasedCF => "ItemBasedCF",
            StrategyKey::ContentBased => "ContentBased",
            StrategyKey::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// =============================================================================
// Recommendation Bundle
// =============================================================================

/// Per-strategy lists. Every strategy is a required field, so a payload
/// missing one fails to deserialize instead of defaulting to an empty list.
///
/// The snake_case aliases tolerate an alternate spelling of the strategy keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyLists {
    #[serde(rename = "UserBasedCF", alias = "user_based_cf")]
    pub user_based_cf: Vec<MovieItem>,
    #[serde(rename = "ItemBasedCF", alias = "item_based_cf")]
    pub item_based_cf: Vec<MovieItem>,
    #[serde(rename = "ContentBased", alias = "content_based")]
    pub content_based: Vec<MovieItem>,
    #[serde(rename = "Hybrid", alias = "hybrid")]
    pub hybrid: Vec<MovieItem>,
}

impl StrategyLists {
    /// Get the list for a strategy
    pub fn get(&self, key: StrategyKey) -> &[MovieItem] {
        match key {
            StrategyKey::UserBasedCF => &self.user_based_cf,
            StrategyKey::ItemBasedCF => &self.item_based_cf,
            StrategyKey::ContentBased => &self.content_based,
            StrategyKey::Hybrid => &self.hybrid,
        }
    }
}

/// Everything fetched for one user in one session.
///
/// Built once by the parser and never mutated afterwards: there are no
/// mutators, only borrowing accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    #[serde(rename = "UserID")]
    user_id: UserId,
    #[serde(rename = "Recommendations")]
    recommendations: StrategyLists,
}

impl RecommendationBundle {
    /// Assemble a bundle from already-validated parts
    pub fn new(user_id: UserId, recommendations: StrategyLists) -> Self {
        Self {
            user_id,
            recommendations,
        }
    }

    /// The user these recommendations were computed for
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Ordered list for one strategy, exactly as the server ranked it
    pub fn recommendations(&self, key: StrategyKey) -> &[MovieItem] {
        self.recommendations.get(key)
    }

    /// Iterate over (strategy, list) pairs in cycling order
    pub fn iter(&self) -> impl Iterator<Item = (StrategyKey, &[MovieItem])> {
        StrategyKey::ALL
            .into_iter()
            .map(move |key| (key, self.recommendations.get(key)))
    }
}
