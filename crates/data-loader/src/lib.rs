//! # Data Loader Crate
//!
//! This crate loads the recommendation bundle a session displays.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieItem, StrategyKey, RecommendationBundle)
//! - **parser**: Validate a response body into a bundle
//! - **fetcher**: The `RecommendationSource` seam and its HTTP implementation
//! - **error**: Error types for fetching and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{HttpFetcher, RecommendationSource, StrategyKey, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
//!
//! let fetcher = HttpFetcher::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT)?;
//! let bundle = fetcher.fetch_recommendations().await?;
//!
//! for movie in bundle.recommendations(StrategyKey::Hybrid) {
//!     println!("{}", movie.title);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod fetcher;

// Re-export commonly used types for convenience
pub use error::{FetchError, ParseError, Result};
pub use fetcher::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpFetcher, RecommendationSource};
pub use parser::parse_bundle;
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    MovieItem,
    StrategyKey,
    StrategyLists,
    RecommendationBundle,
};
