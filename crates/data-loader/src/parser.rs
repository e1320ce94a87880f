//! Parser for recommendation bundle payloads.
//!
//! Payload shape:
//! ```text
//! { "UserID": 42,
//!   "Recommendations": {
//!     "UserBasedCF":  [ { "MovieID": 1, "Title": "...", "Genres": "..." }, ... ],
//!     "ItemBasedCF":  [ ... ],
//!     "ContentBased": [ ... ],
//!     "Hybrid":       [ ... ] } }
//! ```
//!
//! Deserialization enforces field presence and types. On top of that the
//! parser checks that no MovieID repeats inside a single list.

use std::collections::HashSet;

use crate::error::ParseError;
use crate::types::{MovieItem, RecommendationBundle, StrategyKey};

/// Parse and validate a raw response body
pub fn parse_bundle(body: &[u8]) -> Result<RecommendationBundle, ParseError> {
    let bundle: RecommendationBundle = serde_json::from_slice(body)?;

    for (strategy, movies) in bundle.iter() {
        check_unique_ids(strategy, movies)?;
    }

    Ok(bundle)
}

fn check_unique_ids(strategy: StrategyKey, movies: &[MovieItem]) -> Result<(), ParseError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !seen.insert(movie.movie_id) {
            return Err(ParseError::DuplicateMovie {
                strategy,
                movie_id: movie.movie_id,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "UserID": 17,
        "Recommendations": {
            "UserBasedCF": [
                {"MovieID": 2571, "Title": "Matrix, The (1999)", "Genres": "Action|Sci-Fi|Thriller"},
                {"MovieID": 1, "Title": "Toy Story (1995)", "Genres": "Animation|Children's|Comedy"}
            ],
            "ItemBasedCF": [
                {"MovieID": 296, "Title": "Pulp Fiction (1994)", "Genres": "Crime|Drama"}
            ],
            "ContentBased": [],
            "Hybrid": [
                {"MovieID": 318, "Title": "Shawshank Redemption, The (1994)", "Genres": "Drama"}
            ]
        }
    }"#;

    #[test]
    fn test_parse_valid_bundle() {
        let bundle = parse_bundle(VALID.as_bytes()).unwrap();

        assert_eq!(bundle.user_id(), 17);
        let user_cf = bundle.recommendations(StrategyKey::UserBasedCF);
        assert_eq!(user_cf.len(), 2);
        // Server order is preserved, not sorted by id
        assert_eq!(user_cf[0].movie_id, 2571);
        assert_eq!(user_cf[1].movie_id, 1);
        assert_eq!(user_cf[0].genres, "Action|Sci-Fi|Thriller");
        assert!(bundle.recommendations(StrategyKey::ContentBased).is_empty());
    }

    #[test]
    fn test_every_strategy_present_after_parse() {
        let bundle = parse_bundle(VALID.as_bytes()).unwrap();
        let keys: Vec<_> = bundle.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, StrategyKey::ALL.to_vec());
    }

    #[test]
    fn test_missing_strategy_is_rejected() {
        for missing in StrategyKey::ALL {
            let mut lists = serde_json::Map::new();
            for key in StrategyKey::ALL {
                if key != missing {
                    lists.insert(key.wire_name().to_string(), serde_json::json!([]));
                }
            }
            let payload = serde_json::json!({ "UserID": 1, "Recommendations": lists });

            let result = parse_bundle(payload.to_string().as_bytes());
            assert!(
                matches!(result, Err(ParseError::InvalidPayload(_))),
                "payload without {} must be rejected",
                missing
            );
        }
    }

    #[test]
    fn test_null_strategy_is_rejected() {
        let payload = r#"{"UserID": 1, "Recommendations": {
            "UserBasedCF": null, "ItemBasedCF": [], "ContentBased": [], "Hybrid": []}}"#;
        assert!(parse_bundle(payload.as_bytes()).is_err());
    }

    #[test]
    fn test_wrong_field_types_are_rejected() {
        let string_user = r#"{"UserID": "17", "Recommendations": {
            "UserBasedCF": [], "ItemBasedCF": [], "ContentBased": [], "Hybrid": []}}"#;
        assert!(parse_bundle(string_user.as_bytes()).is_err());

        let string_movie_id = r#"{"UserID": 17, "Recommendations": {
            "UserBasedCF": [{"MovieID": "x", "Title": "T", "Genres": "G"}],
            "ItemBasedCF": [], "ContentBased": [], "Hybrid": []}}"#;
        assert!(parse_bundle(string_movie_id.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_user_id_is_rejected() {
        let payload = r#"{"Recommendations": {
            "UserBasedCF": [], "ItemBasedCF": [], "ContentBased": [], "Hybrid": []}}"#;
        assert!(parse_bundle(payload.as_bytes()).is_err());
    }

    #[test]
    fn test_not_json_is_rejected() {
        let result = parse_bundle(b"<html>Internal Server Error</html>");
        assert!(matches!(result, Err(ParseError::InvalidPayload(_))));
    }

    #[test]
    fn test_duplicate_movie_in_one_list_is_rejected() {
        let payload = r#"{"UserID": 3, "Recommendations": {
            "UserBasedCF": [],
            "ItemBasedCF": [
                {"MovieID": 5, "Title": "A", "Genres": "Drama"},
                {"MovieID": 5, "Title": "A again", "Genres": "Drama"}
            ],
            "ContentBased": [], "Hybrid": []}}"#;

        match parse_bundle(payload.as_bytes()) {
            Err(ParseError::DuplicateMovie { strategy, movie_id }) => {
                assert_eq!(strategy, StrategyKey::ItemBasedCF);
                assert_eq!(movie_id, 5);
            }
            other => panic!("expected DuplicateMovie, got {:?}", other),
        }
    }

    #[test]
    fn test_same_movie_across_lists_is_allowed() {
        let movie = r#"{"MovieID": 9, "Title": "Shared", "Genres": ""}"#;
        let payload = format!(
            r#"{{"UserID": 3, "Recommendations": {{
                "UserBasedCF": [{m}], "ItemBasedCF": [{m}],
                "ContentBased": [{m}], "Hybrid": [{m}]}}}}"#,
            m = movie
        );
        let bundle = parse_bundle(payload.as_bytes()).unwrap();
        assert!(bundle.iter().all(|(_, movies)| movies.len() == 1));
    }

    #[test]
    fn test_snake_case_strategy_keys_are_accepted() {
        let payload = r#"{"UserID": 8, "Recommendations": {
            "user_based_cf": [{"MovieID": 1, "Title": "A", "Genres": "Comedy"}],
            "item_based_cf": [], "content_based": [], "hybrid": []}}"#;
        let bundle = parse_bundle(payload.as_bytes()).unwrap();
        assert_eq!(bundle.recommendations(StrategyKey::UserBasedCF).len(), 1);
    }

    #[test]
    fn test_unknown_extra_fields_are_ignored() {
        let payload = r#"{"UserID": 8, "Generated": "2024-01-01", "Recommendations": {
            "UserBasedCF": [], "ItemBasedCF": [], "ContentBased": [], "Hybrid": [],
            "Popularity": []}}"#;
        assert!(parse_bundle(payload.as_bytes()).is_ok());
    }
}
