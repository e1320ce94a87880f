//! Integration tests for the HTTP fetcher against a mock backend.

use std::time::Duration;

use data_loader::{FetchError, HttpFetcher, ParseError, RecommendationSource, StrategyKey};

const BUNDLE: &str = r#"{
    "UserID": 4169,
    "Recommendations": {
        "UserBasedCF": [{"MovieID": 2858, "Title": "American Beauty (1999)", "Genres": "Comedy|Drama"}],
        "ItemBasedCF": [{"MovieID": 260, "Title": "Star Wars: Episode IV - A New Hope (1977)", "Genres": "Action|Adventure|Fantasy|Sci-Fi"}],
        "ContentBased": [{"MovieID": 1196, "Title": "Star Wars: Episode V - The Empire Strikes Back (1980)", "Genres": "Action|Adventure|Drama|Sci-Fi|War"}],
        "Hybrid": []
    }
}"#;

fn fetcher_for(server: &mockito::ServerGuard) -> HttpFetcher {
    let endpoint = format!("{}/recommend?random_user=true", server.url());
    HttpFetcher::new(endpoint, Duration::from_secs(5)).expect("build fetcher")
}

#[tokio::test]
async fn test_fetch_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recommend")
        .match_query(mockito::Matcher::UrlEncoded(
            "random_user".into(),
            "true".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(BUNDLE)
        .expect(1)
        .create_async()
        .await;

    let bundle = fetcher_for(&server)
        .fetch_recommendations()
        .await
        .expect("fetch should succeed");

    assert_eq!(bundle.user_id(), 4169);
    assert_eq!(bundle.recommendations(StrategyKey::ItemBasedCF)[0].movie_id, 260);
    assert!(bundle.recommendations(StrategyKey::Hybrid).is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_network_class() {
    let mut server = mockito::Server::new_async().await;
    // One attempt only: a retry would trip the expectation
    let mock = server
        .mock("GET", "/recommend")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create_async()
        .await;

    let err = fetcher_for(&server)
        .fetch_recommendations()
        .await
        .expect_err("status 500 must fail");

    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert!(err.is_network());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_strategy_is_parse_class() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/recommend")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"UserID": 1, "Recommendations": {"UserBasedCF": [], "ItemBasedCF": [], "ContentBased": []}}"#)
        .create_async()
        .await;

    let err = fetcher_for(&server)
        .fetch_recommendations()
        .await
        .expect_err("partial bundle must fail");

    assert!(matches!(err, FetchError::Parse(ParseError::InvalidPayload(_))));
    assert!(!err.is_network());
}

#[tokio::test]
async fn test_malformed_body_is_parse_class() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/recommend")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let err = fetcher_for(&server).fetch_recommendations().await.unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test]
async fn test_unreachable_backend_is_network_class() {
    // Nothing listens on port 9 locally
    let fetcher = HttpFetcher::new("http://127.0.0.1:9/recommend", Duration::from_secs(2))
        .expect("build fetcher");

    let err = fetcher.fetch_recommendations().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
