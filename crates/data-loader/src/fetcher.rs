//! Fetching a recommendation bundle over HTTP.
//!
//! `RecommendationSource` is the seam the controller depends on; `HttpFetcher`
//! is the production implementation. Each call makes exactly one request:
//! there is no retry and no backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, error, info};

use crate::error::{FetchError, Result};
use crate::parser::parse_bundle;
use crate::types::RecommendationBundle;

/// Default endpoint: the local backend picks a random user
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/recommend?random_user=true";

/// Default timeout for the single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce one user's recommendation bundle.
///
/// The caller passes no parameters; the source decides which user.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch_recommendations(&self) -> Result<RecommendationBundle>;
}

/// Fetches bundles from the recommendation backend
#[derive(Clone)]
pub struct HttpFetcher {
    http_client: HttpClient,
    endpoint: String,
}

impl HttpFetcher {
    /// Create a fetcher for `endpoint` with the given request timeout.
    ///
    /// A timeout expiring surfaces as a network error like any other
    /// transport failure.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    /// Address this fetcher requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationSource for HttpFetcher {
    async fn fetch_recommendations(&self) -> Result<RecommendationBundle> {
        info!("Fetching recommendations from {}", self.endpoint);

        let response = self
            .http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", self.endpoint, e);
                FetchError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Recommendation endpoint returned status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        // Read the raw body first so a malformed payload is reported as a
        // parse failure, not a transport failure
        let body = response.bytes().await?;
        debug!("Received {} byte payload", body.len());

        let bundle = parse_bundle(&body).map_err(|e| {
            error!("Rejected recommendation payload: {}", e);
            FetchError::Parse(e)
        })?;

        info!(
            "Loaded recommendations for user {} ({} strategies)",
            bundle.user_id(),
            bundle.iter().count()
        );
        Ok(bundle)
    }
}
