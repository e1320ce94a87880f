//! Best-effort check that an avatar image can actually be loaded.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;
use views::AvatarRef;

/// Tries to load an avatar image
#[async_trait]
pub trait AvatarProbe: Send + Sync {
    /// Returns false if the image is not loadable. Never errors: the avatar
    /// is cosmetic and a failure must not reach the user.
    async fn probe(&self, avatar: &AvatarRef) -> bool;
}

/// Probes avatars with a single HTTP GET
#[derive(Clone)]
pub struct HttpAvatarProbe {
    http_client: HttpClient,
}

impl HttpAvatarProbe {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl AvatarProbe for HttpAvatarProbe {
    async fn probe(&self, avatar: &AvatarRef) -> bool {
        if avatar.is_fallback() {
            return true;
        }
        match self.http_client.get(avatar.as_str()).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                debug!("Avatar {} returned status {}", avatar, response.status());
                false
            }
            Err(e) => {
                debug!("Avatar {} could not be loaded: {}", avatar, e);
                false
            }
        }
    }
}
