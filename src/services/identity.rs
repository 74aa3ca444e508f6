//! Identity provider client: resolves a bearer credential to a user id.
//!
//! Authentication itself is the provider's concern; this seam only carries
//! the credential over and reports a terminal unauthorized condition when
//! the provider rejects it.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("missing or invalid credential")]
    Unauthorized,
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("identity provider returned an unexpected response")]
    Malformed,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a bearer token to an opaque user id.
    async fn resolve(&self, bearer_token: &str) -> Result<String, IdentityError>;
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
}

/// HTTP implementation against a hosted auth service.
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve(&self, bearer_token: &str) -> Result<String, IdentityError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", bearer_token))
            .send()
            .await?;

        if response.status().is_client_error() {
            return Err(IdentityError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(IdentityError::Malformed);
        }

        let user: UserResponse = response.json().await.map_err(|_| IdentityError::Malformed)?;
        Ok(user.id)
    }
}
