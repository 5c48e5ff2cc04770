//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::AccessToken;
use crate::error::Result;

/// Authentication operations for the Anypoint platform
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange the configured client credentials for a bearer token
    async fn authenticate(&self) -> Result<AccessToken>;
}
