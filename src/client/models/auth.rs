//! Authentication models

use std::fmt;

use serde::Deserialize;

/// OAuth2 bearer token from the client-credentials exchange
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer string
    #[serde(rename = "access_token")]
    pub token: String,

    /// Token type reported by the server (usually "bearer")
    #[serde(default)]
    pub token_type: Option<String>,

    /// Validity window in seconds, when reported
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl AccessToken {
    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
