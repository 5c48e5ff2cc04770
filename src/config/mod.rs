//! Configuration management for cloudhub-fetch
//!
//! Settings come from the environment (optionally seeded from a `.env` file)
//! or from CLI flags, and are validated once into an immutable [`Config`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::error::{ConfigError, Result};

mod control_plane;

pub use control_plane::ControlPlane;

/// Environment variable names for the required credentials, in report order
pub const CLIENT_ID_VAR: &str = "ANYPOINT_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "ANYPOINT_CLIENT_SECRET";
pub const ORG_ID_VAR: &str = "ANYPOINT_ORG_ID";
pub const ENV_ID_VAR: &str = "ANYPOINT_ENV_ID";

/// Validated session configuration
#[derive(Clone, Serialize)]
pub struct Config {
    /// Connected app client ID
    pub client_id: String,

    /// Connected app client secret
    #[serde(skip_serializing)]
    pub client_secret: String,

    /// Organization (business group) ID
    pub org_id: String,

    /// Environment ID
    pub env_id: String,

    /// Control plane the API host is resolved from
    pub control_plane: ControlPlane,

    /// Print endpoint URLs and tenant headers as they are called
    pub endpoint_logging: bool,

    /// Base URL override (scheme + host), used instead of the control plane host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

impl Config {
    /// Build and validate configuration from parsed CLI/environment options.
    ///
    /// Every missing credential is reported in a single error. The control
    /// plane selector is validated here, before any client is constructed.
    pub fn from_options(opts: &GlobalOptions) -> Result<Self> {
        let required = [
            (CLIENT_ID_VAR, &opts.client_id),
            (CLIENT_SECRET_VAR, &opts.client_secret),
            (ORG_ID_VAR, &opts.org_id),
            (ENV_ID_VAR, &opts.env_id),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| non_empty(value).is_none())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing).into());
        }

        let control_plane = match non_empty(&opts.control_plane) {
            Some(selector) => ControlPlane::from_str(selector)?,
            None => ControlPlane::default(),
        };

        let api_host = match non_empty(&opts.api_host) {
            Some(host) => Some(normalize_host(host)?),
            None => None,
        };

        Ok(Self {
            client_id: required_value(&opts.client_id),
            client_secret: required_value(&opts.client_secret),
            org_id: required_value(&opts.org_id),
            env_id: required_value(&opts.env_id),
            control_plane,
            endpoint_logging: parse_flag(opts.endpoint_logging.as_deref(), true),
            api_host,
        })
    }

    /// Base URL for all API calls (no trailing slash)
    pub fn base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.clone(),
            None => format!("https://{}", self.control_plane.host()),
        }
    }

    /// OAuth2 token endpoint
    pub fn auth_url(&self) -> String {
        format!("{}/accounts/api/v2/oauth2/token", self.base_url())
    }

    /// CloudHub API root
    pub fn cloudhub_url(&self) -> String {
        format!("{}/cloudhub/api", self.base_url())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("org_id", &self.org_id)
            .field("env_id", &self.env_id)
            .field("control_plane", &self.control_plane)
            .field("endpoint_logging", &self.endpoint_logging)
            .field("api_host", &self.api_host)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required_value(value: &Option<String>) -> String {
    non_empty(value).unwrap_or_default().to_string()
}

/// Parse a boolean toggle the way the environment file expects it:
/// only a case-insensitive `true` enables.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(str::trim) {
        None | Some("") => default,
        Some(v) => v.eq_ignore_ascii_case("true"),
    }
}

fn normalize_host(host: &str) -> Result<String> {
    if !(host.starts_with("http://") || host.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "API host must start with http:// or https:// (got '{}')",
            host
        ))
        .into());
    }
    Ok(host.trim_end_matches('/').to_string())
}
