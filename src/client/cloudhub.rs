//! CloudHub API client implementation

use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Response, Url};
use sha2::{Digest, Sha256};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use super::models::{AccessToken, ApplicationDetail, ApplicationList, DownloadedArtifact};
use crate::client::{ApplicationsApi, AuthApi};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::output::Console;
use crate::output::progress::download_bar;

/// Tenant header carrying the organization ID
pub const ORG_ID_HEADER: &str = "x-anypnt-org-id";

/// Tenant header carrying the environment ID
pub const ENV_ID_HEADER: &str = "x-anypnt-env-id";

const USER_AGENT: &str = concat!("cloudhub-fetch/", env!("CARGO_PKG_VERSION"));

/// CloudHub API client
///
/// Starts unauthenticated; [`CloudHubClient::authorize`] swaps in an HTTP
/// client whose default headers carry the bearer token and tenant IDs.
pub struct CloudHubClient {
    http: HttpClient,
    config: Config,
    console: Console,
    show_progress: bool,
}

impl CloudHubClient {
    /// Create a client for the configured control plane.
    ///
    /// `console` receives endpoint lines; pass a hidden console to silence them.
    pub fn new(config: &Config, console: Console) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            config: config.clone(),
            console,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while downloading
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.show_progress = enabled;
        self
    }

    /// Rebuild the HTTP client so every request carries the token and tenant headers
    pub fn authorize(self, token: &AccessToken) -> Result<Self> {
        let headers = tenant_headers(token, &self.config)?;
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, ..self })
    }

    /// Authenticate and return an authorized client in one step
    pub async fn connect(config: &Config, console: Console) -> Result<Self> {
        let client = Self::new(config, console)?;
        let token = client.authenticate().await?;
        debug!(
            "Authenticated against {} (token valid for {:?}s)",
            config.base_url(),
            token.expires_in
        );
        client.authorize(&token)
    }

    fn applications_url(&self) -> Result<Url> {
        self.endpoint(&["applications"])
    }

    fn application_url(&self, name: &str) -> Result<Url> {
        self.endpoint(&[
            "organizations",
            &self.config.org_id,
            "environments",
            &self.config.env_id,
            "applications",
            name,
        ])
    }

    fn download_url(&self, name: &str, filename: &str) -> Result<Url> {
        self.endpoint(&[
            "organizations",
            &self.config.org_id,
            "environments",
            &self.config.env_id,
            "applications",
            name,
            "download",
            filename,
        ])
    }

    /// Join percent-encoded path segments onto the CloudHub API root
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let base = self.config.cloudhub_url();
        let mut url = Url::parse(&base)
            .map_err(|e| ApiError::InvalidResponse(format!("Invalid base URL {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidResponse(format!("Invalid base URL {}", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue a GET and fail on any non-success status
    async fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            }
            .into());
        }
        Ok(response)
    }
}

fn tenant_headers(token: &AccessToken, config: &Config) -> Result<HeaderMap> {
    let invalid = |what: &str| ApiError::InvalidResponse(format!("{} is not a valid header value", what));

    let mut auth = HeaderValue::from_str(&token.bearer()).map_err(|_| invalid("Access token"))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HeaderName::from_static(ORG_ID_HEADER),
        HeaderValue::from_str(&config.org_id).map_err(|_| invalid("Organization ID"))?,
    );
    headers.insert(
        HeaderName::from_static(ENV_ID_HEADER),
        HeaderValue::from_str(&config.env_id).map_err(|_| invalid("Environment ID"))?,
    );
    Ok(headers)
}

/// Stream a response body into `dest`, hashing as it goes
async fn write_body(
    response: Response,
    dest: &Path,
    progress: &indicatif::ProgressBar,
) -> Result<(u64, String)> {
    let mut file = File::create(dest).await?;
    let mut hasher = Sha256::new();
    let mut written: u64 = 0;

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(ApiError::from)?;
        file.write_all(&chunk).await?;
        hasher.update(&chunk);
        written += chunk.len() as u64;
        progress.inc(chunk.len() as u64);
    }
    file.flush().await?;

    Ok((written, format!("{:x}", hasher.finalize())))
}

#[async_trait]
impl AuthApi for CloudHubClient {
    async fn authenticate(&self) -> Result<AccessToken> {
        let url = self.config.auth_url();
        self.console
            .section(format!("Calling authentication endpoint: {}", url));

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| ApiError::Authentication(ApiError::from(e).to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Authentication(format!("{} returned by {}", status, url)).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Authentication(format!("Failed to read response: {}", e)))?;

        let token: AccessToken = serde_json::from_str(&body).map_err(|e| {
            ApiError::Authentication(format!("Failed to parse token response: {}", e))
        })?;

        if token.token.trim().is_empty() {
            return Err(ApiError::Authentication("Empty access_token in response".to_string()).into());
        }

        Ok(token)
    }
}

#[async_trait]
impl ApplicationsApi for CloudHubClient {
    async fn list_applications(&self) -> Result<ApplicationList> {
        let url = self.applications_url()?;
        self.console
            .section(format!("Calling applications list endpoint: {}", url));
        self.console.line("Headers used:");
        self.console
            .line(format!("{}: {}", ENV_ID_HEADER, self.config.env_id));
        self.console
            .line(format!("{}: {}", ORG_ID_HEADER, self.config.org_id));

        let response = self.get(url).await?;
        let payload: serde_json::Value = response.json().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse applications list: {}", e))
        })?;

        let list = ApplicationList::from_value(payload).ok_or_else(|| {
            ApiError::InvalidResponse("Applications list is not a JSON array".to_string())
        })?;
        debug!("Listed {} applications", list.len());
        Ok(list)
    }

    async fn get_application(&self, name: &str) -> Result<ApplicationDetail> {
        let url = self.application_url(name)?;
        self.console
            .section(format!("Calling application info endpoint: {}", url));

        let response = self.get(url).await?;
        let detail = response.json::<ApplicationDetail>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse details for {}: {}", name, e))
        })?;
        Ok(detail)
    }

    async fn download_application(
        &self,
        name: &str,
        filename: &str,
        dest: &Path,
    ) -> Result<DownloadedArtifact> {
        let url = self.download_url(name, filename)?;
        self.console
            .section(format!("Calling application download endpoint: {}", url));

        let response = self.get(url).await?;
        let progress = download_bar(response.content_length(), name, self.show_progress);

        let result = write_body(response, dest, &progress).await;
        progress.finish_and_clear();

        match result {
            Ok((bytes, sha256)) => {
                debug!("Wrote {} bytes to {}", bytes, dest.display());
                Ok(DownloadedArtifact {
                    path: dest.to_path_buf(),
                    bytes,
                    sha256,
                })
            }
            Err(err) => {
                // Drop whatever was written so far
                let _ = tokio::fs::remove_file(dest).await;
                Err(err)
            }
        }
    }
}
