//! Mock CloudHub API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tokio::sync::Mutex;

use super::api::{ApplicationsApi, AuthApi};
use super::models::{AccessToken, ApplicationDetail, ApplicationList, DownloadedArtifact};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockCloudHubClient::new()
///     .with_applications(json!([{ "domain": "orders" }]))
///     .with_artifact("orders", "orders.jar", b"jar-bytes");
///
/// let list = mock.list_applications().await?;
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Default)]
pub struct MockCloudHubClient {
    /// Raw list payload returned from list_applications
    applications: Arc<Mutex<Option<Value>>>,
    /// Fail list_applications when set
    list_fails: Arc<Mutex<bool>>,
    /// Detail records by application name
    details: Arc<Mutex<HashMap<String, ApplicationDetail>>>,
    /// Artifact bytes by application name
    artifacts: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    /// Applications whose download fails
    failing_downloads: Arc<Mutex<HashSet<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub authenticate: usize,
    pub list_applications: usize,
    pub get_application: usize,
    pub download_application: usize,
}

/// A request seen by the mock, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    List,
    Detail(String),
    Download { name: String, filename: String },
}

impl MockCloudHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw list payload
    pub fn with_applications(self, payload: Value) -> Self {
        *self.applications.try_lock().expect("mock lock") = Some(payload);
        self
    }

    /// Make list_applications fail with a server error
    pub fn with_list_error(self) -> Self {
        *self.list_fails.try_lock().expect("mock lock") = true;
        self
    }

    /// Register a detail record (apps without one return 404)
    pub fn with_detail(self, name: &str, detail: Value) -> Self {
        let detail: ApplicationDetail = serde_json::from_value(detail).expect("valid detail");
        self.details
            .try_lock()
            .expect("mock lock")
            .insert(name.to_string(), detail);
        self
    }

    /// Register a detail record naming `filename` plus the artifact bytes
    pub fn with_artifact(self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.artifacts
            .try_lock()
            .expect("mock lock")
            .insert(name.to_string(), bytes.to_vec());
        self.with_detail(
            name,
            serde_json::json!({ "domain": name, "filename": filename }),
        )
    }

    /// Make the download for `name` fail with a server error
    pub fn with_failing_download(self, name: &str) -> Self {
        self.failing_downloads
            .try_lock()
            .expect("mock lock")
            .insert(name.to_string());
        self
    }

    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }
}

fn server_error(url: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        url: url.to_string(),
    }
}

#[async_trait]
impl AuthApi for MockCloudHubClient {
    async fn authenticate(&self) -> Result<AccessToken> {
        self.call_count.lock().await.authenticate += 1;
        let token = serde_json::from_value(serde_json::json!({ "access_token": "mock-token" }))?;
        Ok(token)
    }
}

#[async_trait]
impl ApplicationsApi for MockCloudHubClient {
    async fn list_applications(&self) -> Result<ApplicationList> {
        self.call_count.lock().await.list_applications += 1;
        self.capture(CapturedRequest::List).await;

        if *self.list_fails.lock().await {
            return Err(server_error("/applications").into());
        }

        let payload = self
            .applications
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        ApplicationList::from_value(payload)
            .ok_or_else(|| ApiError::InvalidResponse("not an array".to_string()).into())
    }

    async fn get_application(&self, name: &str) -> Result<ApplicationDetail> {
        self.call_count.lock().await.get_application += 1;
        self.capture(CapturedRequest::Detail(name.to_string())).await;

        self.details.lock().await.get(name).cloned().ok_or_else(|| {
            ApiError::Status {
                status: StatusCode::NOT_FOUND,
                url: format!("/applications/{}", name),
            }
            .into()
        })
    }

    async fn download_application(
        &self,
        name: &str,
        filename: &str,
        dest: &Path,
    ) -> Result<DownloadedArtifact> {
        self.call_count.lock().await.download_application += 1;
        self.capture(CapturedRequest::Download {
            name: name.to_string(),
            filename: filename.to_string(),
        })
        .await;

        if self.failing_downloads.lock().await.contains(name) {
            return Err(server_error(&format!("/applications/{}/download/{}", name, filename)).into());
        }

        let bytes = self
            .artifacts
            .lock()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default();
        tokio::fs::write(dest, &bytes).await?;

        Ok(DownloadedArtifact {
            path: dest.to_path_buf(),
            bytes: bytes.len() as u64,
            sha256: format!("{:x}", Sha256::digest(&bytes)),
        })
    }
}
