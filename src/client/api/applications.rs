//! Applications API trait

use std::path::Path;

use async_trait::async_trait;

use crate::client::models::{ApplicationDetail, ApplicationList, DownloadedArtifact};
use crate::error::Result;

/// Application operations, available once the client carries a token
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    /// List every application deployed in the configured environment
    async fn list_applications(&self) -> Result<ApplicationList>;

    /// Fetch the detail record for one application
    async fn get_application(&self, name: &str) -> Result<ApplicationDetail>;

    /// Stream an application's artifact to `dest`.
    ///
    /// The parent directory of `dest` must already exist. On failure no
    /// partial file is left behind.
    async fn download_application(
        &self,
        name: &str,
        filename: &str,
        dest: &Path,
    ) -> Result<DownloadedArtifact>;
}
