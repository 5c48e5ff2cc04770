//! Downloaded artifact record

use std::path::PathBuf;

use serde::Serialize;

/// An artifact written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadedArtifact {
    /// Where the artifact was written
    pub path: PathBuf,

    /// Bytes written
    pub bytes: u64,

    /// Hex-encoded SHA-256 of the written bytes
    pub sha256: String,
}
