//! Per-application outcomes and the aggregated run summary

use std::path::PathBuf;

use serde::Serialize;

use crate::client::models::DownloadedArtifact;

/// Why an application was passed over without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The list entry had no usable `domain`
    MissingIdentifier,
    /// The detail record had no artifact filename
    MissingFilename,
}

/// Which step of an iteration failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Detail,
    Download,
}

/// Result of processing one list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome {
    Downloaded(DownloadedArtifact),
    Skipped { reason: SkipReason },
    Failed { stage: FailureStage, reason: String },
}

/// One list entry and what happened to it
#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    /// 1-based position in the list response
    pub index: usize,

    /// Application domain, when the entry had one
    pub name: Option<String>,

    #[serde(flatten)]
    pub outcome: ItemOutcome,
}

/// Everything a batch run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Run directory
    pub run_dir: PathBuf,

    /// JSON snapshot of the list response
    pub snapshot: PathBuf,

    /// Entries in the list response
    pub total: usize,

    /// One report per list entry, in list order
    pub items: Vec<ItemReport>,
}

impl RunSummary {
    pub fn downloaded(&self) -> impl Iterator<Item = &DownloadedArtifact> {
        self.items.iter().filter_map(|item| match &item.outcome {
            ItemOutcome::Downloaded(artifact) => Some(artifact),
            _ => None,
        })
    }

    pub fn downloaded_count(&self) -> usize {
        self.downloaded().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    /// Total bytes written across all downloads
    pub fn bytes_written(&self) -> u64 {
        self.downloaded().map(|a| a.bytes).sum()
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.outcome)).count()
    }
}
