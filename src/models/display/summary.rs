//! Run summary display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_bytes, truncate_string};
use crate::pipeline::{FailureStage, ItemOutcome, ItemReport, SkipReason};

const MAX_REASON_LEN: usize = 80;

/// One row of the end-of-run table
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ItemDisplay {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "APPLICATION")]
    pub name: String,

    #[tabled(rename = "RESULT")]
    pub result: String,

    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl From<&ItemReport> for ItemDisplay {
    fn from(item: &ItemReport) -> Self {
        let (result, detail) = match &item.outcome {
            ItemOutcome::Downloaded(artifact) => (
                "downloaded",
                format!(
                    "{} ({})",
                    artifact.path.display(),
                    format_bytes(artifact.bytes)
                ),
            ),
            ItemOutcome::Skipped { reason } => (
                "skipped",
                match reason {
                    SkipReason::MissingIdentifier => "no application domain".to_string(),
                    SkipReason::MissingFilename => "no artifact filename".to_string(),
                },
            ),
            ItemOutcome::Failed { stage, reason } => (
                "failed",
                format!(
                    "{}: {}",
                    match stage {
                        FailureStage::Detail => "detail",
                        FailureStage::Download => "download",
                    },
                    truncate_string(reason, MAX_REASON_LEN)
                ),
            ),
        };

        Self {
            index: item.index,
            name: item.name.clone().unwrap_or_else(|| "-".to_string()),
            result: result.to_string(),
            detail,
        }
    }
}
