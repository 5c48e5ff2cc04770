//! Batch fetch pipeline
//!
//! Lists applications once, snapshots the list, then walks it one entry at a
//! time: detail lookup, then artifact download. Anything that goes wrong
//! inside an iteration becomes that entry's [`ItemOutcome`]; only the list
//! call and the run directory itself can abort the run.

use colored::Colorize;
use log::debug;

use crate::client::ApplicationsApi;
use crate::client::models::ApplicationDetail;
use crate::error::{Error, Result};
use crate::output::Console;

mod outcome;
mod run_dir;

pub use outcome::{FailureStage, ItemOutcome, ItemReport, RunSummary, SkipReason};
pub use run_dir::RunDirectory;

/// Run the whole batch against an authorized client
pub async fn run_batch<A>(api: &A, run_dir: &mut RunDirectory, console: Console) -> Result<RunSummary>
where
    A: ApplicationsApi + ?Sized,
{
    console.line("Starting applications download process...");

    let list = api.list_applications().await?;
    let total = list.len();
    console.section(format!("Found {} applications to process", total));

    let snapshot = run_dir.write_snapshot(&list)?;
    console.line(format!("Saved applications JSON to: {}", snapshot.display()));
    if list.is_empty() {
        console.line("Nothing to download.");
    }

    let mut items = Vec::with_capacity(total);
    for (idx, summary) in list.summaries().iter().enumerate() {
        let index = idx + 1;

        let Some(name) = summary.domain() else {
            debug!("Entry {} has no domain, skipping", index);
            items.push(ItemReport {
                index,
                name: None,
                outcome: ItemOutcome::Skipped {
                    reason: SkipReason::MissingIdentifier,
                },
            });
            continue;
        };

        console.section(format!(
            "Processing application {} of {}: {}",
            index,
            total,
            name.bold()
        ));

        let outcome = process_application(api, run_dir, name, console).await;
        items.push(ItemReport {
            index,
            name: Some(name.to_string()),
            outcome,
        });
    }

    let run_dir = run_dir
        .path()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| Error::Other("run directory was not created".to_string()))?;

    Ok(RunSummary {
        run_dir,
        snapshot,
        total,
        items,
    })
}

/// Detail lookup and download for one application; never fails the batch
async fn process_application<A>(
    api: &A,
    run_dir: &mut RunDirectory,
    name: &str,
    console: Console,
) -> ItemOutcome
where
    A: ApplicationsApi + ?Sized,
{
    let detail = match api.get_application(name).await {
        Ok(detail) => detail,
        Err(e) => {
            debug!("Detail lookup failed for {}: {}", name, e);
            console.line(format!("Error processing {}: {}", name, e).red());
            return ItemOutcome::Failed {
                stage: FailureStage::Detail,
                reason: e.to_string(),
            };
        }
    };

    let Some(filename) = detail.artifact_filename() else {
        console.line(format!("Filename not found for {}, skipping", name).yellow());
        console.line(format!("Received JSON: {}", received_json(&detail)));
        return ItemOutcome::Skipped {
            reason: SkipReason::MissingFilename,
        };
    };

    console.line(format!("Downloading file: {}", filename));

    let result = match run_dir.artifact_path(name, filename) {
        Ok(dest) => api.download_application(name, filename, &dest).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(artifact) => {
            console.line(format!("Download completed: {}", artifact.path.display()).green());
            ItemOutcome::Downloaded(artifact)
        }
        Err(e) => {
            debug!("Download failed for {}: {}", name, e);
            console.line(format!("Error downloading application {}: {}", name, e).red());
            console.line(format!("Download failed for {}", name).red());
            ItemOutcome::Failed {
                stage: FailureStage::Download,
                reason: e.to_string(),
            }
        }
    }
}

fn received_json(detail: &ApplicationDetail) -> String {
    serde_json::to_string_pretty(detail).unwrap_or_else(|e| format!("<unprintable: {}>", e))
}
