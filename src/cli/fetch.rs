//! Fetch command: download every application's artifact

use chrono::Local;
use colored::Colorize;
use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::CloudHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::{ItemDisplay, format_bytes};
use crate::output::{Console, Formattable, json};
use crate::pipeline::{self, RunDirectory, RunSummary};

/// Run the full batch: authenticate, list, snapshot, download
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    // Named now, created on first write
    let mut run_dir = RunDirectory::new(&opts.output_dir, &Local::now());

    let config = Config::from_options(opts)?;
    debug!("Resolved configuration: {:?}", config);
    debug!("Run stamp {}", run_dir.stamp());

    let human = opts.format.is_human();
    let console = Console::new(human);
    let endpoints = Console::new(human && config.endpoint_logging);

    endpoints.section(format!("Using control plane: {}", config.control_plane));
    endpoints.line(format!("Base URL: {}", config.cloudhub_url()));

    let client = CloudHubClient::connect(&config, endpoints)
        .await?
        .with_progress(human);

    let summary = pipeline::run_batch(&client, &mut run_dir, console).await?;

    match opts.format {
        OutputFormat::Json => println!("{}", json::format_json(&summary)?),
        format => print_summary(&summary, format)?,
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    println!();
    let rows: Vec<ItemDisplay> = summary.items.iter().map(ItemDisplay::from).collect();
    rows.print(format)?;

    println!(
        "\n{} downloaded ({}), {} skipped, {} failed of {} applications",
        summary.downloaded_count().to_string().green(),
        format_bytes(summary.bytes_written()),
        summary.skipped_count().to_string().yellow(),
        summary.failed_count().to_string().red(),
        summary.total
    );
    println!("Output directory: {}", summary.run_dir.display());
    println!("\n{}", "Process completed successfully!".bold().green());
    Ok(())
}
