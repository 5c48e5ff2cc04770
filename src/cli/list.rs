//! List command: show deployed applications without downloading

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::client::{ApplicationsApi, CloudHubClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::AppDisplay;
use crate::output::{Console, Formattable};

/// Run the list command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let config = Config::from_options(opts)?;
    let endpoints = Console::new(opts.format.is_human() && config.endpoint_logging);

    let client = CloudHubClient::connect(&config, endpoints).await?;
    let list = client.list_applications().await?;
    debug!("Fetched {} applications", list.len());

    if opts.format.is_human() {
        println!();
    }

    let rows: Vec<AppDisplay> = list.summaries().iter().map(AppDisplay::from).collect();
    rows.print(opts.format)?;

    Ok(())
}
