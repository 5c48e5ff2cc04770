//! cloudhub-fetch - batch downloader for CloudHub application artifacts

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod pipeline;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    // A .env in the working directory seeds variables the environment lacks
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Warning: could not load .env: {}", err);
        }
    }

    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Fetch) {
        Commands::Fetch => cli::fetch::run(&opts).await,
        Commands::List => cli::list::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            cli::print_completions(shell);
            Ok(())
        }
    }
}
