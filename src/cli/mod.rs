//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod fetch;
pub mod list;
pub mod status;

pub use args::OutputFormat;

/// Download the deployed artifact of every CloudHub application
#[derive(Parser)]
#[command(name = "cloudhub-fetch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `fetch`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Connected app client ID
    #[arg(long, global = true, env = "ANYPOINT_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Connected app client secret
    #[arg(long, global = true, env = "ANYPOINT_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Organization ID
    #[arg(long, global = true, env = "ANYPOINT_ORG_ID")]
    pub org_id: Option<String>,

    /// Environment ID
    #[arg(long, global = true, env = "ANYPOINT_ENV_ID")]
    pub env_id: Option<String>,

    /// Control plane: us, eu1 or gov [default: us]
    #[arg(long, global = true, env = "ANYPOINT_CONTROL_PLANE")]
    pub control_plane: Option<String>,

    /// Print endpoint URLs as they are called ("true" enables) [default: true]
    #[arg(long, global = true, env = "ENABLE_ENDPOINT_LOGGING", value_name = "BOOL")]
    pub endpoint_logging: Option<String>,

    /// Directory the timestamped run directory is created in
    #[arg(
        long,
        short = 'o',
        global = true,
        env = "CLOUDHUB_FETCH_OUTPUT_DIR",
        default_value = "."
    )]
    pub output_dir: PathBuf,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "CLOUDHUB_FETCH_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override the API base URL (development/testing)
    #[arg(long, global = true, env = "CLOUDHUB_FETCH_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CLOUDHUB_FETCH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Download every application's artifact into a new run directory
    Fetch,

    /// List deployed applications without downloading anything
    List,

    /// Show resolved configuration (no network calls)
    Status,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   cloudhub-fetch completion bash > /etc/bash_completion.d/cloudhub-fetch
  zsh:    cloudhub-fetch completion zsh > \"${fpath[1]}/_cloudhub-fetch\"
  fish:   cloudhub-fetch completion fish > ~/.config/fish/completions/cloudhub-fetch.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Write completions for `shell` to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
