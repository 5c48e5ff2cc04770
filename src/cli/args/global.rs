//! Global CLI options shared across all commands
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! before parsing). Values are kept raw here; validation happens in
//! [`Config::from_options`](crate::config::Config::from_options).

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
#[derive(Clone)]
pub struct GlobalOptions {
    /// Connected app client ID
    pub client_id: Option<String>,

    /// Connected app client secret
    pub client_secret: Option<String>,

    /// Organization ID
    pub org_id: Option<String>,

    /// Environment ID
    pub env_id: Option<String>,

    /// Control plane selector (us, eu1, gov)
    pub control_plane: Option<String>,

    /// Endpoint logging toggle, as written ("true" enables)
    pub endpoint_logging: Option<String>,

    /// Base URL override for development/testing
    pub api_host: Option<String>,

    /// Parent directory for run directories
    pub output_dir: PathBuf,

    /// Output format (pretty, table, json)
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            client_id: cli.client_id.clone(),
            client_secret: cli.client_secret.clone(),
            org_id: cli.org_id.clone(),
            env_id: cli.env_id.clone(),
            control_plane: cli.control_plane.clone(),
            endpoint_logging: cli.endpoint_logging.clone(),
            api_host: cli.api_host.clone(),
            output_dir: cli.output_dir.clone(),
            format: cli.format,
        }
    }
}
