//! Status command implementation

use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::{
    CLIENT_ID_VAR, CLIENT_SECRET_VAR, Config, ControlPlane, ENV_ID_VAR, ORG_ID_VAR, parse_flag,
};
use crate::error::Result;

/// Show resolved configuration without touching the network
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let validated = Config::from_options(opts);

    if opts.format == OutputFormat::Json {
        let output = match &validated {
            Ok(config) => json!({
                "valid": true,
                "config": config,
                "base_url": config.base_url(),
                "output_dir": opts.output_dir,
            }),
            Err(err) => json!({
                "valid": false,
                "error": err.to_string(),
                "output_dir": opts.output_dir,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "cloudhub-fetch Configuration Status".bold());

    let credentials = [
        (CLIENT_ID_VAR, opts.client_id.as_deref(), false),
        (CLIENT_SECRET_VAR, opts.client_secret.as_deref(), true),
        (ORG_ID_VAR, opts.org_id.as_deref(), false),
        (ENV_ID_VAR, opts.env_id.as_deref(), false),
    ];
    for (name, value, secret) in credentials {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(_) if secret => println!("{} {} configured", "✓".green(), name),
            Some(v) => println!("{} {}: {}", "✓".green(), name, v),
            None => println!("{} {} not set", "✗".red(), name),
        }
    }

    let selector = opts.control_plane.as_deref().unwrap_or("us");
    match selector.parse::<ControlPlane>() {
        Ok(plane) => println!(
            "{} Control plane: {} ({})",
            "✓".green(),
            plane,
            plane.host().cyan()
        ),
        Err(_) => {
            let known: Vec<&str> = ControlPlane::ALL.iter().map(|p| p.name()).collect();
            println!(
                "{} Control plane: '{}' is not one of {}",
                "✗".red(),
                selector,
                known.join(", ")
            )
        }
    }

    if let Some(host) = &opts.api_host {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }

    let logging = parse_flag(opts.endpoint_logging.as_deref(), true);
    println!(
        "{} Endpoint logging {}",
        "○".dimmed(),
        if logging { "enabled" } else { "disabled" }
    );
    println!("{} Output directory: {}", "○".dimmed(), opts.output_dir.display());

    println!();
    match validated {
        Ok(_) => println!("{}", "Ready to fetch.".green()),
        Err(err) => println!("{} {}", "Not ready:".red(), err),
    }
    println!();

    Ok(())
}
