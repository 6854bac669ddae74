//! # Heshima Studio CLI
//!
//! Drives the studio client from a terminal.
//!
//! ```bash
//! # List services (falls back to the standard offerings if the API is down)
//! studio-cli catalog
//!
//! # Build a project plan and send one inquiry
//! studio-cli inquire --product 2 --name "Jaha Knight" --email jaha@example.com \
//!     --message "logo work" --scope 1 --scope 3
//!
//! # List submitted inquiries (needs HESHIMA_ADMIN_USERNAME / _PASSWORD)
//! studio-cli inquiries
//! ```
//!
//! Logging is controlled by `RUST_LOG` (default `heshima=info`).

mod commands;

use std::env;

use anyhow::Context;
use clap::{Parser, Subcommand};
use heshima_client::{ClientConfig, HttpStudioApi};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::commands::InquireArgs;

const DEFAULT_LOG_FILTER: &str = "heshima=info,studio_cli=info";

#[derive(Parser)]
#[command(name = "studio-cli")]
#[command(author, version, about = "Heshima Studio client")]
struct Cli {
    /// Studio API base URL
    #[arg(long, global = true, env = "HESHIMA_API_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the studio's services
    Catalog,
    /// Send an inquiry about a service
    Inquire(InquireArgs),
    /// List submitted inquiries (admin)
    Inquiries,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            error!("Command failed: {e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<Vec<String>> {
    let base_url = cli.base_url;
    let config = ClientConfig::from_lookup(|key| match key {
        "HESHIMA_API_BASE_URL" => base_url.clone(),
        _ => env::var(key).ok(),
    })
    .context("invalid client configuration")?;
    debug!(base_url = %config.base_url, "Using studio API");

    let api = HttpStudioApi::new(&config).context("could not create HTTP client")?;

    match cli.command {
        Commands::Catalog => Ok(commands::catalog(&api).await),
        Commands::Inquire(args) => commands::inquire(&api, args).await,
        Commands::Inquiries => commands::inquiries(&api, config.locale).await,
    }
}
