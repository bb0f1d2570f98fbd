//! gitmirror command-line entry point.
//!
//! One-shot batch job intended for scheduled execution: loads credentials
//! from the environment and the repository-pair list from a JSON file, then
//! mirrors each pair in order. Exits 0 on full success; any startup or sync
//! error logs a single fatal line and exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gitmirror_core::config::{self, Credentials};
use gitmirror_core::engine::MirrorEngine;
use gitmirror_core::git::Git2Transport;
use gitmirror_core::workspace::TempWorkspaces;

/// Mirror Git repositories from a source host to a target host.
#[derive(Parser, Debug)]
#[command(
    name = "gitmirror",
    version,
    about = "One-shot Git repository mirroring between hosts"
)]
struct Args {
    /// Path to the JSON repository list.
    #[arg(short, long, default_value = "repositories.json")]
    config: PathBuf,

    /// Load environment variables from this file before resolving
    /// credentials. Without this flag a `.env` in the working directory is
    /// picked up when present.
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("mirror run failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    // An explicitly requested env file must exist; the implicit `.env` is
    // best-effort.
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file: {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let credentials = Credentials::from_env().context("failed to resolve mirror credentials")?;
    let pairs = config::load_pairs(&args.config).context("failed to load repository list")?;
    info!(count = pairs.len(), "loaded repository list");

    let engine = MirrorEngine::new(Git2Transport::new(), TempWorkspaces::new(), credentials);
    let summary = engine.run_all(&pairs)?;

    info!(
        total = summary.total(),
        synced = summary.synced,
        up_to_date = summary.up_to_date,
        "all repositories mirrored"
    );
    Ok(())
}
