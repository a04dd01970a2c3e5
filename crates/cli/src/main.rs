//! `jobtrack` -- command-line client for the job applications API.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                          | Description               |
//! |----------------|----------|----------------------------------|---------------------------|
//! | `JOBS_API_URL` | no       | `http://localhost:5000/api/jobs` | Base URL of the jobs API  |
//! | `RUST_LOG`     | no       | `jobtrack=info,...`              | Log filter (stderr)       |

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;
mod render;

use args::Cli;

const DEFAULT_LOG_FILTER: &str = "jobtrack=info,jobtrack_store=info,jobtrack_client=info";
const VERBOSE_LOG_FILTER: &str = "jobtrack=debug,jobtrack_store=debug,jobtrack_client=debug";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match commands::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
