//! Invitation-acceptor CLI entry point.
//!
//! This binary is the composition root. One invocation is one batch run:
//!
//! 1. **Read the credential** from `GH_TOKEN`. If it is missing the process
//!    prints a diagnostic and exits with status 1 before touching the network.
//! 2. **Parse arguments and environment** (see [`config`]).
//! 3. **Wire observability** (see [`observability`]).
//! 4. **Load the whitelist** from the `--list` file. A missing or malformed
//!    file aborts the run before any request is sent.
//! 5. **Construct infrastructure** (`GithubClient`) and hand it to the
//!    `BatchRunner`, which lists, decides and accepts.
//!
//! Scheduling is left to the caller (cron, CI schedule, systemd timer).

mod config;
mod observability;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use driver::BatchRunner;
use github::GithubClient;
use invitations::RunId;
use tracing::{info_span, Instrument};

use crate::config::{Cli, EnvSettings, TOKEN_ENV};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let lookup = |key: &str| std::env::var(key).ok();

    let Some(credential) = config::credential_from(lookup) else {
        eprintln!("Please export '{TOKEN_ENV}' variable.");
        return Ok(ExitCode::from(1));
    };

    let cli = Cli::parse();
    let settings = EnvSettings::from_lookup(lookup)?;
    let _telemetry = observability::init(&settings)?;

    let whitelist = config::load_whitelist(&cli.list)?;
    let client = GithubClient::new(settings.github_config(credential)?)
        .context("failed to create GitHub client")?;

    let run_id = RunId::new_random();
    BatchRunner::new(&client, &whitelist)
        .run()
        .instrument(info_span!("batch", run_id = %run_id))
        .await
        .context("invitation run aborted")?;

    Ok(ExitCode::SUCCESS)
}
