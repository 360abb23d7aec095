// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Entry point for the updater binary
//!
//! Usage: `mcserver-updater [VERSION]`. Exits 0 when the server is up to date
//! or was updated, 1 on any failure.

use mcserver_updater::cli::{Cli, Invocation, parse_args};
use mcserver_updater::config::load_config;
use mcserver_updater::{Result, UpdateEngine, UpdatePlan};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Informational(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };

    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "mcserver_updater=debug"
    } else {
        "mcserver_updater=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: &Cli) -> Result<()> {
    let config = load_config(&cli.config_path())?;
    let engine = UpdateEngine::from_config(&config, cli.working_dir())?;
    info!(
        "Checking {} for server updates (channel {:?})",
        config.manifest_url, config.channel
    );

    if cli.check {
        match engine.check(cli.version_id.as_deref()).await? {
            UpdatePlan::UpToDate { version } => info!("Server already up to date ({version})"),
            UpdatePlan::UpdateNeeded { current, target } => info!(
                "Server update available: {} -> {target}",
                current.as_deref().unwrap_or("<none>")
            ),
        }
        return Ok(());
    }

    engine.decide_and_apply(cli.version_id.as_deref()).await?;
    Ok(())
}
