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

//! Command-line invocation contract

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{Result, UpdaterError};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "mcserver-updater", version)]
#[command(
    about = "Download the Minecraft server.jar when a newer (or requested) version is published",
    long_about = None
)]
pub struct Cli {
    /// Server version id to install (default: latest stable release)
    #[arg(value_name = "VERSION")]
    pub version_id: Option<String>,

    /// Directory holding server.jar and server_version.txt
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Config file (default: <dir>/updater_config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only report whether an update is needed
    #[arg(long)]
    pub check: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn working_dir(&self) -> &Path {
        &self.dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.dir.join(DEFAULT_CONFIG_FILE))
    }
}

#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// `--help` / `--version` output, printed with exit status 0
    Informational(String),
}

/// Parse process arguments. Anything clap rejects is a usage error.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Informational(e.to_string()))
        }
        Err(e) => Err(UpdaterError::Usage(e.to_string())),
    }
}
