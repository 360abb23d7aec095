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

//! Configuration module for the updater

use crate::artifact::DEFAULT_ARTIFACT_FILE;
use crate::error::{Result, UpdaterError};
use crate::version_store::DEFAULT_VERSION_FILE;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "updater_config.json";
pub const DEFAULT_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

fn default_manifest_url() -> String {
    DEFAULT_MANIFEST_URL.to_string()
}

fn default_version_file() -> PathBuf {
    PathBuf::from(DEFAULT_VERSION_FILE)
}

fn default_artifact_file() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_FILE)
}

fn default_300() -> u64 {
    300
}

fn default_user_agent() -> String {
    concat!("mcserver-updater/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Version manifest endpoint
    #[serde(default = "default_manifest_url")]
    pub manifest_url: String,

    /// Installed-version record, relative to the working directory
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    /// Downloaded server artifact, relative to the working directory
    #[serde(default = "default_artifact_file")]
    pub artifact_file: PathBuf,

    /// Which `latest` pointer an unpinned run follows: "release", "snapshot"
    #[serde(default)]
    pub channel: ReleaseChannel,

    /// HTTP timeout per request (seconds, 0 = none)
    #[serde(default = "default_300")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseChannel {
    #[default]
    Release,
    Snapshot,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            manifest_url: default_manifest_url(),
            version_file: default_version_file(),
            artifact_file: default_artifact_file(),
            channel: ReleaseChannel::default(),
            request_timeout_secs: 300,
            user_agent: default_user_agent(),
        }
    }
}

impl UpdaterConfig {
    /// Record path resolved against `working_dir`
    pub fn version_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.version_file)
    }

    /// Artifact path resolved against `working_dir`
    pub fn artifact_path(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.artifact_file)
    }
}

/// Load the config at `path`. A missing file yields defaults and is not
/// created.
pub fn load_config(path: &Path) -> Result<UpdaterConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(UpdaterConfig::default()),
        Err(e) => {
            return Err(UpdaterError::Config(format!(
                "Failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: UpdaterConfig = serde_json::from_str(&content).map_err(|e| {
        UpdaterError::Config(format!("Failed to parse {}: {e}", path.display()))
    })?;

    if config.manifest_url.trim().is_empty() {
        return Err(UpdaterError::Config("manifest_url must not be empty".to_string()));
    }

    Ok(config)
}
