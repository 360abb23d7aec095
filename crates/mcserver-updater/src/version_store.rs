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

//! Installed-version record persistence
//!
//! The record is a single line holding the installed version id. A missing
//! file means nothing has been installed yet.

use crate::error::{Result, UpdaterError};
use crate::fs_util::write_atomic;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_VERSION_FILE: &str = "server_version.txt";

#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
}

impl VersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Currently installed version, `None` if the record does not exist
    pub fn read(&self) -> Result<Option<String>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No version record at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(UpdaterError::persistence(&self.path, e)),
        };

        let version = content.lines().next().unwrap_or_default().trim();
        if version.is_empty() {
            warn!(
                "Version record {} is empty, treating as not installed",
                self.path.display()
            );
            return Ok(None);
        }

        Ok(Some(version.to_string()))
    }

    /// Atomically replace the record with `version_id`
    pub fn write(&self, version_id: &str) -> Result<()> {
        write_atomic(&self.path, version_id.as_bytes())?;
        debug!("Recorded installed version {version_id}");
        Ok(())
    }
}
