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

//! Installation of the verified server artifact

use crate::error::Result;
use crate::fs_util::write_atomic;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_ARTIFACT_FILE: &str = "server.jar";

#[derive(Debug, Clone)]
pub struct ArtifactStore {
    path: PathBuf,
}

impl ArtifactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Promote already-verified bytes to the artifact path
    pub fn install(&self, bytes: &[u8]) -> Result<()> {
        write_atomic(&self.path, bytes)?;
        info!("Installed {} ({} bytes)", self.path.display(), bytes.len());
        Ok(())
    }
}
