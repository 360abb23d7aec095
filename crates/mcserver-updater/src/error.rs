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

//! Error types for the updater crate

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdaterError {
    /// Transport failure (DNS, connect, timeout, non-success status) on any fetch
    #[error("network error while {stage}: {message}")]
    Network { stage: &'static str, message: String },

    /// Manifest or detail payload was not valid JSON of the expected shape
    #[error("failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("version {0} not found in version manifest")]
    VersionNotFound(String),

    /// Detail payload has no `downloads.server` record
    #[error("version detail for {version} is missing the server download: {reason}")]
    MalformedDetail { version: String, reason: String },

    #[error("downloaded server file failed validation: expected {expected}, got {actual}")]
    VerificationFailed { expected: String, actual: String },

    #[error("persistence error on {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("usage error: {0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(String),
}

impl UpdaterError {
    pub(crate) fn network(stage: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Network {
            stage,
            message: err.to_string(),
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Process exit status reported to the orchestrator
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
