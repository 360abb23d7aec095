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

//! Minecraft server updater
//!
//! Checks the locally recorded server version against the published version
//! manifest and, when they differ, downloads the server jar, verifies its
//! SHA1 and only then records the new version as installed. Meant to be run
//! by a start script before launching the server; re-running is a no-op once
//! up to date.

pub mod artifact;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod fs_util;
pub mod manifest;
pub mod manifest_client;
pub mod telemetry;
pub mod version_store;

pub use artifact::ArtifactStore;
pub use config::{ReleaseChannel, UpdaterConfig};
pub use engine::{UpdateEngine, UpdateOutcome, UpdatePlan};
pub use error::{Result, UpdaterError};
pub use manifest::{DownloadDescriptor, VersionManifest};
pub use manifest_client::ManifestClient;
pub use version_store::VersionStore;
