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

//! Update decision and application
//!
//! One run walks: fetch manifest -> resolve target -> compare with the
//! installed record -> (if different) resolve download -> download -> verify
//! -> install artifact -> commit record. The record is only written after the
//! artifact passed verification and was installed, so a record never names a
//! version whose artifact is missing or corrupt.

use crate::artifact::ArtifactStore;
use crate::checksum;
use crate::config::{ReleaseChannel, UpdaterConfig};
use crate::error::{Result, UpdaterError};
use crate::manifest::{DownloadDescriptor, VersionManifest};
use crate::manifest_client::ManifestClient;
use crate::telemetry::{UpdateEvent, report_event};
use crate::version_store::VersionStore;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// What a run would do, decided before anything is downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdatePlan {
    UpToDate { version: String },
    UpdateNeeded {
        current: Option<String>,
        target: String,
    },
}

/// Successful result of [`UpdateEngine::decide_and_apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate { version: String },
    Committed {
        previous: Option<String>,
        version: String,
    },
}

impl UpdateOutcome {
    pub fn version(&self) -> &str {
        match self {
            Self::UpToDate { version } | Self::Committed { version, .. } => version,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateEngine {
    client: ManifestClient,
    versions: VersionStore,
    artifact: ArtifactStore,
    channel: ReleaseChannel,
}

impl UpdateEngine {
    pub fn new(client: ManifestClient, versions: VersionStore, artifact: ArtifactStore) -> Self {
        Self {
            client,
            versions,
            artifact,
            channel: ReleaseChannel::default(),
        }
    }

    /// Build an engine whose persisted files live in `working_dir`
    pub fn from_config(config: &UpdaterConfig, working_dir: &Path) -> Result<Self> {
        let client = ManifestClient::from_config(config)?;
        let versions = VersionStore::new(config.version_path(working_dir));
        let artifact = ArtifactStore::new(config.artifact_path(working_dir));
        Ok(Self::new(client, versions, artifact).with_channel(config.channel))
    }

    /// Channel followed when no version is requested
    pub fn with_channel(mut self, channel: ReleaseChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Decide whether `requested` (or the channel's latest) needs installing.
    /// Only the manifest is fetched; nothing is written.
    pub async fn check(&self, requested: Option<&str>) -> Result<UpdatePlan> {
        let (_, plan) = self.plan(requested).await?;
        Ok(plan)
    }

    /// Bring the installed server to `requested`, or to the latest version on
    /// the configured channel when `None`.
    pub async fn decide_and_apply(&self, requested: Option<&str>) -> Result<UpdateOutcome> {
        let (manifest, plan) = match self.plan(requested).await {
            Ok(planned) => planned,
            Err(e) => {
                error!("Update check failed: {e}");
                report_event(&UpdateEvent::CheckFailed {
                    requested: requested.map(str::to_string),
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        let (current, target) = match plan {
            UpdatePlan::UpToDate { version } => {
                info!("Server already up to date ({version})");
                report_event(&UpdateEvent::AlreadyUpToDate {
                    version: version.clone(),
                });
                return Ok(UpdateOutcome::UpToDate { version });
            }
            UpdatePlan::UpdateNeeded { current, target } => (current, target),
        };

        info!(
            "Server update required: {} -> {target}",
            current.as_deref().unwrap_or("<none>")
        );
        report_event(&UpdateEvent::UpdateStarted {
            from_version: current.clone(),
            to_version: target.clone(),
        });

        let started = Instant::now();
        match self.apply(&manifest, &target).await {
            Ok(bytes) => {
                report_event(&UpdateEvent::UpdateCompleted {
                    from_version: current.clone(),
                    to_version: target.clone(),
                    bytes,
                    duration_ms: u64::try_from(started.elapsed().as_millis())
                        .unwrap_or(u64::MAX),
                });
                Ok(UpdateOutcome::Committed {
                    previous: current,
                    version: target,
                })
            }
            Err(e) => {
                error!("Update to {target} failed: {e}");
                report_event(&UpdateEvent::UpdateFailed {
                    from_version: current,
                    to_version: target,
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn plan(&self, requested: Option<&str>) -> Result<(VersionManifest, UpdatePlan)> {
        let manifest = self.client.fetch_manifest().await?;

        let target = match requested {
            Some(version) => version.to_string(),
            None => manifest.latest_id(self.channel).to_string(),
        };
        if let Some(kind) = manifest.find(&target).and_then(|e| e.kind.as_deref()) {
            debug!("Target version {target} ({kind})");
        } else {
            debug!("Target version {target}");
        }

        let current = self.versions.read()?;
        let plan = if current.as_deref() == Some(target.as_str()) {
            UpdatePlan::UpToDate { version: target }
        } else {
            UpdatePlan::UpdateNeeded { current, target }
        };

        Ok((manifest, plan))
    }

    /// Download, verify, install and commit `target`. Returns the artifact
    /// size.
    async fn apply(&self, manifest: &VersionManifest, target: &str) -> Result<u64> {
        let descriptor = self.client.resolve_descriptor(manifest, target).await?;

        info!(
            "Downloading server version {target} from {}",
            descriptor.download_url
        );
        let bytes = self.client.download(&descriptor).await?;
        info!("Download complete ({} bytes)", bytes.len());

        verify_download(&bytes, &descriptor)?;
        debug!("Checksum verified for {target}");

        self.artifact.install(&bytes)?;
        self.versions.write(target)?;
        info!("Server updated to {target}");

        Ok(u64::try_from(bytes.len()).unwrap_or(u64::MAX))
    }
}

/// Size (when published) then SHA1 must match the descriptor
fn verify_download(bytes: &[u8], descriptor: &DownloadDescriptor) -> Result<()> {
    if let Some(expected) = descriptor.expected_size {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        if actual != expected {
            return Err(UpdaterError::VerificationFailed {
                expected: format!("{expected} bytes"),
                actual: format!("{actual} bytes"),
            });
        }
    }

    if !checksum::verify(bytes, &descriptor.expected_checksum) {
        return Err(UpdaterError::VerificationFailed {
            expected: descriptor.expected_checksum.clone(),
            actual: checksum::digest(bytes),
        });
    }

    Ok(())
}
