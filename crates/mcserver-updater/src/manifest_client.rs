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

//! HTTP client for the version manifest, detail payloads and artifacts

use crate::config::UpdaterConfig;
use crate::error::{Result, UpdaterError};
use crate::manifest::{DownloadDescriptor, VersionDetail, VersionManifest};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ManifestClient {
    client: Client,
    manifest_url: String,
}

impl ManifestClient {
    pub fn new(manifest_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&UpdaterConfig {
            manifest_url: manifest_url.into(),
            ..Default::default()
        })
    }

    pub fn from_config(config: &UpdaterConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpdaterError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            manifest_url: config.manifest_url.clone(),
        })
    }

    /// Download the version catalog
    pub async fn fetch_manifest(&self) -> Result<VersionManifest> {
        let bytes = self
            .get_bytes(&self.manifest_url, "fetching version manifest")
            .await?;
        let manifest = VersionManifest::from_slice(&bytes)?;
        debug!(
            "Fetched manifest with {} versions (latest release {})",
            manifest.versions.len(),
            manifest.latest_stable_id()
        );
        Ok(manifest)
    }

    /// Resolve `version_id` to the server download via its detail payload
    pub async fn resolve_descriptor(
        &self,
        manifest: &VersionManifest,
        version_id: &str,
    ) -> Result<DownloadDescriptor> {
        let entry = manifest.entry(version_id)?;
        let bytes = self
            .get_bytes(&entry.url, "fetching version detail")
            .await?;
        VersionDetail::from_slice(&bytes)?.server_descriptor(version_id)
    }

    /// Download the artifact named by `descriptor` fully into memory
    pub async fn download(&self, descriptor: &DownloadDescriptor) -> Result<Vec<u8>> {
        self.get_bytes(&descriptor.download_url, "downloading server file")
            .await
    }

    async fn get_bytes(&self, url: &str, stage: &'static str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpdaterError::network(stage, format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpdaterError::network(
                stage,
                format!("{url} returned status {status}"),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            UpdaterError::network(stage, format!("failed to read body from {url}: {e}"))
        })?;

        Ok(bytes.to_vec())
    }
}
