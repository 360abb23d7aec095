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

//! Version manifest and per-version detail payloads

use crate::config::ReleaseChannel;
use crate::error::{Result, UpdaterError};
use serde::{Deserialize, Serialize};

/// Pointers to the newest version on each channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatestVersions {
    pub release: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionEntry {
    pub id: String,
    /// Location of the version's detail payload
    pub url: String,
    /// "release", "snapshot", "old_beta", "old_alpha"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        default,
        rename = "releaseTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_time: Option<String>,
}

/// Remote catalog of every published version
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<VersionEntry>,
}

impl VersionManifest {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| UpdaterError::Parse {
            document: "version manifest",
            source,
        })
    }

    /// Id the manifest designates as latest stable
    pub fn latest_stable_id(&self) -> &str {
        &self.latest.release
    }

    /// Latest id on `channel`. Falls back to the stable release when the
    /// manifest carries no snapshot pointer.
    pub fn latest_id(&self, channel: ReleaseChannel) -> &str {
        match channel {
            ReleaseChannel::Release => self.latest_stable_id(),
            ReleaseChannel::Snapshot => self
                .latest
                .snapshot
                .as_deref()
                .unwrap_or_else(|| self.latest_stable_id()),
        }
    }

    /// First entry whose id equals `version_id` exactly
    pub fn find(&self, version_id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|entry| entry.id == version_id)
    }

    pub fn entry(&self, version_id: &str) -> Result<&VersionEntry> {
        self.find(version_id)
            .ok_or_else(|| UpdaterError::VersionNotFound(version_id.to_string()))
    }
}

/// One downloadable file inside a detail payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadInfo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sha1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Only the server download is read; other entries (client, mappings) are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Downloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<DownloadInfo>,
}

/// Per-version detail payload. Only the download section is modelled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionDetail {
    #[serde(default)]
    pub downloads: Option<Downloads>,
}

impl VersionDetail {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| UpdaterError::Parse {
            document: "version detail",
            source,
        })
    }

    /// Extract the server download for `version_id`
    pub fn server_descriptor(&self, version_id: &str) -> Result<DownloadDescriptor> {
        let downloads = self
            .downloads
            .as_ref()
            .ok_or_else(|| UpdaterError::MalformedDetail {
                version: version_id.to_string(),
                reason: "no \"downloads\" section".to_string(),
            })?;

        let server = downloads
            .server
            .as_ref()
            .ok_or_else(|| UpdaterError::MalformedDetail {
                version: version_id.to_string(),
                reason: "no \"downloads.server\" record".to_string(),
            })?;

        if server.url.is_empty() || server.sha1.is_empty() {
            return Err(UpdaterError::MalformedDetail {
                version: version_id.to_string(),
                reason: "server record has an empty url or sha1".to_string(),
            });
        }

        Ok(DownloadDescriptor {
            download_url: server.url.clone(),
            expected_checksum: server.sha1.clone(),
            expected_size: server.size,
        })
    }
}

/// Where to fetch an artifact and what it must hash to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadDescriptor {
    pub download_url: String,
    /// Hex SHA1
    pub expected_checksum: String,
    pub expected_size: Option<u64>,
}
