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

//! Structured lifecycle events for the orchestrator's logs

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub enum UpdateEvent {
    AlreadyUpToDate {
        version: String,
    },
    /// Manifest fetch or record read failed before a target was settled
    CheckFailed {
        requested: Option<String>,
        error: String,
    },
    UpdateStarted {
        from_version: Option<String>,
        to_version: String,
    },
    UpdateCompleted {
        from_version: Option<String>,
        to_version: String,
        bytes: u64,
        duration_ms: u64,
    },
    UpdateFailed {
        from_version: Option<String>,
        to_version: String,
        error: String,
    },
}

/// Emit `event` as one JSON log line.
///
/// Reporting never fails the update; a serialization problem is logged and
/// dropped.
pub fn report_event(event: &UpdateEvent) {
    match serde_json::to_string(event) {
        Ok(json) => tracing::info!(target: "mcserver_updater::event", "{json}"),
        Err(e) => tracing::warn!("Failed to serialize update event: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_started_serialization() {
        let event = UpdateEvent::UpdateStarted {
            from_version: Some("1.20.3".to_string()),
            to_version: "1.20.4".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("UpdateStarted"));
        assert!(json.contains("1.20.3"));
        assert!(json.contains("1.20.4"));
    }

    #[test]
    fn test_fresh_install_has_null_from_version() {
        let event = UpdateEvent::UpdateCompleted {
            from_version: None,
            to_version: "1.20.4".to_string(),
            bytes: 49_150_256,
            duration_ms: 1200,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"from_version\":null"));
        assert!(json.contains("49150256"));
    }

    #[test]
    fn test_check_failed_serialization() {
        let event = UpdateEvent::CheckFailed {
            requested: None,
            error: "network error while fetching version manifest: 503".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("CheckFailed"));
        assert!(json.contains("\"requested\":null"));
        assert!(json.contains("503"));
    }

    #[test]
    fn test_report_event_does_not_panic() {
        report_event(&UpdateEvent::AlreadyUpToDate {
            version: "1.20.4".to_string(),
        });
    }
}
