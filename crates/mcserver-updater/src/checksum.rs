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

//! SHA1 content digests for downloaded artifacts

use sha1::{Digest, Sha1};

/// Lower-case hex SHA1 of the whole payload
pub fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Returns true when `bytes` hash to `expected_hex`.
///
/// The publisher emits lower-case hex; the comparison ignores ASCII case so an
/// upper-case checksum still matches.
pub fn verify(bytes: &[u8], expected_hex: &str) -> bool {
    digest(bytes).eq_ignore_ascii_case(expected_hex.trim())
}
