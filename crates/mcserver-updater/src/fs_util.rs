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

//! Atomic file replacement shared by the version record and the artifact

use crate::error::{Result, UpdaterError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `bytes` so readers only ever see the old or the new
/// content. The temp file lives next to the target so the final rename stays
/// on one filesystem.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| UpdaterError::persistence(parent, e))?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| UpdaterError::persistence(path, e))?;
    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| UpdaterError::persistence(path, e))?;

    temp.persist(path).map_err(|e| UpdaterError::persistence(path, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("record.txt");

        write_atomic(&path, b"content").unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_atomic_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("server.jar");

        write_atomic(&path, b"jar").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"jar");
    }
}
