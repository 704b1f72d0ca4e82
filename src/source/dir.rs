//! Directory-backed license source
//!
//! Reads a flat directory with one file per identifier, the layout of the
//! `text/` folder in SPDX `license-list-data` (`MIT.txt`,
//! `deprecated_GPL-2.0.txt`, ...). Texts are read lazily on lookup.

use super::LicenseSource;
use crate::{LicenseDbError, LicenseDbResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    files: BTreeMap<String, PathBuf>,
}

impl DirSource {
    /// Index `root`. Fails if the directory cannot be walked or holds no
    /// identifier files.
    pub fn open(root: &Path) -> LicenseDbResult<Self> {
        let mut files = BTreeMap::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if file_name.starts_with('.') {
                continue;
            }
            let id = file_name
                .strip_suffix(".txt")
                .unwrap_or(file_name.as_ref())
                .to_string();
            if id.is_empty() {
                continue;
            }
            files.insert(id, entry.into_path());
        }

        if files.is_empty() {
            return Err(LicenseDbError::EmptySource(root.display().to_string()));
        }

        tracing::info!(
            "Indexed {} license texts from {}",
            files.len(),
            root.display()
        );

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl LicenseSource for DirSource {
    /// Byte-wise sorted identifiers
    fn list(&self) -> LicenseDbResult<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn text(&self, id: &str) -> Option<String> {
        let path = self.files.get(id)?;
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to read license text {}: {}", path.display(), e);
                None
            }
        }
    }

    fn has_text(&self, id: &str) -> bool {
        self.files.get(id).map_or(false, |path| path.is_file())
    }
}
