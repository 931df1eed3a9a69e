// SPDX-License-Identifier: MPL-2.0
//! The file currently chosen for upload.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Extensions offered by the file picker. Other files can still be dropped.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

/// A file picked by the user, with its contents already read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    file_name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Builds a selection from in-memory contents.
    pub fn new(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let file_name = display_name(&path);
        Self {
            path,
            file_name,
            bytes,
        }
    }

    /// Reads `path` into a selection.
    pub async fn read(path: PathBuf) -> Result<Self> {
        let bytes = tokio::fs::read(&path).await?;
        Ok(Self::new(path, bytes))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
