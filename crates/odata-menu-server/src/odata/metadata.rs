//! Static `$metadata` document.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to read metadata document {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Serves a pre-authored EDMX document verbatim. The file is read on every
/// request, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct MetadataProvider {
    path: PathBuf,
}

impl MetadataProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn document(&self) -> Result<String, MetadataError> {
        let document = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| MetadataError::Unreadable {
                path: self.path.display().to_string(),
                source,
            })?;

        debug!("Loaded metadata document ({} bytes)", document.len());

        Ok(document)
    }
}
