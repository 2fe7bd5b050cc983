//! Local photo blob store.
//!
//! Photo rows in the database carry a path relative to the store root;
//! this module owns the actual file IO. Stored filenames are always
//! server-generated UUIDs, so no user input reaches the filesystem path.

use std::io::ErrorKind;
use std::path::PathBuf;

/// Filesystem-backed store for uploaded photo files.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Write a photo under the given relative path, creating the store
    /// directory on first use.
    pub async fn save(&self, relative_path: &str, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(relative_path), data).await
    }

    /// Read a stored photo back.
    pub async fn read(&self, relative_path: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.root.join(relative_path)).await
    }

    /// Remove a stored photo. Missing files are treated as already removed.
    pub async fn remove(&self, relative_path: &str) -> std::io::Result<()> {
        match tokio::fs::remove_file(self.root.join(relative_path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Whether a stored photo exists on disk.
    pub async fn exists(&self, relative_path: &str) -> bool {
        tokio::fs::try_exists(self.root.join(relative_path))
            .await
            .unwrap_or(false)
    }
}
