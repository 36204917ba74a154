//! 目录存储 Provider
//!
//! 每个文件名对应根目录下的一个文件（类似浏览器的源私有文件系统）。

use crate::kernel::services::ports::storage::{
    validate_filename, BackendKind, Result, StorageBackend, StorageError, StorageFuture,
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Feature check: the root must exist or be creatable as a directory.
    pub fn probe(root: &Path) -> Option<Self> {
        match std::fs::create_dir_all(root) {
            Ok(()) if root.is_dir() => Some(Self::new(root)),
            Ok(()) => None,
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "directory storage unavailable");
                None
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        Ok(self.root.join(filename))
    }

    async fn save_inner(&self, filename: &str, content: &str) -> Result<()> {
        let path = self.entry_path(filename)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, content).await?;
        Ok(())
    }

    async fn list_inner(&self) -> Result<Vec<String>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    async fn read_inner(&self, filename: &str) -> Result<String> {
        let path = self.entry_path(filename)?;
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| not_found_or_io(e, filename))
    }

    async fn delete_inner(&self, filename: &str) -> Result<()> {
        let path = self.entry_path(filename)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| not_found_or_io(e, filename))
    }
}

fn not_found_or_io(e: io::Error, filename: &str) -> StorageError {
    if e.kind() == io::ErrorKind::NotFound {
        StorageError::NotFound(filename.to_string())
    } else {
        StorageError::Io(e)
    }
}

impl StorageBackend for DirectoryStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Directory
    }

    fn save<'a>(&'a self, filename: &'a str, content: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(self.save_inner(filename, content))
    }

    fn list(&self) -> StorageFuture<'_, Vec<String>> {
        Box::pin(self.list_inner())
    }

    fn read<'a>(&'a self, filename: &'a str) -> StorageFuture<'a, String> {
        Box::pin(self.read_inner(filename))
    }

    fn delete<'a>(&'a self, filename: &'a str) -> StorageFuture<'a, ()> {
        Box::pin(self.delete_inner(filename))
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/storage/directory.rs"]
mod tests;
