//! 文件存储服务
//!
//! 通过特性检测在目录 Provider 与记录库 Provider 之间二选一；
//! 两者都不可用时，所有操作返回 `BackendUnavailable`。

pub mod directory;
pub mod record;

pub use directory::DirectoryStorage;
pub use record::{FileRecord, RecordStorage, DATABASE_FILE};

use crate::kernel::services::ports::storage::{BackendKind, Result, StorageBackend, StorageError};
use crate::kernel::services::ports::StorageConfig;

pub struct StorageService {
    backend: Option<Box<dyn StorageBackend>>,
}

impl StorageService {
    pub fn detect(config: &StorageConfig) -> Self {
        let directory = || {
            config
                .directory
                .as_deref()
                .and_then(DirectoryStorage::probe)
                .map(|b| Box::new(b) as Box<dyn StorageBackend>)
        };
        let record = || {
            config
                .database
                .as_deref()
                .and_then(RecordStorage::probe)
                .map(|b| Box::new(b) as Box<dyn StorageBackend>)
        };

        let backend = if config.prefer_directory {
            directory().or_else(record)
        } else {
            record().or_else(directory)
        };

        match &backend {
            Some(b) => tracing::info!(backend = b.kind().name(), "file storage detected"),
            None => tracing::warn!("file storage not supported"),
        }
        Self { backend }
    }

    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    pub fn kind(&self) -> Option<BackendKind> {
        self.backend.as_ref().map(|b| b.kind())
    }

    fn backend(&self) -> Result<&dyn StorageBackend> {
        self.backend
            .as_deref()
            .ok_or(StorageError::BackendUnavailable)
    }

    pub async fn save(&self, filename: &str, content: &str) -> Result<()> {
        self.backend()?.save(filename, content).await?;
        tracing::debug!(filename, bytes = content.len(), "file saved");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        self.backend()?.list().await
    }

    pub async fn read(&self, filename: &str) -> Result<String> {
        self.backend()?.read(filename).await
    }

    pub async fn delete(&self, filename: &str) -> Result<()> {
        self.backend()?.delete(filename).await?;
        tracing::debug!(filename, "file deleted");
        Ok(())
    }
}

impl Default for StorageService {
    fn default() -> Self {
        Self::unavailable()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/storage/service.rs"]
mod tests;
