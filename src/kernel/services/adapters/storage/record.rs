//! 记录库存储 Provider
//!
//! 单个 JSON 数据库文件，内含对象仓库 `files`，以文件名为键保存记录
//! （类似浏览器的 IndexedDB 对象仓库）。

use crate::kernel::services::ports::storage::{
    validate_filename, BackendKind, Result, StorageBackend, StorageError, StorageFuture,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub const DATABASE_FILE: &str = "fileStorageDB.json";
const DATABASE_VERSION: u32 = 1;
const RECORD_MIME_TYPE: &str = "plain/text";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub mime_type: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Database {
    version: u32,
    #[serde(default)]
    files: BTreeMap<String, FileRecord>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            version: DATABASE_VERSION,
            files: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct RecordStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles on the database file.
    lock: Mutex<()>,
}

impl RecordStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Feature check: the database's parent directory must be usable.
    pub fn probe(path: &Path) -> Option<Self> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        match std::fs::create_dir_all(parent) {
            Ok(()) if !path.is_dir() => Some(Self::new(path)),
            Ok(()) => None,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "record storage unavailable");
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn open(&self) -> Result<Database> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Database::default()),
            Err(e) => return Err(e.into()),
        };
        let db: Database = serde_json::from_str(&data)?;
        if db.version > DATABASE_VERSION {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "database version {} is newer than supported version {}",
                    db.version, DATABASE_VERSION
                ),
            )));
        }
        Ok(db)
    }

    async fn commit(&self, db: &Database) -> Result<()> {
        let data = serde_json::to_string_pretty(db)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, data).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn save_inner(&self, filename: &str, content: &str) -> Result<()> {
        validate_filename(filename)?;
        let _guard = self.lock.lock().await;
        let mut db = self.open().await?;
        db.files.insert(
            filename.to_string(),
            FileRecord {
                name: filename.to_string(),
                mime_type: RECORD_MIME_TYPE.to_string(),
                content: content.to_string(),
            },
        );
        self.commit(&db).await
    }

    async fn list_inner(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock().await;
        let db = self.open().await?;
        Ok(db.files.values().map(|record| record.name.clone()).collect())
    }

    async fn read_inner(&self, filename: &str) -> Result<String> {
        validate_filename(filename)?;
        let _guard = self.lock.lock().await;
        let mut db = self.open().await?;
        db.files
            .remove(filename)
            .map(|record| record.content)
            .ok_or_else(|| StorageError::NotFound(filename.to_string()))
    }

    /// Deleting a missing record succeeds, like an object-store delete.
    async fn delete_inner(&self, filename: &str) -> Result<()> {
        validate_filename(filename)?;
        let _guard = self.lock.lock().await;
        let mut db = self.open().await?;
        if db.files.remove(filename).is_none() {
            return Ok(());
        }
        self.commit(&db).await
    }
}

impl StorageBackend for RecordStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::RecordStore
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
#[path = "../../../../../tests/unit/kernel/services/adapters/storage/record.rs"]
mod tests;
