//! 文件存储 Provider trait
//!
//! 以文件名为键、整篇文档字符串为值的异步持久化抽象，
//! 有两种可互换的实现（目录 / 记录库），由特性检测选择。

use std::future::Future;
use std::io;
use std::pin::Pin;

pub type Result<T> = std::result::Result<T, StorageError>;

pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

#[derive(Debug)]
pub enum StorageError {
    BackendUnavailable,
    NotFound(String),
    InvalidName(String),
    Io(io::Error),
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::BackendUnavailable => write!(f, "File storage not supported"),
            StorageError::NotFound(name) => write!(f, "Not found: {}", name),
            StorageError::InvalidName(name) => write!(f, "Invalid file name: {:?}", name),
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Corrupt(e) => write!(f, "Corrupt storage database: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Corrupt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Corrupt(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Directory,
    RecordStore,
}

impl BackendKind {
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Directory => "directory",
            BackendKind::RecordStore => "record-store",
        }
    }
}

pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Creates or overwrites `filename`.
    fn save<'a>(&'a self, filename: &'a str, content: &'a str) -> StorageFuture<'a, ()>;

    fn list(&self) -> StorageFuture<'_, Vec<String>>;

    fn read<'a>(&'a self, filename: &'a str) -> StorageFuture<'a, String>;

    fn delete<'a>(&'a self, filename: &'a str) -> StorageFuture<'a, ()>;
}

/// Names are flat keys: no separators, no `.`/`..`, not empty.
pub fn validate_filename(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/storage.rs"]
mod tests;
