//! Service ports: traits + data contracts.

pub mod config;
pub mod display;
pub mod settings;
pub mod storage;

pub use config::{EditorConfig, Padding, ScrollbarConfig};
pub use display::{
    Dimension, DisplaySurface, EditorOption, ModelBinding, OptionValue, SurfaceOptions, WordWrap,
};
pub use settings::{Settings, StorageConfig};
pub use storage::{
    validate_filename, BackendKind, Result as StorageResult, StorageBackend, StorageError,
    StorageFuture,
};
