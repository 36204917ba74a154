//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod paths;
pub mod runtime;
pub mod settings;
pub mod storage;
pub mod surface;

pub use paths::{
    default_storage_config, ensure_log_dir, get_app_data_dir, get_log_dir, get_storage_dir,
    storage_config_in,
};
pub use runtime::AsyncRuntime;
pub use settings::{ensure_settings_file, get_settings_path, load_settings, parse_settings};
pub use storage::{DirectoryStorage, RecordStorage, StorageService};
pub use surface::{HeadlessSurface, ViewState};
