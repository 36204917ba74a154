use super::*;

#[test]
fn test_storage_config_in() {
    let dir = Path::new("/data/tabpad");
    let config = storage_config_in(dir);
    assert_eq!(config.directory, Some(dir.join("files")));
    assert_eq!(config.database, Some(dir.join(DATABASE_FILE)));
    assert!(config.prefer_directory);
    assert!(!config.is_unset());
}

#[test]
fn test_log_and_storage_dirs_share_app_dir() {
    let Some(app) = get_app_data_dir() else {
        return;
    };
    assert_eq!(get_log_dir(), Some(app.join("logs")));
    assert_eq!(get_storage_dir(), Some(app.join("files")));
}
