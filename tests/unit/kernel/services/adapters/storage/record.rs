use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn test_missing_database_is_empty() {
    let dir = tempdir().unwrap();
    let storage = RecordStorage::new(dir.path().join(DATABASE_FILE));
    assert!(storage.list().await.unwrap().is_empty());
    assert!(!storage.path().exists());
}

#[tokio::test]
async fn test_save_read_list() {
    let dir = tempdir().unwrap();
    let storage = RecordStorage::new(dir.path().join(DATABASE_FILE));

    storage.save("b.md", "# b").await.unwrap();
    storage.save("a.md", "# a").await.unwrap();
    storage.save("b.md", "# b2").await.unwrap();

    assert_eq!(storage.list().await.unwrap(), vec!["a.md", "b.md"]);
    assert_eq!(storage.read("b.md").await.unwrap(), "# b2");
}

#[tokio::test]
async fn test_records_persist_with_mime_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE);
    RecordStorage::new(&path).save("a", "x").await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["files"]["a"]["mime_type"], "plain/text");
    assert!(!path.with_extension("json.tmp").exists());

    let reopened = RecordStorage::new(&path);
    assert_eq!(reopened.read("a").await.unwrap(), "x");
}

#[tokio::test]
async fn test_read_missing_is_not_found() {
    let dir = tempdir().unwrap();
    let storage = RecordStorage::new(dir.path().join(DATABASE_FILE));
    assert!(matches!(
        storage.read("nope").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_missing_succeeds() {
    let dir = tempdir().unwrap();
    let storage = RecordStorage::new(dir.path().join(DATABASE_FILE));
    storage.save("a", "x").await.unwrap();
    storage.delete("nope").await.unwrap();
    storage.delete("a").await.unwrap();
    assert!(storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE);
    std::fs::write(&path, "not json").unwrap();
    let storage = RecordStorage::new(&path);
    assert!(matches!(storage.list().await, Err(StorageError::Corrupt(_))));
}

#[tokio::test]
async fn test_newer_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE);
    std::fs::write(&path, r#"{ "version": 2, "files": {} }"#).unwrap();
    let storage = RecordStorage::new(&path);
    assert!(matches!(storage.list().await, Err(StorageError::Io(_))));
}

#[test]
fn test_probe_rejects_directory() {
    let dir = tempdir().unwrap();
    assert!(RecordStorage::probe(dir.path()).is_none());

    let path = dir.path().join("nested").join(DATABASE_FILE);
    let storage = RecordStorage::probe(&path).unwrap();
    assert_eq!(storage.path(), path.as_path());
    assert!(dir.path().join("nested").is_dir());
}
