use super::*;
use tempfile::tempdir;

#[tokio::test]
async fn test_save_read_overwrite() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path().join("files"));

    storage.save("a.txt", "one").await.unwrap();
    assert_eq!(storage.read("a.txt").await.unwrap(), "one");

    storage.save("a.txt", "two").await.unwrap();
    assert_eq!(storage.read("a.txt").await.unwrap(), "two");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("files/a.txt")).unwrap(),
        "two"
    );
}

#[tokio::test]
async fn test_list_sorted_files_only() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path());
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    storage.save("b.md", "").await.unwrap();
    storage.save("a.md", "").await.unwrap();
    assert_eq!(storage.list().await.unwrap(), vec!["a.md", "b.md"]);
}

#[tokio::test]
async fn test_list_missing_root_is_empty() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path().join("absent"));
    assert!(storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path());

    assert!(matches!(
        storage.read("nope").await,
        Err(StorageError::NotFound(name)) if name == "nope"
    ));
    assert!(matches!(
        storage.delete("nope").await,
        Err(StorageError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_removes_file() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path());
    storage.save("a", "x").await.unwrap();
    storage.delete("a").await.unwrap();
    assert!(storage.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejects_path_names() {
    let dir = tempdir().unwrap();
    let storage = DirectoryStorage::new(dir.path().join("files"));
    assert!(matches!(
        storage.save("../escape", "x").await,
        Err(StorageError::InvalidName(_))
    ));
    assert!(!dir.path().join("escape").exists());
}

#[test]
fn test_probe() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("created");
    let storage = DirectoryStorage::probe(&root).unwrap();
    assert_eq!(storage.root(), root.as_path());
    assert!(root.is_dir());

    let file = dir.path().join("file");
    std::fs::write(&file, "").unwrap();
    assert!(DirectoryStorage::probe(&file).is_none());
}
