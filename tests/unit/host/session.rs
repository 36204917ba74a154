use super::*;
use crate::kernel::services::adapters::storage::DATABASE_FILE;
use crate::kernel::services::adapters::{DirectoryStorage, RecordStorage};
use crate::kernel::services::ports::{EditorConfig, WordWrap};
use tempfile::{tempdir, TempDir};

fn host_with(storage: StorageService) -> Host {
    let session = SessionController::new(HeadlessSurface::new(), EditorConfig::default());
    Host::with_parts(session, storage, AsyncRuntime::new().unwrap())
}

fn directory_host() -> (Host, TempDir) {
    let dir = tempdir().unwrap();
    let storage = StorageService::with_backend(Box::new(DirectoryStorage::new(dir.path())));
    (host_with(storage), dir)
}

fn run(host: &mut Host, line: &str) -> Vec<String> {
    let command = HostCommand::parse(line).unwrap().unwrap();
    host.execute(command).unwrap()
}

#[test]
fn test_new_selects_buffer() {
    let (mut host, _dir) = directory_host();
    assert_eq!(run(&mut host, "new markdown"), vec!["buffer 1"]);
    assert_eq!(host.session().active_index(), 1);
    assert_eq!(host.session().surface().bound_id(), host.session().buffer_id(1).ok());
}

#[test]
fn test_type_marks_buffer_modified() {
    let (mut host, _dir) = directory_host();
    assert!(!host.is_modified(0).unwrap());

    assert_eq!(run(&mut host, r"type hello\nworld"), vec!["1 edit(s)"]);
    assert!(host.is_modified(0).unwrap());
    assert_eq!(run(&mut host, "show"), vec!["hello\nworld"]);
    assert_eq!(run(&mut host, "lines 0"), vec!["   1 | hello", "   2 | world"]);
}

#[test]
fn test_close_last_buffer_tracks_replacement() {
    let (mut host, _dir) = directory_host();
    run(&mut host, "type x");
    assert_eq!(run(&mut host, "close 0"), vec!["closed 0, active 0"]);
    assert!(!host.is_modified(0).unwrap());
    assert_eq!(run(&mut host, "show"), vec![""]);

    run(&mut host, "type y");
    assert!(host.is_modified(0).unwrap());
}

#[test]
fn test_close_out_of_range() {
    let (mut host, _dir) = directory_host();
    let err = host.execute(HostCommand::Close(4)).unwrap_err();
    assert!(matches!(
        err,
        HostError::Session(SessionError::IndexOutOfRange { index: 4, len: 1 })
    ));
}

#[test]
fn test_language_plaintext_label() {
    let (mut host, _dir) = directory_host();
    assert_eq!(run(&mut host, "lang rust"), vec!["language rust"]);
    assert_eq!(run(&mut host, "lang plaintext"), vec!["language plaintext"]);
    assert_eq!(host.session().language(0).unwrap(), None);
}

#[test]
fn test_view_options() {
    let (mut host, _dir) = directory_host();
    assert_eq!(run(&mut host, "wrap on"), vec!["word wrap on"]);
    assert_eq!(host.session().surface().word_wrap(), WordWrap::On);
    assert_eq!(run(&mut host, "font +"), vec!["font size 15"]);
    assert_eq!(run(&mut host, "font -20"), vec!["font size -5"]);
    assert_eq!(run(&mut host, "resize 300 200"), vec!["viewport 300x200"]);
}

#[test]
fn test_save_and_open() {
    let (mut host, dir) = directory_host();
    run(&mut host, "type # title");
    assert_eq!(run(&mut host, "save 0 notes.md"), vec!["saved 0 as notes.md"]);
    assert!(!host.is_modified(0).unwrap());
    assert_eq!(host.filename(0).unwrap(), Some("notes.md"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("notes.md")).unwrap(),
        "# title"
    );

    assert_eq!(run(&mut host, "files"), vec!["notes.md"]);
    assert_eq!(
        run(&mut host, "open notes.md"),
        vec!["opened notes.md as buffer 1"]
    );
    assert_eq!(host.session().active_index(), 1);
    assert_eq!(host.session().content(1).unwrap(), "# title");
    assert_eq!(
        host.session().language(1).unwrap().map(|l| l.to_string()),
        Some("markdown".to_string())
    );
    assert!(!host.is_modified(1).unwrap());
}

#[test]
fn test_open_missing_file() {
    let (mut host, _dir) = directory_host();
    let err = host
        .execute(HostCommand::Open {
            filename: "nope".to_string(),
            language: None,
        })
        .unwrap_err();
    assert!(matches!(err, HostError::Storage(StorageError::NotFound(_))));
    assert_eq!(host.session().len(), 1);
}

#[test]
fn test_remove_file_with_record_store() {
    let dir = tempdir().unwrap();
    let storage =
        StorageService::with_backend(Box::new(RecordStorage::new(dir.path().join(DATABASE_FILE))));
    let mut host = host_with(storage);

    run(&mut host, "save 0 a.txt");
    assert_eq!(run(&mut host, "rm a.txt"), vec!["deleted a.txt"]);
    assert!(run(&mut host, "files").is_empty());
}

#[test]
fn test_unavailable_storage() {
    let mut host = host_with(StorageService::unavailable());
    let err = host.execute(HostCommand::Files).unwrap_err();
    assert_eq!(err.to_string(), "File storage not supported");
}

#[test]
fn test_list_marks_active_and_modified() {
    let (mut host, _dir) = directory_host();
    run(&mut host, "new rust");
    run(&mut host, "type fn");

    let lines = run(&mut host, "list");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("     0  file:///initial  [plaintext] v1"));
    assert!(lines[1].starts_with(">*   1  inmemory://model/"));
    assert!(lines[1].ends_with("[rust] v2"));
}
