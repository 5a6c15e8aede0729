use memopad::api::MemoPadApi;
use memopad::store::fs::FileStore;
use memopad::store::DataStore;
use std::fs;

fn texts<S: DataStore>(api: &MemoPadApi<S>) -> Vec<String> {
    api.pad().notes().iter().map(|n| n.text.clone()).collect()
}

#[test]
fn session_survives_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("pad").join("memopad.json");

    let mut api = MemoPadApi::open(FileStore::new(&path)).unwrap();
    assert!(api.pad().is_empty());
    api.add_note("groceries").unwrap();
    api.add_note("dentist").unwrap();
    api.add_note("taxes").unwrap();
    api.toggle_pin(2).unwrap();
    api.toggle_favorite(1).unwrap();
    api.move_right(1).unwrap();
    api.zoom_in().unwrap();

    // Nothing reaches disk until save
    assert!(!path.exists());
    api.save().unwrap();

    let reopened = MemoPadApi::open(FileStore::new(&path)).unwrap();
    assert_eq!(texts(&reopened), vec!["taxes", "groceries", "dentist"]);
    assert_eq!(reopened.pad(), api.pad());
    assert_eq!(reopened.pad().zoom(), 2);
    assert!(reopened.pad().notes()[1].favorite);
    assert_eq!(reopened.pad().notes()[1].indent, 1);
}

#[test]
fn ids_are_stable_across_saves() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("memopad.json");

    let mut api = MemoPadApi::open(FileStore::new(&path)).unwrap();
    api.add_note("a").unwrap();
    api.add_note("b").unwrap();
    api.save().unwrap();
    let id = api.pad().notes()[1].id;

    let mut reopened = MemoPadApi::open(FileStore::new(&path)).unwrap();
    reopened.toggle_pin(1).unwrap();
    reopened.save().unwrap();

    let again = MemoPadApi::open(FileStore::new(&path)).unwrap();
    assert_eq!(again.pad().position(id), Some(0));
}

#[test]
fn autosave_writes_every_change() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("memopad.json");

    let mut api = MemoPadApi::open(FileStore::new(&path))
        .unwrap()
        .with_autosave(true);
    api.add_note("first").unwrap();
    assert!(path.exists());

    api.toggle_pin(0).unwrap();
    let on_disk = MemoPadApi::open(FileStore::new(&path)).unwrap();
    assert!(on_disk.pad().notes()[0].pinned);
}

#[test]
fn unreadable_file_is_never_overwritten_by_open() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("memopad.json");
    fs::write(&path, r#"{"notes": [{"text": 42}]}"#).unwrap();

    assert!(MemoPadApi::open(FileStore::new(&path)).is_err());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"notes": [{"text": 42}]}"#
    );
}

#[test]
fn saved_file_is_plain_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("memopad.json");

    let mut api = MemoPadApi::open(FileStore::new(&path)).unwrap();
    api.add_note("hello").unwrap();
    api.save().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["zoom"], 1);
    assert_eq!(value["notes"][0]["text"], "hello");
    assert_eq!(value["notes"][0]["pinned"], false);
    assert_eq!(value["notes"][0]["indent"], 0);
}
