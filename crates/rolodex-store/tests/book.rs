use rolodex_core::{AddressBook, Record};
use rolodex_store::error::StoreErrorKind;
use rolodex_store::{paths, InMemoryStore, JsonFileStore, Storage};
use std::fs;
use tempfile::TempDir;

fn sample_book() -> AddressBook {
    let mut ada = Record::new("Ada").expect("record");
    ada.add_phone("1111111111").expect("phone");
    ada.add_phone("2222222222").expect("phone");
    ada.set_birthday("10.12.1815").expect("birthday");

    let mut bob = Record::new("Bob").expect("record");
    bob.add_phone("3333333333").expect("phone");

    let mut book = AddressBook::new();
    book.add_record(ada);
    book.add_record(bob);
    book.add_record(Record::new("Cleo").expect("record"));
    book
}

#[test]
fn missing_file_loads_empty_book() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonFileStore::open(&paths::book_path_in(temp.path())).expect("open");
    let book = store.load().expect("load");
    assert!(book.is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonFileStore::open(&paths::book_path_in(temp.path())).expect("open");
    let book = sample_book();

    store.save(&book).expect("save");
    let loaded = store.load().expect("load");

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded
        .records()
        .iter()
        .map(|record| record.name().as_str())
        .collect();
    assert_eq!(names, ["Ada", "Bob", "Cleo"]);
    let ada = loaded.find("Ada").expect("ada");
    assert_eq!(ada.phones().len(), 2);
    assert_eq!(ada.birthday().expect("birthday").to_string(), "10.12.1815");
}

#[test]
fn save_overwrites_previous_contents() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonFileStore::open(&temp.path().join("book.json")).expect("open");

    store.save(&sample_book()).expect("save");
    let mut book = store.load().expect("load");
    book.delete("Bob");
    store.save(&book).expect("save");

    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 2);
    assert!(loaded.find("Bob").is_none());
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("a").join("b").join("book.json");
    let store = JsonFileStore::open(&path).expect("open");

    store.save(&sample_book()).expect("save");
    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn saved_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("book.json");
    let store = JsonFileStore::open(&path).expect("open");
    store.save(&sample_book()).expect("save");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn corrupt_file_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("book.json");
    fs::write(&path, "not json").expect("write");

    let store = JsonFileStore::open(&path).expect("open");
    let err = store.load().unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::Json);
}

#[test]
fn empty_path_is_rejected() {
    let err = JsonFileStore::open(std::path::Path::new("")).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::InvalidDataPath);
}

#[test]
fn in_memory_store_keeps_last_save() {
    let store = InMemoryStore::new();
    assert!(store.load().expect("load").is_empty());

    store.save(&sample_book()).expect("save");
    assert_eq!(store.load().expect("load"), sample_book());
}
