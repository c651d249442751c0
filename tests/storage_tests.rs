use std::fs;

use estatebook::config::Config;
use estatebook::model::sample_data::sample_address_book;
use estatebook::model::*;
use estatebook::storage;

// ==========================================================================
// ADDRESS BOOK FILE
// ==========================================================================

#[test]
fn address_book_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    let book = sample_address_book().unwrap();

    storage::save_address_book(&path, &book).unwrap();
    let loaded = storage::read_address_book(&path).unwrap().unwrap();
    assert_eq!(loaded, book);
}

#[test]
fn saved_file_uses_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    storage::save_address_book(&path, &sample_address_book().unwrap()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json["buyers"][0]["houseInfo"].is_string());
    assert!(json["sellers"][0]["sellingAddress"].is_string());
    assert!(json["buyers"][0]["tags"].is_array());
}

#[test]
fn missing_file_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(storage::read_address_book(&dir.path().join("nope.json")).unwrap().is_none());
}

#[test]
fn invalid_field_rejects_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(
        &path,
        r#"{"buyers":[{"name":"adam","phone":"badnumber","email":"email@com","address":"home","houseInfo":"info"}],"sellers":[]}"#,
    )
    .unwrap();
    let err = storage::read_address_book(&path).unwrap_err();
    assert!(err.to_string().contains("invalid phone"));
}

#[test]
fn duplicate_entries_reject_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    let seller = r#"{"name":"Sam","phone":"123","email":"sam@example.com","address":"a","sellingAddress":"b","houseInfo":"c","tags":[]}"#;
    fs::write(&path, format!(r#"{{"sellers":[{},{}]}}"#, seller, seller)).unwrap();
    let err = storage::read_address_book(&path).unwrap_err();
    assert_eq!(err.to_string(), "seller list contains duplicate seller(s).");
}

#[test]
fn malformed_json_rejects_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(storage::read_address_book(&path).is_err());
}

// ==========================================================================
// PREFERENCES AND CONFIG
// ==========================================================================

#[test]
fn user_prefs_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let mut prefs = UserPrefs::default();
    prefs.gui_settings.window_x = Some(5);
    prefs.address_book_file_path = "elsewhere/book.json".into();

    storage::save_user_prefs(&path, &prefs).unwrap();
    assert_eq!(storage::read_user_prefs(&path).unwrap(), Some(prefs));
}

#[test]
fn partial_prefs_fill_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    fs::write(&path, r#"{"addressBookFilePath":"x.json"}"#).unwrap();
    let prefs = storage::read_user_prefs(&path).unwrap().unwrap();
    assert_eq!(prefs.address_book_file_path, std::path::PathBuf::from("x.json"));
    assert_eq!(prefs.gui_settings, GuiSettings::default());
}

#[test]
fn config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config::load_or_init(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ logLevel: ").unwrap();
    assert_eq!(Config::load_or_init(&path).unwrap(), Config::default());
}
