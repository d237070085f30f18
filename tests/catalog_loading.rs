//! Integration tests for loading catalogs from JSON files.

use std::{fs, path::Path};

use akinator::{App, Catalog, Error, SessionConfig, Step};
use tempfile::TempDir;

const DRINKS: &str = r#"{
    "attributes": ["Hot", "Sweet"],
    "items": [
        { "name": "tea", "attributes": { "Hot": true, "Sweet": false } },
        { "name": "cocoa", "attributes": { "Hot": true, "Sweet": true } },
        { "name": "lemonade", "attributes": { "Hot": false, "Sweet": true } }
    ]
}"#;

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_loads_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, DRINKS);
    let catalog = Catalog::from_json_path(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.attributes(), ["Hot", "Sweet"]);
    assert_eq!(catalog.item("cocoa").unwrap().value("Sweet"), Some(true));
}

#[test]
fn test_app_plays_over_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, DRINKS);
    let app = App::from_catalog_path(&path).unwrap();
    let mut session = app.start_session(SessionConfig::default()).unwrap();

    assert!(matches!(session.next_question(), Step::Ask(_)));
}

#[test]
fn test_food_catalog_survives_json() {
    let food = Catalog::food();
    let json = food.to_json_string().unwrap();
    let reloaded = Catalog::from_json_str(&json).unwrap();
    assert_eq!(reloaded.attributes(), food.attributes());
    assert_eq!(reloaded.items(), food.items());
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = Catalog::from_json_path(Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("catalog"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "{ \"attributes\": [");
    assert!(matches!(
        Catalog::from_json_path(&path),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn test_validation_errors() {
    let missing = r#"{
        "attributes": ["Hot", "Sweet"],
        "items": [{ "name": "tea", "attributes": { "Hot": true } }]
    }"#;
    assert!(matches!(
        Catalog::from_json_str(missing),
        Err(Error::MissingAttribute { .. })
    ));

    let duplicate = r#"{
        "attributes": ["Hot"],
        "items": [
            { "name": "tea", "attributes": { "Hot": true } },
            { "name": "tea", "attributes": { "Hot": false } }
        ]
    }"#;
    assert!(matches!(
        Catalog::from_json_str(duplicate),
        Err(Error::DuplicateItem { .. })
    ));

    let empty = r#"{ "attributes": ["Hot"], "items": [] }"#;
    assert!(matches!(
        Catalog::from_json_str(empty),
        Err(Error::EmptyCatalog)
    ));
}
