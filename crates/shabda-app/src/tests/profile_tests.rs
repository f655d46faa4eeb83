use tempfile::TempDir;

use crate::profile::{init_profile, load_config};

#[test]
fn test_init_then_load_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("travel.json");

    init_profile(&path).unwrap();
    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.languages.len(), 8);
    assert!(!config.daily_words.is_empty());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.json");
    std::fs::write(&path, "{}").unwrap();

    assert!(init_profile(&path).is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn test_partial_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("main.json");
    std::fs::write(
        &path,
        r#"{ "name": "main", "value": { "default_language": "sa", "history_limit": 3 } }"#,
    )
    .unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.default_language, "sa");
    assert_eq!(config.history_limit, 3);
    assert!(config.dictionary.translations);
}

#[test]
fn test_missing_profile_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
}
