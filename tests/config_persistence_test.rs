//! Save/load behaviour of the configuration file.

use dlpmenu::utils::{ConfigStore, DlpConfig, LoadStatus};
use proptest::prelude::*;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_yields_exact_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = ConfigStore::new(temp_dir.path().join("absent.json"));

    let (config, status) = store.load();
    assert_eq!(status, LoadStatus::Missing);
    assert_eq!(config, DlpConfig::default());
    assert!(!store.path().exists(), "load must not create the file");
}

#[test]
fn malformed_file_yields_defaults_without_partial_fields() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");

    // Valid leading keys followed by garbage
    std::fs::write(&path, "{\n    \"codec\": \"vp9\",\n    \"proxy\": \"http://p\",\n    oops\n").unwrap();

    let (config, status) = ConfigStore::new(&path).load();
    assert!(matches!(status, LoadStatus::Corrupt(_)), "got {:?}", status);
    assert!(status.message().contains("corrupt"));
    assert_eq!(config, DlpConfig::default());
}

#[test]
fn unreadable_path_yields_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    // A directory where the file should be
    let (config, status) = ConfigStore::new(temp_dir.path()).load();
    assert!(matches!(status, LoadStatus::Unreadable(_)), "got {:?}", status);
    assert_eq!(config, DlpConfig::default());
}

#[test]
fn save_failure_is_an_error_not_a_panic() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    // Parent "directory" is a regular file
    let store = ConfigStore::new(blocker.join("config.json"));
    assert!(store.save(&DlpConfig::default()).is_err());
}

#[test]
fn saved_file_is_readable_by_plain_json_tools() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let store = ConfigStore::new(temp_dir.path().join("config.json"));
    let config = DlpConfig {
        speed_limit: Some("500K".to_string()),
        ..Default::default()
    };
    store.save(&config).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(value["speed_limit"], "500K");
    assert_eq!(value["user_agent"], serde_json::Value::Null);
    assert_eq!(value["default_subtitles"], serde_json::json!(["en", "es"]));
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ -~]{0,24}")
}

prop_compose! {
    fn arb_config()(
        download_path in "/[a-zA-Z0-9_ .-]{1,20}(/[a-zA-Z0-9_.-]{1,12}){0,3}",
        filename in "[ -~]{1,30}",
        format in "[a-z0-9]{2,5}",
        codec in "[a-z0-9.]{2,12}",
        proxy in optional_text(),
        user_agent in optional_text(),
        speed_limit in optional_text(),
        default_subtitles in proptest::collection::vec("[a-z]{2,3}(-[A-Z]{2})?", 0..5),
    ) -> DlpConfig {
        DlpConfig {
            download_path: PathBuf::from(download_path),
            filename,
            format,
            codec,
            proxy,
            user_agent,
            speed_limit,
            default_subtitles,
        }
    }
}

proptest! {
    #[test]
    fn save_then_load_round_trips(config in arb_config()) {
        let temp_dir = tempdir().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("config.json"));

        store.save(&config).unwrap();
        let (loaded, status) = store.load();

        prop_assert_eq!(status, LoadStatus::Loaded);
        prop_assert_eq!(loaded, config);
    }
}
