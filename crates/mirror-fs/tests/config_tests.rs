use mirror_fs::{ConfigStore, Error, NormalizedPath};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    name: String,
    #[serde(default)]
    items: Vec<String>,
}

fn load_from(name: &str, content: &str) -> mirror_fs::Result<TestConfig> {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join(name);
    fs::write(&file_path, content).unwrap();

    ConfigStore::new().load(&NormalizedPath::new(&file_path))
}

#[test]
fn test_load_toml() {
    let config = load_from("config.toml", "name = \"test\"\nitems = [\"a\", \"b\"]").unwrap();
    assert_eq!(
        config,
        TestConfig {
            name: "test".into(),
            items: vec!["a".into(), "b".into()],
        }
    );
}

#[test]
fn test_load_json() {
    let config = load_from("config.json", r#"{"name": "test"}"#).unwrap();
    assert_eq!(config.name, "test");
    assert!(config.items.is_empty());
}

#[test]
fn test_load_yaml() {
    let config = load_from("config.yml", "name: test\nitems:\n  - a\n").unwrap();
    assert_eq!(config.name, "test");
    assert_eq!(config.items, vec!["a".to_string()]);
}

#[test]
fn test_unsupported_extension() {
    let err = load_from("config.ini", "name=test").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
}

#[test]
fn test_parse_error_names_format() {
    let err = load_from("config.toml", "name = ").unwrap_err();
    match err {
        Error::ConfigParse { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("absent.toml"));

    let result: mirror_fs::Result<TestConfig> = ConfigStore::new().load(&path);
    assert!(matches!(result, Err(Error::Io { .. })));
}
