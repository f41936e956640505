use fngen::config::{load_data, parse_data};
use fngen::error::Error;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_json_data() {
    let data = parse_data(r#"{"name": "hello", "port": 8080}"#).unwrap();
    assert_eq!(data, json!({"name": "hello", "port": 8080}));
}

#[test]
fn test_parse_yaml_data() {
    let data = parse_data("name: hello\nruntimes:\n  - go\n  - node\n").unwrap();
    assert_eq!(data, json!({"name": "hello", "runtimes": ["go", "node"]}));
}

#[test]
fn test_parse_blank_data() {
    assert_eq!(parse_data("  \n").unwrap(), json!({}));
}

#[test]
fn test_parse_non_mapping_data() {
    assert!(matches!(parse_data("42"), Err(Error::ConfigError(_))));
    assert!(matches!(parse_data("- a\n- b\n"), Err(Error::ConfigError(_))));
}

#[test]
fn test_parse_invalid_data() {
    match parse_data("{\"name\": ") {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid data format")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_load_data_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.yml");
    fs::write(&path, "name: hello\n").unwrap();

    assert_eq!(load_data(&path).unwrap(), json!({"name": "hello"}));
    assert!(matches!(
        load_data(temp_dir.path().join("missing.yml")),
        Err(Error::IoError(_))
    ));
}
