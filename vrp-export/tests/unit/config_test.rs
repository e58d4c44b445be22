use super::*;

#[test]
fn can_read_full_config() {
    let json = r#"{
        "document": { "pretty": true },
        "table": { "dropAbsentColumns": false },
        "telemetry": { "logging": { "enabled": true } }
    }"#;

    let config = read_config(BufReader::new(json.as_bytes())).unwrap();

    assert!(config.is_pretty());
    assert!(!config.drop_absent_columns());
    assert!(config.is_logging_enabled());
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config(BufReader::new("{}".as_bytes())).unwrap();

    assert!(!config.is_pretty());
    assert!(config.drop_absent_columns());
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_use_defaults_for_partial_config() {
    let config = read_config(BufReader::new(r#"{ "telemetry": { "logging": {} } }"#.as_bytes())).unwrap();

    assert!(config.telemetry.is_some());
    assert!(!config.is_logging_enabled());
}

#[test]
fn can_return_error_for_invalid_config() {
    let result = read_config(BufReader::new(r#"{ "document": { "pretty": "yes" } }"#.as_bytes()));

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config: '"));
}
