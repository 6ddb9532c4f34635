//! Integration tests for configuration validation

#![allow(clippy::expect_used)]

use ledger_marshal::config::{FieldQueryConfig, LoggingConfig, MarshalConfig, MAX_PAGE_LIMIT};
use std::io::Write;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = MarshalConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
    assert!(config.validate_strict().is_ok());
}

#[test]
fn test_zero_page_limit() {
    let config = MarshalConfig::default_with_overrides(|c| c.fields.page_limit = Some(0));
    let errors = config.validate();
    assert!(errors
        .iter()
        .any(|e| e.contains("Page limit must be greater than 0")));
}

#[test]
fn test_excessive_page_limit() {
    let fields = FieldQueryConfig {
        page_limit: Some(MAX_PAGE_LIMIT + 1),
    };
    let errors = fields.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Page limit too large"));
}

#[test]
fn test_empty_app_name() {
    let logging = LoggingConfig {
        app_name: String::new(),
        ..LoggingConfig::default()
    };
    assert!(logging
        .validate()
        .iter()
        .any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_validate_strict_collects_all_errors() {
    let config = MarshalConfig::default_with_overrides(|c| {
        c.fields.page_limit = Some(0);
        c.logging.app_name = "x".repeat(65);
    });

    let err = config.validate_strict().expect_err("invalid config");
    let msg = err.to_string();
    assert!(msg.contains("Page limit"));
    assert!(msg.contains("Application name too long"));
}

#[test]
fn test_from_toml() {
    let config = MarshalConfig::from_toml(
        r#"
        [fields]
        page_limit = 200

        [logging]
        app_name = "indexer"
        log_level = "debug"
        json_format = true
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.fields.page_limit, Some(200));
    assert_eq!(config.logging.app_name, "indexer");
    assert_eq!(config.logging.log_level, Level::DEBUG);
    assert!(config.logging.json_format);
}

#[test]
fn test_from_toml_sections_optional() {
    let config = MarshalConfig::from_toml("").expect("empty toml");
    assert_eq!(config.fields.page_limit, None);
    assert_eq!(config.logging.log_level, Level::INFO);
}

#[test]
fn test_from_toml_bad_level() {
    let result = MarshalConfig::from_toml(
        r#"
        [logging]
        app_name = "indexer"
        log_level = "loud"
        json_format = false
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_example_config_roundtrips() {
    let example = MarshalConfig::example_config();
    let parsed = MarshalConfig::from_toml(&example).expect("example parses");
    assert!(parsed.validate().is_empty());
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("ledger-marshal-{}.toml", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("create temp config");
        writeln!(file, "[fields]\npage_limit = 10").expect("write temp config");
    }

    let config = MarshalConfig::from_file(&path).expect("config loads");
    std::fs::remove_file(&path).ok();
    assert_eq!(config.fields.page_limit, Some(10));
}

#[test]
fn test_from_missing_file() {
    let err = MarshalConfig::from_file("/nonexistent/ledger-marshal.toml").expect_err("missing");
    assert!(err.to_string().contains("Failed to open config file"));
}
