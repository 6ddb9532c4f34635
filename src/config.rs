//! # Configuration Management
//!
//! Centralized configuration for the marshaling layer.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults
//!
//! ## Environment Variables
//! - `LEDGER_MARSHAL_PAGE_LIMIT`: fields requested per dynamic-field page
//! - `LEDGER_MARSHAL_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error`

use crate::error::{MarshalError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

/// Largest page size the ledger's listing endpoint accepts
pub const MAX_PAGE_LIMIT: u32 = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MarshalConfig {
    /// Dynamic-field listing configuration
    #[serde(default)]
    pub fields: FieldQueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MarshalConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| MarshalError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| MarshalError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| MarshalError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables on top of the defaults.
    ///
    /// A variable that is set but does not parse is an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(limit) = lookup("LEDGER_MARSHAL_PAGE_LIMIT") {
            let val = limit.parse::<u32>().map_err(|e| {
                MarshalError::ConfigError(format!(
                    "Invalid LEDGER_MARSHAL_PAGE_LIMIT '{limit}': {e}"
                ))
            })?;
            config.fields.page_limit = Some(val);
        }

        if let Some(level) = lookup("LEDGER_MARSHAL_LOG_LEVEL") {
            config.logging.log_level = Level::from_str(&level).map_err(|_| {
                MarshalError::ConfigError(format!("Invalid LEDGER_MARSHAL_LOG_LEVEL '{level}'"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Validate the configuration.
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.fields.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(MarshalError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Dynamic-field listing configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldQueryConfig {
    /// Fields requested per page; unset lets the ledger pick its default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,
}

impl FieldQueryConfig {
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(limit) = self.page_limit {
            if limit == 0 {
                errors.push("Page limit must be greater than 0".to_string());
            } else if limit > MAX_PAGE_LIMIT {
                errors.push(format!(
                    "Page limit too large: {limit} (maximum: {MAX_PAGE_LIMIT})"
                ));
            }
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("ledger-marshal"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = MarshalConfig::from_lookup(lookup(&[
            ("LEDGER_MARSHAL_PAGE_LIMIT", "50"),
            ("LEDGER_MARSHAL_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.fields.page_limit, Some(50));
        assert_eq!(config.logging.log_level, Level::DEBUG);
    }

    #[test]
    fn test_env_rejects_bad_page_limit() {
        let err = MarshalConfig::from_lookup(lookup(&[("LEDGER_MARSHAL_PAGE_LIMIT", "lots")]))
            .unwrap_err();
        assert!(err.to_string().contains("LEDGER_MARSHAL_PAGE_LIMIT"));
    }

    #[test]
    fn test_env_empty_uses_defaults() {
        let config = MarshalConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.fields.page_limit, None);
        assert_eq!(config.logging.log_level, Level::INFO);
    }
}
