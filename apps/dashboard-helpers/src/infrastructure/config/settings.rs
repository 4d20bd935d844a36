//! Registry Configuration Settings
//!
//! # Environment Variables
//!
//! - `DASHBOARD_TEMPLATES_STRICT`: fail on missing context values (default: false)
//! - `DASHBOARD_TEMPLATES_DEV_MODE`: reload templates from disk on each render (default: false)
//! - `DASHBOARD_TEMPLATES_ESCAPE`: HTML-escape `{{...}}` output (default: true)
//! - `DASHBOARD_TEMPLATES_PREVENT_INDENT`: skip partial indentation (default: false)
//!
//! Boolean values accept `1/0`, `true/false`, `yes/no`, `on/off`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Env var for [`RegistryConfig::strict_mode`].
pub const STRICT_MODE_ENV: &str = "DASHBOARD_TEMPLATES_STRICT";
/// Env var for [`RegistryConfig::dev_mode`].
pub const DEV_MODE_ENV: &str = "DASHBOARD_TEMPLATES_DEV_MODE";
/// Env var for [`RegistryConfig::escape_html`].
pub const ESCAPE_HTML_ENV: &str = "DASHBOARD_TEMPLATES_ESCAPE";
/// Env var for [`RegistryConfig::prevent_indent`].
pub const PREVENT_INDENT_ENV: &str = "DASHBOARD_TEMPLATES_PREVENT_INDENT";

/// Configuration error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// The rejected value.
        value: String,
        /// What the variable accepts.
        expected: &'static str,
    },
}

/// Helper registry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Raise a render error when a template references a missing value.
    ///
    /// Off by default: the helpers are built to degrade on missing input.
    #[serde(default)]
    pub strict_mode: bool,
    /// Reload file-backed templates on every render.
    #[serde(default)]
    pub dev_mode: bool,
    /// HTML-escape the output of `{{...}}` expressions.
    #[serde(default = "default_escape_html")]
    pub escape_html: bool,
    /// Do not indent partials to the column of their call site.
    #[serde(default)]
    pub prevent_indent: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            dev_mode: false,
            escape_html: default_escape_html(),
            prevent_indent: false,
        }
    }
}

const fn default_escape_html() -> bool {
    true
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to something other than a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from a key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key).map_or(Ok(default), |raw| parse_bool(key, &raw))
        };

        Ok(Self {
            strict_mode: flag(STRICT_MODE_ENV, defaults.strict_mode)?,
            dev_mode: flag(DEV_MODE_ENV, defaults.dev_mode)?,
            escape_html: flag(ESCAPE_HTML_ENV, defaults.escape_html)?,
            prevent_indent: flag(PREVENT_INDENT_ENV, defaults.prevent_indent)?,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = RegistryConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert!(!config.strict_mode);
        assert!(config.escape_html);
    }

    #[test]
    fn reads_flags() {
        let config = RegistryConfig::from_lookup(lookup_from(&[
            (STRICT_MODE_ENV, "true"),
            (DEV_MODE_ENV, "1"),
            (ESCAPE_HTML_ENV, "OFF"),
            (PREVENT_INDENT_ENV, " yes "),
        ]))
        .unwrap();

        assert!(config.strict_mode);
        assert!(config.dev_mode);
        assert!(!config.escape_html);
        assert!(config.prevent_indent);
    }

    #[test]
    fn rejects_non_boolean() {
        let err = RegistryConfig::from_lookup(lookup_from(&[(STRICT_MODE_ENV, "maybe")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: STRICT_MODE_ENV.to_string(),
                value: "maybe".to_string(),
                expected: "a boolean",
            }
        );
        assert!(err.to_string().contains(STRICT_MODE_ENV));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: RegistryConfig = serde_json::from_str(r#"{"strict_mode": true}"#).unwrap();
        assert!(config.strict_mode);
        assert!(config.escape_html);
        assert!(!config.dev_mode);
    }
}
