//! Configuration Module
//!
//! Settings for the helper registry, loaded from environment variables or
//! deserialized from a host application's own config file.

mod settings;

pub use settings::{
    ConfigError, DEV_MODE_ENV, ESCAPE_HTML_ENV, PREVENT_INDENT_ENV, RegistryConfig, STRICT_MODE_ENV,
};
