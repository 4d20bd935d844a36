//! Tracing Setup
//!
//! Installs a `tracing-subscriber` registry with an env filter and a fmt
//! layer for hosts that do not bring their own subscriber.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Standard filter directives
//! - `DASHBOARD_LOG_FORMAT`: `full` | `compact` | `json` (default: full)
//! - `DASHBOARD_LOG_DIRECTIVE`: Directive added on top of `RUST_LOG`
//!   (default: `dashboard_helpers=info`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use dashboard_helpers::infrastructure::telemetry;
//!
//! telemetry::init()?;
//! tracing::info!("rendering dashboards");
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directive applied when none is configured.
const DEFAULT_DIRECTIVE: &str = "dashboard_helpers=info";

/// Env var selecting the log format.
pub const LOG_FORMAT_ENV: &str = "DASHBOARD_LOG_FORMAT";

/// Env var overriding the default directive.
pub const LOG_DIRECTIVE_ENV: &str = "DASHBOARD_LOG_DIRECTIVE";

/// Telemetry setup errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured directive does not parse.
    #[error("Invalid log directive '{directive}': {message}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Default multi-field fmt output.
    #[default]
    Full,
    /// Single-line abbreviated output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Parse format from string, falling back to [`LogFormat::Full`].
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "compact" => Self::Compact,
            "json" => Self::Json,
            _ => Self::Full,
        }
    }

    /// Get the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Log line format.
    pub format: LogFormat,
    /// Directive added on top of `RUST_LOG`.
    pub directive: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            directive: DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let format = std::env::var(LOG_FORMAT_ENV)
            .map(|s| LogFormat::from_str_case_insensitive(&s))
            .unwrap_or_default();

        let directive =
            std::env::var(LOG_DIRECTIVE_ENV).unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string());

        Self { format, directive }
    }
}

/// Initialize tracing with configuration from the environment.
pub fn init() -> Result<(), TelemetryError> {
    init_with_config(&TelemetryConfig::from_env())
}

/// Initialize tracing with custom configuration.
///
/// # Errors
///
/// Fails if the directive does not parse or a global subscriber is already
/// installed.
pub fn init_with_config(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let directive = parse_directive(&config.directive)?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Full => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}

fn parse_directive(directive: &str) -> Result<Directive, TelemetryError> {
    directive
        .parse()
        .map_err(|e: ParseError| TelemetryError::InvalidDirective {
            directive: directive.to_string(),
            message: e.to_string(),
        })
}

// =============================================================================
// Tests
// =============================================================================
