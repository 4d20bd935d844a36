#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value,
        clippy::unreadable_literal,
        clippy::approx_constant
    )
)]

//! Dashboard Helpers - Template Formatting
//!
//! Handlebars helpers used by the dashboard templates to print numbers and
//! text. Helpers never fail on malformed input: a missing or non-numeric
//! value renders as `0`, `NaN`, or an empty string so a page always renders.
//!
//! | Helper        | Example                               | Output      |
//! |---------------|---------------------------------------|-------------|
//! | `commafy`     | `{{commafy 1234567}}`                 | `1,234,567` |
//! | `percentify`  | `{{percentify 0.4567 decimals=1}}`    | `45.7%`     |
//! | `fixedPlaces` | `{{fixedPlaces 3.14159 digits=2}}`    | `3.14`      |
//! | `substr`      | `{{substr "hello world" start=6}}`    | `world`     |
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Pure formatting functions
//!   - `coercion`: Template values to numbers, text, truthiness
//!   - `number`: Number rendering and fixed-point rounding
//!   - `format`: The four helpers and their typed options
//!
//! - **Application**: Template engine wiring
//!   - `helpers`: `HelperDef` adapters
//!   - `registry`: `HelperRegistry` for compiling and rendering templates
//!
//! - **Infrastructure**: Ambient setup
//!   - `config`: Registry settings from the environment
//!   - `telemetry`: Tracing subscriber

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Domain layer - Formatting logic with no template-engine dependencies.
pub mod domain;

/// Application layer - Handlebars adapters and the helper registry.
pub mod application;

/// Infrastructure layer - Configuration and telemetry.
pub mod infrastructure;

/// Error types.
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

// Formatting functions
pub use domain::format::{
    FixedPlacesOptions, PercentifyOptions, SubstrOptions, commafy, fixed_places, percentify,
    substr,
};

// Helper registry
pub use application::helpers::{
    COMMAFY_HELPER, FIXED_PLACES_HELPER, HELPER_NAMES, PERCENTIFY_HELPER, SUBSTR_HELPER,
    register_helpers,
};
pub use application::registry::HelperRegistry;

// Configuration
pub use infrastructure::config::{ConfigError, RegistryConfig};

// Errors
pub use error::RegistryError;

// Telemetry
pub use infrastructure::telemetry::{
    TelemetryConfig, TelemetryError, init as init_telemetry,
};
