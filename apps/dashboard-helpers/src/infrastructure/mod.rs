//! Infrastructure Layer
//!
//! - `config`: registry settings loaded from the environment
//! - `telemetry`: tracing subscriber setup

pub mod config;
pub mod telemetry;
