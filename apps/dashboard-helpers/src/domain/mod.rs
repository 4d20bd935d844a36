//! Domain Layer
//!
//! Pure formatting logic with no template-engine dependencies.
//!
//! - `coercion`: template values to numbers, text, and truthiness
//! - `number`: number-to-text rendering and fixed-point rounding
//! - `format`: the four dashboard helpers and their options

pub mod coercion;
pub mod format;
pub mod number;
