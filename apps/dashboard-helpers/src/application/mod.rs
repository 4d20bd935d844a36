//! Application Layer
//!
//! Wires the domain helpers into a handlebars engine.
//!
//! - `helpers`: `HelperDef` adapters and helper names
//! - `registry`: the helper registry used to compile and render templates

pub mod helpers;
pub mod registry;
