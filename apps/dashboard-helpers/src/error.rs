//! Error types for template registration and rendering.
//!
//! The helpers themselves never fail on bad input; errors come from the
//! template engine (syntax errors, strict-mode lookups, missing partials)
//! or from asking for a template that was never registered.

use thiserror::Error;

/// Errors from [`HelperRegistry`](crate::HelperRegistry) operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Template source failed to compile.
    #[error("Failed to compile template '{name}': {source}")]
    Template {
        /// Template name.
        name: String,
        /// The underlying compile error.
        source: Box<handlebars::TemplateError>,
    },

    /// Template failed to render.
    #[error("Failed to render template '{name}': {source}")]
    Render {
        /// Template name (`inline` for one-shot templates).
        name: String,
        /// The underlying render error.
        source: Box<handlebars::RenderError>,
    },

    /// No template registered under this name.
    #[error("Template not registered: {0}")]
    UnknownTemplate(String),
}

impl RegistryError {
    /// Name of the template the error refers to.
    #[must_use]
    pub fn template_name(&self) -> &str {
        match self {
            Self::Template { name, .. }
            | Self::Render { name, .. }
            | Self::UnknownTemplate(name) => name,
        }
    }
}
