//! Helper Registry
//!
//! Owns a handlebars engine with the dashboard helpers installed. Build one
//! at startup, register templates, then share it (`render` takes `&self`).
//!
//! # Usage
//!
//! ```rust
//! use dashboard_helpers::{HelperRegistry, RegistryConfig};
//! use serde_json::json;
//!
//! let mut registry = HelperRegistry::new(RegistryConfig::default());
//! registry
//!     .register_template("visits", "{{commafy total}} visits")
//!     .unwrap();
//!
//! let text = registry.render("visits", &json!({"total": 1234567})).unwrap();
//! assert_eq!(text, "1,234,567 visits");
//! ```

use std::fmt;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, warn};

use super::helpers::{HELPER_NAMES, register_helpers};
use crate::error::RegistryError;
use crate::infrastructure::config::{ConfigError, RegistryConfig};

/// Name reported for templates rendered with [`HelperRegistry::render_template`].
pub const INLINE_TEMPLATE_NAME: &str = "inline";

/// Template engine with the dashboard helpers registered.
pub struct HelperRegistry {
    engine: Handlebars<'static>,
    config: RegistryConfig,
}

impl HelperRegistry {
    /// Create a registry with the helpers installed.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(config.strict_mode);
        engine.set_dev_mode(config.dev_mode);
        engine.set_prevent_indent(config.prevent_indent);
        if !config.escape_html {
            engine.register_escape_fn(handlebars::no_escape);
        }
        register_helpers(&mut engine);

        debug!(
            helpers = ?HELPER_NAMES,
            strict_mode = config.strict_mode,
            escape_html = config.escape_html,
            "Helper registry created"
        );

        Self { engine, config }
    }

    /// Create a registry configured from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        RegistryConfig::from_env().map(Self::new)
    }

    /// Compile and store a named template, replacing any previous one.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<(), RegistryError> {
        self.engine
            .register_template_string(name, source)
            .map_err(|err| {
                warn!(template = name, error = %err, "Template failed to compile");
                RegistryError::Template {
                    name: name.to_string(),
                    source: Box::new(err),
                }
            })?;

        debug!(template = name, "Template registered");
        Ok(())
    }

    /// Render a registered template.
    pub fn render<T>(&self, name: &str, data: &T) -> Result<String, RegistryError>
    where
        T: Serialize,
    {
        if !self.engine.has_template(name) {
            return Err(RegistryError::UnknownTemplate(name.to_string()));
        }

        self.engine
            .render(name, data)
            .map_err(|err| render_error(name, err))
    }

    /// Compile and render a template in one step without storing it.
    pub fn render_template<T>(&self, source: &str, data: &T) -> Result<String, RegistryError>
    where
        T: Serialize,
    {
        self.engine
            .render_template(source, data)
            .map_err(|err| render_error(INLINE_TEMPLATE_NAME, err))
    }

    /// Whether `name` is one of the installed helpers.
    #[must_use]
    pub fn has_helper(&self, name: &str) -> bool {
        HELPER_NAMES.contains(&name)
    }

    /// Whether a template is registered under `name`.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.has_template(name)
    }

    /// Names of the installed helpers.
    #[must_use]
    pub const fn helper_names(&self) -> &'static [&'static str] {
        &HELPER_NAMES
    }

    /// The configuration this registry was built with.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The underlying engine, for registering partials or extra helpers
    /// through the handlebars API.
    pub fn engine_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.engine
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("config", &self.config)
            .field("helpers", &HELPER_NAMES)
            .field("templates", &self.engine.get_templates().len())
            .finish()
    }
}

fn render_error(name: &str, source: handlebars::RenderError) -> RegistryError {
    warn!(template = name, error = %source, "Template failed to render");
    RegistryError::Render {
        name: name.to_string(),
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_registered_template() {
        let mut registry = HelperRegistry::default();
        registry
            .register_template("row", "{{substr label len=3}}: {{percentify share decimals=1}}")
            .unwrap();

        assert!(registry.has_template("row"));
        let text = registry
            .render("row", &json!({"label": "Exercises", "share": 0.256}))
            .unwrap();
        assert_eq!(text, "Exe: 25.6%");
    }

    #[test]
    fn unknown_template() {
        let registry = HelperRegistry::default();
        let err = registry.render("nope", &json!({})).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownTemplate(ref name) if name == "nope"));
        assert_eq!(err.template_name(), "nope");
    }

    #[test]
    fn compile_error_names_template() {
        let mut registry = HelperRegistry::default();
        let err = registry
            .register_template("broken", "{{#if}}unclosed")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Template { .. }));
        assert_eq!(err.template_name(), "broken");
        assert!(!registry.has_template("broken"));
    }

    #[test]
    fn reports_helpers() {
        let registry = HelperRegistry::default();
        assert!(registry.has_helper("commafy"));
        assert!(registry.has_helper("fixedPlaces"));
        assert!(!registry.has_helper("fixed_places"));
        assert_eq!(registry.helper_names().len(), 4);
    }

    #[test]
    fn strict_mode_rejects_missing_values() {
        let config = RegistryConfig {
            strict_mode: true,
            ..RegistryConfig::default()
        };
        let registry = HelperRegistry::new(config);
        let err = registry
            .render_template("{{commafy missing}}", &json!({}))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Render { .. }));
        assert_eq!(err.template_name(), INLINE_TEMPLATE_NAME);

        let lenient = HelperRegistry::default()
            .render_template("{{commafy missing}}", &json!({}))
            .unwrap();
        assert_eq!(lenient, "0");
    }

    #[test]
    fn from_env_applies_environment_config() {
        let registry = HelperRegistry::from_env().unwrap();
        assert_eq!(registry.config(), &RegistryConfig::from_env().unwrap());
        assert_eq!(
            registry.render_template("{{commafy 1000}}", &json!({})).unwrap(),
            "1,000"
        );
    }

    #[test]
    fn partials_registered_on_engine() {
        let mut registry = HelperRegistry::default();
        registry
            .engine_mut()
            .register_partial("total", "{{commafy n}} total")
            .unwrap();
        registry.register_template("page", "Visits: {{> total}}").unwrap();

        let text = registry.render("page", &json!({"n": 45678})).unwrap();
        assert_eq!(text, "Visits: 45,678 total");
    }

    #[test]
    fn escaping_follows_config() {
        let data = json!({"name": "<b>bold</b>"});

        let escaped = HelperRegistry::default()
            .render_template("{{substr name len=3}}", &data)
            .unwrap();
        assert_eq!(escaped, "&lt;b&gt;");

        let raw = HelperRegistry::new(RegistryConfig {
            escape_html: false,
            ..RegistryConfig::default()
        })
        .render_template("{{substr name len=3}}", &data)
        .unwrap();
        assert_eq!(raw, "<b>");
    }

    #[test]
    fn debug_output_lists_config() {
        let registry = HelperRegistry::default();
        let debug = format!("{registry:?}");
        assert!(debug.contains("HelperRegistry"));
        assert!(debug.contains("strict_mode: false"));
    }
}
