//! Handlebars helper adapters.
//!
//! Each adapter pulls the first positional argument and the named arguments
//! out of the handlebars call, hands them to the matching domain function,
//! and returns the text as a JSON string. Returning a value (rather than
//! writing to the output) keeps the engine's HTML escaping for `{{...}}` and
//! lets the helpers nest as subexpressions. Values the context could not
//! resolve are passed on as undefined (`None`) rather than `null`, unless the
//! engine is in strict mode, where they are a `MissingVariable` render error.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, PathAndJson, RenderContext, RenderError,
    RenderErrorReason, ScopedJson,
};
use serde_json::{Map, Value};

use crate::domain::format::{
    FixedPlacesOptions, PercentifyOptions, SubstrOptions, commafy, fixed_places, percentify,
    substr,
};

/// Template name of the thousands-grouping helper.
pub const COMMAFY_HELPER: &str = "commafy";

/// Template name of the percentage helper.
pub const PERCENTIFY_HELPER: &str = "percentify";

/// Template name of the fixed-decimals helper.
pub const FIXED_PLACES_HELPER: &str = "fixedPlaces";

/// Template name of the substring helper.
pub const SUBSTR_HELPER: &str = "substr";

/// Every helper name installed by [`register_helpers`].
pub const HELPER_NAMES: [&str; 4] = [
    COMMAFY_HELPER,
    PERCENTIFY_HELPER,
    FIXED_PLACES_HELPER,
    SUBSTR_HELPER,
];

/// Install the dashboard helpers into a handlebars engine.
pub fn register_helpers(engine: &mut Handlebars<'_>) {
    engine.register_helper(COMMAFY_HELPER, Box::new(CommafyHelper));
    engine.register_helper(PERCENTIFY_HELPER, Box::new(PercentifyHelper));
    engine.register_helper(FIXED_PLACES_HELPER, Box::new(FixedPlacesHelper));
    engine.register_helper(SUBSTR_HELPER, Box::new(SubstrHelper));
}

fn positional<'a>(
    h: &'a Helper<'_>,
    r: &Handlebars<'_>,
    index: usize,
) -> Result<Option<&'a Value>, RenderError> {
    match h.param(index) {
        Some(param) if param.is_value_missing() => missing(param, r).map(|()| None),
        Some(param) => Ok(Some(param.value())),
        None => Ok(None),
    }
}

fn named_arguments(
    h: &Helper<'_>,
    r: &Handlebars<'_>,
) -> Result<Map<String, Value>, RenderError> {
    let mut arguments = Map::new();
    for (key, param) in h.hash() {
        if param.is_value_missing() {
            missing(param, r)?;
        } else {
            arguments.insert((*key).to_string(), param.value().clone());
        }
    }
    Ok(arguments)
}

/// Unresolved lookups are undefined, or an error in strict mode.
fn missing(param: &PathAndJson<'_>, r: &Handlebars<'_>) -> Result<(), RenderError> {
    if r.strict_mode() {
        return Err(RenderErrorReason::MissingVariable(param.relative_path().cloned()).into());
    }
    Ok(())
}

fn text<'rc>(rendered: String) -> ScopedJson<'rc> {
    ScopedJson::Derived(Value::String(rendered))
}

/// `{{commafy value}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommafyHelper;

impl HelperDef for CommafyHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        Ok(text(commafy(positional(h, r, 0)?)))
    }
}

/// `{{percentify value decimals=1}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentifyHelper;

impl HelperDef for PercentifyHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let options = PercentifyOptions::from_hash(&named_arguments(h, r)?);
        Ok(text(percentify(positional(h, r, 0)?, &options)))
    }
}

/// `{{fixedPlaces value digits=2}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPlacesHelper;

impl HelperDef for FixedPlacesHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let options = FixedPlacesOptions::from_hash(&named_arguments(h, r)?);
        Ok(text(fixed_places(positional(h, r, 0)?, &options)))
    }
}

/// `{{substr value start=0 len=5}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstrHelper;

impl HelperDef for SubstrHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'rc>, RenderError> {
        let options = SubstrOptions::from_hash(&named_arguments(h, r)?);
        Ok(text(substr(positional(h, r, 0)?, &options)))
    }
}
