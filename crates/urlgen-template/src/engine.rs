//! Tera integration.
//!
//! [`TemplateFunc`] implements [`tera::Function`], so a generator can be
//! called from Tera templates:
//!
//! ```text
//! <a href="{{ url(name="article", params=["year", 2024, "slug", "hello-world"]) }}">
//! ```
//!
//! `name` is required. `params` is optional; it is the flat key/value list
//! of [`TemplateFunc::helper`], and its items may be strings, numbers, or
//! booleans.

use std::collections::HashMap;

use tera::{Tera, Value};

use urlgen_routes::UrlGenerator;

use crate::function::TemplateFunc;

/// Registers `generator` as the template function `fn_name`.
///
/// # Examples
///
/// ```
/// use tera::{Context, Tera};
/// use urlgen_routes::{Generator, Routes};
///
/// let routes = Routes::new().route("hello", "/hello/:name").unwrap();
/// let mut tera = Tera::default();
/// urlgen_template::register(&mut tera, "url", Generator::new(routes));
///
/// let out = tera
///     .render_str(r#"{{ url(name="hello", params=["name", "Jane & Jon"]) }}"#, &Context::new())
///     .unwrap();
/// assert_eq!(out, "/hello/Jane+%26+Jon");
/// ```
pub fn register<G: UrlGenerator + 'static>(tera: &mut Tera, fn_name: &str, generator: G) {
    tracing::debug!(function = fn_name, "registering url template function");
    tera.register_function(fn_name, TemplateFunc::new(generator));
}

impl<G: UrlGenerator> tera::Function for TemplateFunc<G> {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = match args.get("name") {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(tera::Error::msg(format!(
                    "argument `name` must be a string, got `{other}`"
                )))
            }
            None => return Err(tera::Error::msg("missing required argument `name`")),
        };

        let params = match args.get("params") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(param_to_string)
                .collect::<tera::Result<Vec<_>>>()?,
            Some(other) => {
                return Err(tera::Error::msg(format!(
                    "argument `params` must be an array, got `{other}`"
                )))
            }
        };

        self.helper(name, params.as_slice())
            .map(Value::String)
            .map_err(|e| {
                tera::Error::chain(format!("can not generate URL for route \"{name}\""), e)
            })
    }
}

fn param_to_string(value: &Value) -> tera::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(tera::Error::msg(format!(
            "`params` items must be strings, numbers or booleans, got `{other}`"
        ))),
    }
}
