//! The template helper adapter.
//!
//! [`TemplateFunc`] wraps any [`UrlGenerator`] and converts the flat argument
//! list of a template call into a parameter map.
//!
//! # Examples
//!
//! ```
//! use urlgen_routes::{Generator, Routes};
//! use urlgen_template::TemplateFunc;
//!
//! let routes = Routes::new().route("hello", "/hello/:name").unwrap();
//! let url = TemplateFunc::new(Generator::new(routes));
//!
//! assert_eq!(url.helper("hello", &["name", "Jane & Jon"]).unwrap(), "/hello/Jane+%26+Jon");
//! assert!(url.helper("hello", &["name"]).is_err());
//! ```

use urlgen_core::{UrlGenError, UrlGenResult};
use urlgen_routes::{Params, UrlGenerator};

/// Adapts a generator to the `(name, key, value, key, value, ...)` calling
/// convention of template functions.
#[derive(Debug, Clone)]
pub struct TemplateFunc<G> {
    generator: G,
}

impl<G: UrlGenerator> TemplateFunc<G> {
    /// Wraps `generator`.
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the wrapped generator.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates the URL of route `name` and returns it as a string.
    ///
    /// `params` alternates keys and values. A key given twice keeps its last
    /// value. Generator errors are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UrlGenError::OddParameterCount`] if `params` has an odd
    /// length, before the route is looked up, and any error of
    /// [`UrlGenerator::url`].
    pub fn helper<S: AsRef<str>>(&self, name: &str, params: &[S]) -> UrlGenResult<String> {
        if params.len() % 2 != 0 {
            return Err(UrlGenError::OddParameterCount(params.len()));
        }
        let map: Params = params
            .chunks_exact(2)
            .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
            .collect();
        self.generator.url(name, &map).map(|url| url.to_string())
    }
}
