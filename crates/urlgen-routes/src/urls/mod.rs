//! Route templates and URL generation.
//!
//! - [`reference`]: [`RouteUrl`](reference::RouteUrl), a URL reference that keeps its registered text
//! - [`pattern`]: Placeholder extraction, value escaping, and substitution
//! - [`generator`]: The route table and the [`Generator`](generator::Generator)
//!
//! # Examples
//!
//! ```
//! use urlgen_routes::urls::generator::{Generator, Params, Routes};
//!
//! let routes = Routes::new().route("hello", "/hello/:name").unwrap();
//! let generator = Generator::new(routes);
//!
//! let mut params = Params::new();
//! params.insert("name".to_string(), "Jane & Jon".to_string());
//! let url = generator.url("hello", &params).unwrap();
//! assert_eq!(url.to_string(), "/hello/Jane+%26+Jon");
//! ```

pub mod generator;
pub mod pattern;
pub mod reference;
