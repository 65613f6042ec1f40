//! # urlgen-routes
//!
//! Named route templates and reverse URL generation. Routes are URL
//! references whose path may contain `:name` placeholders; a [`Generator`]
//! substitutes query-escaped values for them.

pub mod urls;

pub use urls::generator::{Generator, Params, Routes, UrlGenerator};
pub use urls::reference::RouteUrl;
pub use urlgen_core::{ParseError, UrlGenError, UrlGenResult};
