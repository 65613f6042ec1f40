//! # urlgen-template
//!
//! Exposes a route generator as a template helper. [`TemplateFunc`] takes a
//! route name and a flat list of alternating keys and values, the calling
//! convention of template engine functions, and returns the generated URL as
//! a string.
//!
//! ## Modules
//!
//! - [`function`] - The flat-parameter adapter
//! - [`engine`] - Registration with the Tera template engine

pub mod engine;
pub mod function;

pub use engine::register;
pub use function::TemplateFunc;
