//! # urlgen-core
//!
//! Error types, settings, and logging setup shared by the urlgen crates.
//! This crate knows nothing about route templates; it provides the foundation
//! the route generator and the template adapter are built on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Route table and logging configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{ParseError, UrlGenError, UrlGenResult};
pub use settings::Settings;
