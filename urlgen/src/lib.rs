//! # urlgen
//!
//! Reverse URL generation from named route templates.
//!
//! This is the meta-crate that re-exports the sub-crates. Depend on `urlgen`
//! to get everything, or on the individual crates for finer-grained control.
//!
//! ## Quick Start
//!
//! ```
//! use urlgen::prelude::*;
//!
//! let settings = Settings::default().with_route("hello", "/hello/:name");
//! let generator = Generator::from_settings(&settings).unwrap();
//!
//! let mut params = Params::new();
//! params.insert("name".into(), "Jane & Jon".into());
//! assert_eq!(
//!     generator.url("hello", &params).unwrap().to_string(),
//!     "/hello/Jane+%26+Jon"
//! );
//! ```

/// Error types, settings, and logging setup.
pub use urlgen_core as core;

/// Route templates and the generator.
pub use urlgen_routes as routes;

/// Template helper adapter and Tera integration.
#[cfg(feature = "template")]
pub use urlgen_template as template;

/// Re-exported third-party crates.
pub use tracing;
pub use url;

/// The prelude for convenient imports.
pub mod prelude {
    pub use urlgen_core::logging::setup_logging;
    pub use urlgen_core::settings_loader;
    pub use urlgen_core::{ParseError, Settings, UrlGenError, UrlGenResult};
    pub use urlgen_routes::{Generator, Params, RouteUrl, Routes, UrlGenerator};

    #[cfg(feature = "template")]
    pub use urlgen_template::{register, TemplateFunc};
}
