//! Settings for urlgen.
//!
//! [`Settings`] holds the route table as plain strings plus the logging
//! configuration. It is read once at startup; the route generator parses the
//! routes and never looks at the settings again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration for a route generator.
///
/// # Examples
///
/// ```
/// use urlgen_core::Settings;
///
/// let settings = Settings::default().with_route("hello", "/hello/:name");
/// assert_eq!(settings.routes["hello"], "/hello/:name");
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Named routes. Keys are route names, values are URL references whose
    /// path may contain `:name` placeholders.
    pub routes: BTreeMap<String, String>,
    /// The tracing filter directive (e.g. "debug", "urlgen_routes=trace").
    pub log_level: String,
    /// Human-readable log output instead of JSON.
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routes: BTreeMap::new(),
            log_level: "info".to_string(),
            debug: false,
        }
    }
}

impl Settings {
    /// Adds a route, replacing any route of the same name.
    #[must_use]
    pub fn with_route(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.routes.insert(name.into(), url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.routes.is_empty());
        assert_eq!(settings.log_level, "info");
        assert!(!settings.debug);
    }

    #[test]
    fn test_with_route_replaces() {
        let settings = Settings::default()
            .with_route("home", "/")
            .with_route("home", "/index");
        assert_eq!(settings.routes.len(), 1);
        assert_eq!(settings.routes["home"], "/index");
    }

    #[test]
    fn test_serde_roundtrip_keeps_routes() {
        let settings = Settings::default().with_route("user", "/users/:id");
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
