//! Core error types for urlgen.
//!
//! [`UrlGenError`] covers every failure of route lookup, parameter checking,
//! URL reassembly, the template adapter, and configuration loading.
//! [`ParseError`] describes why a string is not a usable URL reference.

use thiserror::Error;

/// Why a string could not be parsed as a route URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains an ASCII control character or a raw space in the
    /// authority.
    #[error("invalid control character in URL")]
    ControlCharacter,

    /// A `%` is not followed by two hexadecimal digits.
    #[error("invalid URL escape \"{0}\"")]
    InvalidEscape(String),

    /// The reference starts with `:`, so it has a scheme separator but no scheme.
    #[error("missing protocol scheme")]
    MissingScheme,

    /// A scheme-less relative path has a colon in its first segment.
    #[error("first path segment in URL cannot contain colon")]
    ColonInFirstSegment,

    /// The `url` crate rejected an absolute reference.
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The error type for urlgen.
///
/// Every variant is returned to the immediate caller. Generation errors are
/// deterministic for a fixed route table and inputs, so retrying never helps.
#[derive(Error, Debug)]
pub enum UrlGenError {
    // ── Generation ───────────────────────────────────────────────────

    /// The requested route name is not registered.
    #[error("got route \"{name}\", want {}", quoted_names(.known))]
    UnknownRoute {
        /// The requested name.
        name: String,
        /// Every registered route name, sorted.
        known: Vec<String>,
    },

    /// The number of supplied parameters differs from the number of
    /// placeholder occurrences in the route path.
    #[error("route \"{route}\" wants {wanted} parameter(s), got {got}")]
    ArityMismatch {
        /// The route name.
        route: String,
        /// Placeholder occurrences in the route path.
        wanted: usize,
        /// Supplied parameters.
        got: usize,
    },

    /// A placeholder of the route path has no supplied value.
    #[error("route \"{route}\" wants parameter \"{param}\"")]
    MissingParam {
        /// The route name.
        route: String,
        /// The placeholder name without its leading colon.
        param: String,
    },

    /// The substituted URL could not be parsed again.
    #[error("can not parse route \"{url}\": {source}")]
    ReassemblyError {
        /// The reassembled URL string.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    // ── Template adapter ─────────────────────────────────────────────

    /// The flat parameter list cannot be split into key/value pairs.
    #[error("got {0} parameters, want even number")]
    OddParameterCount(usize),

    // ── Configuration ────────────────────────────────────────────────

    /// A configured route is not a valid URL reference.
    #[error("invalid route \"{name}\": {source}")]
    InvalidRoute {
        /// The route name.
        name: String,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// A configuration file or value is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// A convenience type alias for `Result<T, UrlGenError>`.
pub type UrlGenResult<T> = Result<T, UrlGenError>;

fn quoted_names(names: &[String]) -> String {
    if names.is_empty() {
        return "no routes registered".to_string();
    }
    format!("\"{}\"", names.join("\", \""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_lists_known_names() {
        let err = UrlGenError::UnknownRoute {
            name: "missing".into(),
            known: vec!["about".into(), "hello".into()],
        };
        assert_eq!(
            err.to_string(),
            r#"got route "missing", want "about", "hello""#
        );
    }

    #[test]
    fn test_unknown_route_empty_table() {
        let err = UrlGenError::UnknownRoute {
            name: "missing".into(),
            known: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            r#"got route "missing", want no routes registered"#
        );
    }

    #[test]
    fn test_arity_mismatch_display() {
        let err = UrlGenError::ArityMismatch {
            route: "article".into(),
            wanted: 2,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            r#"route "article" wants 2 parameter(s), got 1"#
        );
    }

    #[test]
    fn test_missing_param_display() {
        let err = UrlGenError::MissingParam {
            route: "article".into(),
            param: "slug".into(),
        };
        assert_eq!(err.to_string(), r#"route "article" wants parameter "slug""#);
    }

    #[test]
    fn test_odd_parameter_count_display() {
        assert_eq!(
            UrlGenError::OddParameterCount(3).to_string(),
            "got 3 parameters, want even number"
        );
    }

    #[test]
    fn test_reassembly_error_keeps_source() {
        use std::error::Error as _;

        let err = UrlGenError::ReassemblyError {
            url: "/%zz".into(),
            source: ParseError::InvalidEscape("%zz".into()),
        };
        assert!(err.to_string().contains("/%zz"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_error_from_url_error() {
        let err: ParseError = url::ParseError::EmptyHost.into();
        assert_eq!(err, ParseError::InvalidUrl(url::ParseError::EmptyHost));
    }
}
