//! Logging integration for urlgen.
//!
//! The library only emits [`tracing`] events; nothing is printed unless the
//! application installs a subscriber, for example with [`setup_logging`].

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug",
/// "urlgen_routes=trace"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used.
///
/// Does nothing if a global subscriber is already installed.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one URL generation call.
///
/// # Examples
///
/// ```
/// use urlgen_core::logging::route_span;
///
/// let span = route_span("hello");
/// let _guard = span.enter();
/// tracing::trace!("generating");
/// ```
pub fn route_span(route: &str) -> tracing::Span {
    tracing::trace_span!("url", route = route)
}
