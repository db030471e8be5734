//! Logging integration for named-routes.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for scoping route rendering.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "named_routes_http=trace"). In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used. Calling this more than once
/// leaves the first subscriber in place.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
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

/// Creates a tracing span for rendering a named route.
///
/// # Examples
///
/// ```
/// use named_routes_core::logging::route_span;
///
/// let span = route_span("user-detail");
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn route_span(name: &str) -> tracing::Span {
    tracing::info_span!("named_route", name = name)
}
