//! Core error types for named-routes.
//!
//! [`NamedRoutesError`] carries the three reverse-lookup failures produced when a
//! named route is rendered, plus the configuration and I/O errors raised while
//! loading settings. Every variant is data-carrying so callers can inspect the
//! offending route or parameter name instead of parsing a message.

use thiserror::Error;

/// The error type for the named-routes crates.
///
/// Registration never fails; only rendering a named route and loading
/// settings do.
///
/// # Examples
///
/// ```
/// use named_routes_core::NamedRoutesError;
///
/// let err = NamedRoutesError::RouteParameterNotSet("id".into());
/// assert_eq!(err.to_string(), "parameter in named route not set: id");
/// assert!(err.is_reverse_error());
/// ```
#[derive(Error, Debug)]
pub enum NamedRoutesError {
    // ── Reverse lookup ───────────────────────────────────────────────

    /// No template is registered under the requested route name.
    #[error("undefined route for {0}")]
    NoRouteDefined(String),

    /// A placeholder in the template has no binding.
    #[error("parameter in named route not set: {0}")]
    RouteParameterNotSet(String),

    /// A binding was supplied that no placeholder in the template consumed.
    #[error("parameter not used in the route: {0}")]
    UnknownRouteParameter(String),

    // ── URLs ─────────────────────────────────────────────────────────

    /// A base URL could not be parsed or joined with a rendered path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NamedRoutesError {
    /// Returns `true` for the errors produced by rendering a named route:
    /// [`NoRouteDefined`](Self::NoRouteDefined),
    /// [`RouteParameterNotSet`](Self::RouteParameterNotSet) and
    /// [`UnknownRouteParameter`](Self::UnknownRouteParameter).
    pub const fn is_reverse_error(&self) -> bool {
        matches!(
            self,
            Self::NoRouteDefined(_) | Self::RouteParameterNotSet(_) | Self::UnknownRouteParameter(_)
        )
    }

    /// Returns the route or parameter name carried by a reverse-lookup error.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::NoRouteDefined(name)
            | Self::RouteParameterNotSet(name)
            | Self::UnknownRouteParameter(name) => Some(name),
            Self::InvalidUrl(_) | Self::ConfigurationError(_) | Self::IoError(_) => None,
        }
    }
}

/// A convenience type alias for `Result<T, NamedRoutesError>`.
pub type NamedRoutesResult<T> = Result<T, NamedRoutesError>;
