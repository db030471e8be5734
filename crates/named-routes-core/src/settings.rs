//! Settings for named-routes.
//!
//! [`Settings`] holds the handful of knobs the routing layer reads: debug mode
//! and log level for [`logging`](crate::logging), and the optional base URL used
//! when rendering absolute URLs from named routes.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NamedRoutesError, NamedRoutesResult};

/// The complete set of settings, with sensible defaults.
///
/// # Examples
///
/// ```
/// use named_routes_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// assert!(settings.base_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Whether debug mode is enabled. Selects human-readable log output.
    pub debug: bool,
    /// The log level filter directive (e.g. `"info"`, `"named_routes_http=debug"`).
    pub log_level: String,
    /// Scheme and authority that rendered paths are joined onto, e.g.
    /// `"https://example.org"`.
    pub base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            base_url: None,
        }
    }
}

impl Settings {
    /// Parses the configured base URL.
    ///
    /// Returns `Ok(None)` when no base URL is configured.
    ///
    /// # Errors
    ///
    /// Returns [`NamedRoutesError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn base_url(&self) -> NamedRoutesResult<Option<Url>> {
        self.base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw)
                    .map_err(|e| NamedRoutesError::InvalidUrl(format!("base URL '{raw}': {e}")))
            })
            .transpose()
    }
}
