//! # named-routes
//!
//! Give HTTP routes symbolic names and rebuild their concrete paths from the
//! name plus parameter values.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//!
//! ```
//! use named_routes::prelude::*;
//!
//! let mut router = Router::new(MemoryBackend::<&str>::new());
//! router.get("user", "/user/:id", ["show_user"]);
//!
//! let mut api = router.group("/api", []);
//! let mut v1 = api.group("v1", []);
//! v1.post("v1-submit", "/submit", ["submit"]);
//!
//! assert_eq!(router.reverse("user").with("id", "3").path().unwrap(), "/user/3");
//! assert_eq!(router.reverse("v1-submit").path().unwrap(), "/api/v1/submit");
//! assert!(matches!(
//!     router.reverse("nope").path(),
//!     Err(NamedRoutesError::NoRouteDefined(_))
//! ));
//! ```

/// Error taxonomy, settings, and logging setup.
pub use named_routes_core as core;

/// Routers, groups, the name registry, and reverse path building.
pub use named_routes_http as http;

// Third-party re-exports for user convenience
pub use axum;
pub use tracing;
pub use url;

/// The types most applications need.
pub mod prelude {
    pub use named_routes_core::{NamedRoutesError, NamedRoutesResult, Settings};
    pub use named_routes_http::backend::axum_backend::{endpoint, middleware, Next};
    pub use named_routes_http::{
        AxumBackend, Group, MemoryBackend, Method, NamedRoute, RouteBackend, RouteRegistry, Router,
    };
}
