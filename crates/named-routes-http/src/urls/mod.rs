//! Named routes and reverse path building.
//!
//! This module provides:
//!
//! - [`template`]: Route template segments and prefix joining
//! - [`registry`]: The shared name-to-template registry
//! - [`named_route`]: Parameter binding and path rendering
//! - [`router`]: Named registration on a router and its groups
//!
//! # Examples
//!
//! ```
//! use named_routes_http::backend::memory::MemoryBackend;
//! use named_routes_http::urls::router::Router;
//!
//! let mut router = Router::new(MemoryBackend::<&str>::new());
//! router.get("root", "/", ["home"]);
//! router.get("user", "/user/:id", ["user"]);
//!
//! let mut api = router.group("/api", []);
//! api.get("api-info", "/info", ["info"]);
//! let mut v1 = api.group("v1", []);
//! v1.post("v1-submit", "/submit", ["submit"]);
//!
//! assert_eq!(router.reverse("root").path().unwrap(), "/");
//! assert_eq!(router.reverse("user").with("id", "3").path().unwrap(), "/user/3");
//! assert_eq!(router.reverse("api-info").path().unwrap(), "/api/info");
//! assert_eq!(router.reverse("v1-submit").path().unwrap(), "/api/v1/submit");
//! ```

/// Generates one named-registration method per HTTP method, each forwarding
/// to `handle`.
macro_rules! method_shortcuts {
    ($($(#[$attr:meta])* $fn_name:ident => $method:expr;)*) => {
        $(
            $(#[$attr])*
            pub fn $fn_name<I>(&mut self, name: impl Into<String>, relative_path: &str, handlers: I)
            where
                I: IntoIterator<Item = B::Handler>,
            {
                self.handle($method, name, relative_path, handlers);
            }
        )*
    };
}

pub mod named_route;
pub mod registry;
pub mod router;
pub mod template;
