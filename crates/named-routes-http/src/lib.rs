//! # named-routes-http
//!
//! Named routes for HTTP routers. Register a route under a name, then rebuild
//! its concrete path later from the name and a set of parameter values.
//!
//! The router that actually dispatches requests sits behind the
//! [`RouteBackend`] trait; an [`axum`] implementation and an in-memory recorder
//! are included.
//!
//! ## Modules
//!
//! - [`method`] - The supported HTTP methods
//! - [`urls`] - Templates, the name registry, reverse building, routers and groups
//! - [`backend`] - The router seam and its implementations

pub mod backend;
pub mod method;
pub mod urls;

pub use backend::axum_backend::AxumBackend;
pub use backend::memory::MemoryBackend;
pub use backend::RouteBackend;
pub use method::Method;
pub use named_routes_core::{NamedRoutesError, NamedRoutesResult};
pub use urls::named_route::NamedRoute;
pub use urls::registry::RouteRegistry;
pub use urls::router::{Group, Router};
