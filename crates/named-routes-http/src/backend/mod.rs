//! The seam between named registration and the HTTP router that dispatches
//! requests.
//!
//! A [`RouteBackend`] receives every `(method, path, handlers)` registration
//! and every group creation. It never sees route names; those stay in the
//! [`RouteRegistry`](crate::urls::registry::RouteRegistry).
//!
//! Two backends are provided:
//!
//! - [`memory::MemoryBackend`]: records registrations, for tests and tooling.
//! - [`axum_backend::AxumBackend`]: builds an [`axum::Router`].

pub mod axum_backend;
pub mod memory;

use crate::method::Method;

/// An HTTP router that named routes are registered against.
///
/// Handlers are opaque to the named-routes layer and passed through unchanged.
pub trait RouteBackend {
    /// The handler type this router dispatches to.
    type Handler;

    /// The router scoped under a group prefix.
    type Group: RouteBackend<Handler = Self::Handler>;

    /// Registers `handlers` for `method` at `relative_path`, relative to this
    /// router's own prefix.
    fn handle(&mut self, method: Method, relative_path: &str, handlers: Vec<Self::Handler>);

    /// Creates a router scoped under `prefix`. The group's `handlers` run
    /// before the handlers of every route registered through it.
    fn group(&mut self, prefix: &str, handlers: Vec<Self::Handler>) -> Self::Group;
}
