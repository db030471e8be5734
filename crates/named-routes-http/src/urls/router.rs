//! Named registration on a router and its groups.
//!
//! [`Router`] wraps a [`RouteBackend`] and records the template of every named
//! registration in a [`RouteRegistry`]. [`Group`] does the same under a path
//! prefix, writing the absolute template into the router's registry while the
//! backend receives the path relative to the group.

use std::fmt;

use super::named_route::NamedRoute;
use super::registry::RouteRegistry;
use super::template::join_paths;
use crate::backend::RouteBackend;
use crate::method::Method;

/// A router that remembers route names.
///
/// # Examples
///
/// ```
/// use named_routes_http::backend::memory::MemoryBackend;
/// use named_routes_http::urls::router::Router;
///
/// let mut router = Router::new(MemoryBackend::new());
/// router.get("item-splat", "/item/*splat", ["item"]);
///
/// let path = router.reverse("item-splat").with("splat", "records/7").path().unwrap();
/// assert_eq!(path, "/item/records/7");
/// ```
pub struct Router<B> {
    backend: B,
    registry: RouteRegistry,
}

impl<B: RouteBackend> Router<B> {
    /// Creates a router with its own, empty registry.
    pub fn new(backend: B) -> Self {
        Self::with_registry(backend, RouteRegistry::new())
    }

    /// Creates a router that records names in `registry`.
    pub const fn with_registry(backend: B, registry: RouteRegistry) -> Self {
        Self { backend, registry }
    }

    /// Registers `handlers` for `method` at `relative_path` and stores the
    /// path under `name`, replacing any earlier route of that name.
    pub fn handle<I>(&mut self, method: Method, name: impl Into<String>, relative_path: &str, handlers: I)
    where
        I: IntoIterator<Item = B::Handler>,
    {
        let name = name.into();
        tracing::debug!(route = %name, %method, template = %relative_path, "registering named route");
        self.registry.register(name, relative_path);
        self.backend
            .handle(method, relative_path, handlers.into_iter().collect());
    }

    method_shortcuts! {
        /// Registers a named `GET` route.
        get => Method::Get;
        /// Registers a named `POST` route.
        post => Method::Post;
        /// Registers a named `PUT` route.
        put => Method::Put;
        /// Registers a named `PATCH` route.
        patch => Method::Patch;
        /// Registers a named `DELETE` route.
        delete => Method::Delete;
        /// Registers a named `HEAD` route.
        head => Method::Head;
        /// Registers a named `OPTIONS` route.
        options => Method::Options;
    }

    /// Creates a group under `prefix` sharing this router's registry.
    pub fn group<I>(&mut self, prefix: &str, handlers: I) -> Group<B::Group>
    where
        I: IntoIterator<Item = B::Handler>,
    {
        let base_path = join_paths("/", prefix);
        tracing::debug!(prefix = %prefix, base_path = %base_path, "creating route group");
        let backend = self.backend.group(prefix, handlers.into_iter().collect());
        Group {
            backend,
            registry: self.registry.clone(),
            base_path,
        }
    }

    /// Starts a reverse lookup for `name`. See [`RouteRegistry::reverse`].
    pub fn reverse(&self, name: &str) -> NamedRoute {
        self.registry.reverse(name)
    }

    /// The registry shared by this router and its groups.
    pub const fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The wrapped backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The wrapped backend, mutably. Routes registered here directly are not named.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwraps the backend. Existing [`Group`]s and registry handles stay usable.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B> fmt::Debug for Router<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// A prefix-scoped registration context created from a [`Router`] or another
/// group.
///
/// Names registered through a group are stored with the group's base path
/// applied, so reverse lookups always produce absolute paths.
pub struct Group<B> {
    backend: B,
    registry: RouteRegistry,
    base_path: String,
}

impl<B: RouteBackend> Group<B> {
    /// Registers `handlers` for `method` at `relative_path` within this group
    /// and stores the absolute template under `name`.
    pub fn handle<I>(&mut self, method: Method, name: impl Into<String>, relative_path: &str, handlers: I)
    where
        I: IntoIterator<Item = B::Handler>,
    {
        let name = name.into();
        let template = join_paths(&self.base_path, relative_path);
        tracing::debug!(route = %name, %method, template = %template, "registering named route");
        self.registry.register(name, template);
        self.backend
            .handle(method, relative_path, handlers.into_iter().collect());
    }

    method_shortcuts! {
        /// Registers a named `GET` route in this group.
        get => Method::Get;
        /// Registers a named `POST` route in this group.
        post => Method::Post;
        /// Registers a named `PUT` route in this group.
        put => Method::Put;
        /// Registers a named `PATCH` route in this group.
        patch => Method::Patch;
        /// Registers a named `DELETE` route in this group.
        delete => Method::Delete;
        /// Registers a named `HEAD` route in this group.
        head => Method::Head;
        /// Registers a named `OPTIONS` route in this group.
        options => Method::Options;
    }

    /// Creates a nested group whose base path is this group's base path
    /// joined with `prefix`.
    pub fn group<I>(&mut self, prefix: &str, handlers: I) -> Group<B::Group>
    where
        I: IntoIterator<Item = B::Handler>,
    {
        let base_path = join_paths(&self.base_path, prefix);
        tracing::debug!(prefix = %prefix, base_path = %base_path, "creating route group");
        let backend = self.backend.group(prefix, handlers.into_iter().collect());
        Group {
            backend,
            registry: self.registry.clone(),
            base_path,
        }
    }

    /// The absolute prefix applied to routes registered in this group.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Starts a reverse lookup for `name` in the shared registry.
    pub fn reverse(&self, name: &str) -> NamedRoute {
        self.registry.reverse(name)
    }

    /// The registry shared with the owning router.
    pub const fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The backend scoped to this group.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend scoped to this group, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B> fmt::Debug for Group<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}
