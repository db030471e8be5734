//! A [`RouteBackend`] that builds an [`axum::Router`].
//!
//! Handlers are links in a chain: each receives the request and a [`Next`]
//! that runs the rest of the chain. Group handlers come first, so a group can
//! wrap every route beneath it. Route templates are translated to axum's path
//! syntax (`:id` becomes `{id}`, `*rest` becomes `{*rest}`).
//!
//! # Examples
//!
//! ```
//! use named_routes_http::backend::axum_backend::{endpoint, AxumBackend};
//! use named_routes_http::Router;
//!
//! let mut router = Router::new(AxumBackend::<()>::new());
//! router.get("user", "/user/:id", [endpoint(|_req| async { "user" })]);
//!
//! assert_eq!(router.reverse("user").with("id", "3").path().unwrap(), "/user/3");
//! let app: axum::Router = router.into_backend().into_router();
//! # drop(app);
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{on, MethodFilter};

use super::RouteBackend;
use crate::method::Method;
use crate::urls::template::{join_paths, Segment};

/// A boxed, sendable future resolving to a response.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// One link of a handler chain.
pub type ChainHandler = Arc<dyn Fn(Request, Next) -> BoxFuture + Send + Sync>;

/// The remainder of a handler chain.
#[derive(Clone)]
pub struct Next {
    chain: Arc<[ChainHandler]>,
    index: usize,
}

impl Next {
    fn start(chain: Arc<[ChainHandler]>) -> Self {
        Self { chain, index: 0 }
    }

    /// Runs the next handler. An exhausted chain answers `404 Not Found`.
    pub fn run(self, request: Request) -> BoxFuture {
        match self.chain.get(self.index).cloned() {
            Some(handler) => handler(
                request,
                Self {
                    chain: self.chain,
                    index: self.index + 1,
                },
            ),
            None => Box::pin(async { StatusCode::NOT_FOUND.into_response() }),
        }
    }

    /// Returns how many handlers are left to run.
    pub fn remaining(&self) -> usize {
        self.chain.len().saturating_sub(self.index)
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Wraps a function that may call [`Next::run`] into a chain link.
pub fn middleware<F, Fut>(f: F) -> ChainHandler
where
    F: Fn(Request, Next) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |request: Request, next: Next| -> BoxFuture { Box::pin(f(request, next)) })
}

/// Wraps a terminal request handler into a chain link. Handlers after it
/// never run.
pub fn endpoint<F, Fut, R>(f: F) -> ChainHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    Arc::new(move |request: Request, _next: Next| -> BoxFuture {
        let fut = f(request);
        Box::pin(async move { fut.await.into_response() })
    })
}

/// Translates a route template into axum's path syntax.
///
/// Literal braces are escaped and a leading `/` is added when missing.
///
/// # Examples
///
/// ```
/// use named_routes_http::backend::axum_backend::to_axum_path;
///
/// assert_eq!(to_axum_path("/user/:id/item/*splat"), "/user/{id}/item/{*splat}");
/// assert_eq!(to_axum_path("about"), "/about");
/// ```
pub fn to_axum_path(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    for (i, part) in template.split('/').enumerate() {
        if i > 0 {
            out.push('/');
        }
        match Segment::parse(part) {
            Segment::Literal(text) => out.push_str(&text.replace('{', "{{").replace('}', "}}")),
            Segment::Param(name) => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
            Segment::Wildcard(name) => {
                out.push_str("{*");
                out.push_str(name);
                out.push('}');
            }
        }
    }
    if !out.starts_with('/') {
        out.insert(0, '/');
    }
    out
}

const fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Patch => MethodFilter::PATCH,
        Method::Delete => MethodFilter::DELETE,
        Method::Head => MethodFilter::HEAD,
        Method::Options => MethodFilter::OPTIONS,
    }
}

/// Builds an [`axum::Router`] from chain-handler registrations.
///
/// Groups share the root router and register on it with their prefix
/// applied. Registering the same method and path twice makes axum panic, as it
/// does for direct `route` calls.
pub struct AxumBackend<S = ()> {
    router: Arc<Mutex<axum::Router<S>>>,
    base_path: String,
    handlers: Vec<ChainHandler>,
}

impl<S> AxumBackend<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates a backend around an empty router.
    pub fn new() -> Self {
        Self::from_router(axum::Router::new())
    }

    /// Creates a backend that adds routes to an existing router.
    pub fn from_router(router: axum::Router<S>) -> Self {
        Self {
            router: Arc::new(Mutex::new(router)),
            base_path: "/".to_string(),
            handlers: Vec::new(),
        }
    }

    /// The prefix this backend registers under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Takes the router built so far. Groups created from this backend keep
    /// registering on an empty router afterwards.
    pub fn into_router(self) -> axum::Router<S> {
        let mut router = self.router.lock().expect("axum router lock poisoned");
        std::mem::take(&mut *router)
    }

    fn chain(&self, handlers: Vec<ChainHandler>) -> Vec<ChainHandler> {
        self.handlers.iter().cloned().chain(handlers).collect()
    }
}

impl<S> Default for AxumBackend<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for AxumBackend<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxumBackend")
            .field("base_path", &self.base_path)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl<S> RouteBackend for AxumBackend<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Handler = ChainHandler;
    type Group = Self;

    fn handle(&mut self, method: Method, relative_path: &str, handlers: Vec<ChainHandler>) {
        let path = to_axum_path(&join_paths(&self.base_path, relative_path));
        let chain: Arc<[ChainHandler]> = self.chain(handlers).into();

        let method_router = on(method_filter(method), move |request: Request| {
            let chain = Arc::clone(&chain);
            async move { Next::start(chain).run(request).await }
        });

        let mut router = self.router.lock().expect("axum router lock poisoned");
        let current = std::mem::take(&mut *router);
        *router = current.route(&path, method_router);
    }

    fn group(&mut self, prefix: &str, handlers: Vec<ChainHandler>) -> Self {
        Self {
            router: Arc::clone(&self.router),
            base_path: join_paths(&self.base_path, prefix),
            handlers: self.chain(handlers),
        }
    }
}
