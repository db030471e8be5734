//! An in-memory backend that records registrations.

use std::fmt;
use std::sync::{Arc, Mutex};

use super::RouteBackend;
use crate::method::Method;
use crate::urls::template::join_paths;

/// One registration received by a [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration<H> {
    /// The method the handlers were registered for.
    pub method: Method,
    /// The absolute path, with group prefixes applied.
    pub path: String,
    /// Inherited group handlers followed by the route's own handlers.
    pub handlers: Vec<H>,
}

/// A [`RouteBackend`] that keeps every registration in a shared list.
///
/// Groups created from a backend append to the same list.
///
/// # Examples
///
/// ```
/// use named_routes_http::backend::memory::MemoryBackend;
/// use named_routes_http::backend::RouteBackend;
/// use named_routes_http::Method;
///
/// let mut backend = MemoryBackend::new();
/// let mut api = backend.group("/api", vec!["auth"]);
/// api.handle(Method::Get, "/info", vec!["info"]);
///
/// let recorded = backend.find(Method::Get, "/api/info").unwrap();
/// assert_eq!(recorded.handlers, vec!["auth", "info"]);
/// ```
pub struct MemoryBackend<H> {
    records: Arc<Mutex<Vec<Registration<H>>>>,
    base_path: String,
    handlers: Vec<H>,
}

impl<H> MemoryBackend<H> {
    /// Creates an empty backend rooted at `/`.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            base_path: "/".to_string(),
            handlers: Vec::new(),
        }
    }

    /// The prefix this backend registers under.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the number of registrations recorded so far.
    pub fn len(&self) -> usize {
        self.records.lock().expect("memory backend lock poisoned").len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: Clone> MemoryBackend<H> {
    /// Returns a copy of every registration, in registration order.
    pub fn registrations(&self) -> Vec<Registration<H>> {
        self.records
            .lock()
            .expect("memory backend lock poisoned")
            .clone()
    }

    /// Returns the most recent registration for `method` at `path`.
    pub fn find(&self, method: Method, path: &str) -> Option<Registration<H>> {
        self.records
            .lock()
            .expect("memory backend lock poisoned")
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .cloned()
    }

    fn chain(&self, handlers: Vec<H>) -> Vec<H> {
        let mut chain = self.handlers.clone();
        chain.extend(handlers);
        chain
    }
}

impl<H> Default for MemoryBackend<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for MemoryBackend<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBackend")
            .field("base_path", &self.base_path)
            .field("registrations", &self.len())
            .finish_non_exhaustive()
    }
}

impl<H: Clone> RouteBackend for MemoryBackend<H> {
    type Handler = H;
    type Group = Self;

    fn handle(&mut self, method: Method, relative_path: &str, handlers: Vec<H>) {
        let registration = Registration {
            method,
            path: join_paths(&self.base_path, relative_path),
            handlers: self.chain(handlers),
        };
        self.records
            .lock()
            .expect("memory backend lock poisoned")
            .push(registration);
    }

    fn group(&mut self, prefix: &str, handlers: Vec<H>) -> Self {
        Self {
            records: Arc::clone(&self.records),
            base_path: join_paths(&self.base_path, prefix),
            handlers: self.chain(handlers),
        }
    }
}
