//! The shared route-name registry.
//!
//! A [`RouteRegistry`] maps route names to absolute route templates. One
//! registry belongs to one [`Router`](super::router::Router) and is shared by
//! every group created from it; clones are handles onto the same map.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, RwLock};

use super::named_route::NamedRoute;

/// A shared, thread-safe mapping from route name to route template.
///
/// Registering a name twice replaces the earlier template; there is no removal.
///
/// # Examples
///
/// ```
/// use named_routes_http::urls::registry::RouteRegistry;
///
/// let registry = RouteRegistry::new();
/// let shared = registry.clone();
///
/// shared.register("user", "/user/:id");
/// assert_eq!(registry.template("user").as_deref(), Some("/user/:id"));
/// ```
#[derive(Clone, Default)]
pub struct RouteRegistry {
    names: Arc<RwLock<HashMap<String, String>>>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `template` under `name`, replacing any previous template.
    pub fn register(&self, name: impl Into<String>, template: impl Into<String>) {
        let name = name.into();
        let template = template.into();
        let mut names = self.names.write().expect("route registry lock poisoned");
        if let Some(previous) = names.get(&name) {
            if *previous != template {
                tracing::debug!(
                    route = %name,
                    previous = %previous,
                    template = %template,
                    "replacing named route"
                );
            }
        }
        names.insert(name, template);
    }

    /// Returns the template registered under `name`.
    pub fn template(&self, name: &str) -> Option<String> {
        self.names
            .read()
            .expect("route registry lock poisoned")
            .get(name)
            .cloned()
    }

    /// Returns `true` if a template is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names
            .read()
            .expect("route registry lock poisoned")
            .contains_key(name)
    }

    /// Returns the number of registered names.
    pub fn len(&self) -> usize {
        self.names.read().expect("route registry lock poisoned").len()
    }

    /// Returns `true` if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .read()
            .expect("route registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Returns an ordered copy of the whole mapping.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.names
            .read()
            .expect("route registry lock poisoned")
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Starts a reverse lookup for `name`.
    ///
    /// The current template is copied into the returned handle, so later
    /// registrations do not affect it. An unknown name is reported when the
    /// handle is rendered.
    pub fn reverse(&self, name: &str) -> NamedRoute {
        let template = self.template(name);
        tracing::trace!(route = %name, found = template.is_some(), "reverse lookup");
        NamedRoute::new(name, template)
    }

    /// Returns `true` if both handles refer to the same underlying map.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.names, &other.names)
    }
}

impl fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.snapshot()).finish()
    }
}
