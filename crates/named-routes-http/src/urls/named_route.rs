//! Reverse path building from a named route.
//!
//! A [`NamedRoute`] is created by a reverse lookup, collects parameter bindings
//! through [`NamedRoute::with`], and renders the concrete path with
//! [`NamedRoute::path`]. Lookup never fails; every failure is reported when the
//! path is rendered.

use std::collections::BTreeMap;

use named_routes_core::{NamedRoutesError, NamedRoutesResult};
use url::Url;

use super::template::Segment;

/// A route name, the template it resolved to, and the parameters bound so far.
///
/// `with` takes the handle by value and returns it, so a handle can be cloned
/// and extended along different branches without the branches affecting each
/// other. Rendering borrows the handle and can be repeated.
///
/// # Examples
///
/// ```
/// use named_routes_http::urls::registry::RouteRegistry;
///
/// let registry = RouteRegistry::new();
/// registry.register("user-item", "/user/:id/item/:item");
///
/// let path = registry
///     .reverse("user-item")
///     .with("id", "3")
///     .with("item", "book")
///     .path()
///     .unwrap();
/// assert_eq!(path, "/user/3/item/book");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    name: String,
    template: String,
    params: BTreeMap<String, String>,
}

impl NamedRoute {
    /// Creates a handle for `name`. A missing template is stored as the empty
    /// string and reported as [`NamedRoutesError::NoRouteDefined`] on render.
    pub fn new(name: impl Into<String>, template: Option<String>) -> Self {
        Self {
            name: name.into(),
            template: template.unwrap_or_default(),
            params: BTreeMap::new(),
        }
    }

    /// Binds `value` to the parameter `key`. A repeated key replaces the
    /// earlier value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Binds every `(key, value)` pair from `params`.
    #[must_use]
    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The requested route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template resolved at lookup time, empty if the name was unknown.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The parameters bound so far.
    pub const fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Renders the absolute path by substituting every placeholder.
    ///
    /// Bound values are inserted verbatim, without escaping. The result always
    /// starts with a single `/` and empty template segments contribute nothing.
    ///
    /// # Errors
    ///
    /// - [`NamedRoutesError::NoRouteDefined`] if no template was registered under the name.
    /// - [`NamedRoutesError::RouteParameterNotSet`] for the first placeholder, in template
    ///   order, that has no binding.
    /// - [`NamedRoutesError::UnknownRouteParameter`] if a binding was not consumed by any
    ///   placeholder. The smallest such key is reported.
    pub fn path(&self) -> NamedRoutesResult<String> {
        let rendered = render(&self.name, &self.template, &self.params);
        if let Err(err) = &rendered {
            tracing::debug!(route = %self.name, error = %err, "failed to render named route");
        }
        rendered
    }

    /// Renders the path and joins it onto `base`, replacing the base's path.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`path`](Self::path), or
    /// [`NamedRoutesError::InvalidUrl`] if `base` cannot be joined with the path.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_routes_http::urls::named_route::NamedRoute;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://example.org/ignored").unwrap();
    /// let route = NamedRoute::new("user", Some("/user/:id".to_string())).with("id", "3");
    /// assert_eq!(route.url(&base).unwrap().as_str(), "https://example.org/user/3");
    /// ```
    pub fn url(&self, base: &Url) -> NamedRoutesResult<Url> {
        let path = self.path()?;
        base.join(&path).map_err(|e| {
            NamedRoutesError::InvalidUrl(format!("cannot join '{path}' onto '{base}': {e}"))
        })
    }
}

fn render(
    name: &str,
    template: &str,
    params: &BTreeMap<String, String>,
) -> NamedRoutesResult<String> {
    if template.is_empty() {
        return Err(NamedRoutesError::NoRouteDefined(name.to_string()));
    }

    // Bindings are consumed from a private copy so the handle stays reusable.
    let mut unused: BTreeMap<&str, &str> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let parts: Vec<&str> = template.split('/').collect();
    let last = parts.len() - 1;

    let mut path = String::with_capacity(template.len() + 16);
    path.push('/');

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }

        match Segment::parse(part) {
            Segment::Literal(text) => path.push_str(text),
            Segment::Param(param) | Segment::Wildcard(param) => {
                let value = unused
                    .remove(param)
                    .ok_or_else(|| NamedRoutesError::RouteParameterNotSet(param.to_string()))?;
                path.push_str(value);
            }
        }

        if i < last {
            path.push('/');
        }
    }

    if let Some(key) = unused.keys().next() {
        return Err(NamedRoutesError::UnknownRouteParameter((*key).to_string()));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(template: &str) -> NamedRoute {
        NamedRoute::new("test", Some(template.to_string()))
    }

    #[test]
    fn test_root_path() {
        assert_eq!(route("/").path().unwrap(), "/");
    }

    #[test]
    fn test_literal_paths_unchanged() {
        assert_eq!(route("/index").path().unwrap(), "/index");
        assert_eq!(route("/about/us").path().unwrap(), "/about/us");
    }

    #[test]
    fn test_argument_at_the_end() {
        assert_eq!(route("/user/:id").with("id", "3").path().unwrap(), "/user/3");
    }

    #[test]
    fn test_multiple_arguments() {
        let path = route("/user/:id/item/:item")
            .with("id", "3")
            .with("item", "book")
            .path()
            .unwrap();
        assert_eq!(path, "/user/3/item/book");
    }

    #[test]
    fn test_wildcard_keeps_slashes() {
        let path = route("/item/*splat").with("splat", "records/7").path().unwrap();
        assert_eq!(path, "/item/records/7");
    }

    #[test]
    fn test_no_route_defined() {
        let err = NamedRoute::new("unknown", None).path().unwrap_err();
        assert!(matches!(err, NamedRoutesError::NoRouteDefined(ref n) if n == "unknown"));
    }

    #[test]
    fn test_no_route_defined_ignores_bindings() {
        let err = NamedRoute::new("unknown", None)
            .with("id", "3")
            .path()
            .unwrap_err();
        assert!(matches!(err, NamedRoutesError::NoRouteDefined(_)));
    }

    #[test]
    fn test_parameter_not_set() {
        let err = route("/user/:id").path().unwrap_err();
        assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(ref p) if p == "id"));
    }

    #[test]
    fn test_first_missing_parameter_in_template_order() {
        let err = route("/user/:id/item/:item").path().unwrap_err();
        assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(ref p) if p == "id"));

        let err = route("/user/:id/item/:item")
            .with("id", "3")
            .path()
            .unwrap_err();
        assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(ref p) if p == "item"));
    }

    #[test]
    fn test_missing_parameter_wins_over_unused() {
        let err = route("/user/:id")
            .with("other", "x")
            .path()
            .unwrap_err();
        assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(ref p) if p == "id"));
    }

    #[test]
    fn test_unused_parameter() {
        let err = route("/user/:id")
            .with("id", "3")
            .with("item", "3")
            .path()
            .unwrap_err();
        assert!(matches!(err, NamedRoutesError::UnknownRouteParameter(ref p) if p == "item"));
    }

    #[test]
    fn test_unused_parameter_on_literal_route() {
        let err = route("/about/us").with("lang", "en").path().unwrap_err();
        assert!(matches!(err, NamedRoutesError::UnknownRouteParameter(ref p) if p == "lang"));
    }

    #[test]
    fn test_unused_parameter_reports_smallest_key() {
        let err = route("/")
            .with("zeta", "1")
            .with("alpha", "2")
            .path()
            .unwrap_err();
        assert!(matches!(err, NamedRoutesError::UnknownRouteParameter(ref p) if p == "alpha"));
    }

    #[test]
    fn test_repeated_key_last_write_wins() {
        let path = route("/user/:id")
            .with("id", "1")
            .with("id", "2")
            .path()
            .unwrap();
        assert_eq!(path, "/user/2");
    }

    #[test]
    fn test_render_is_repeatable() {
        let handle = route("/user/:id").with("id", "3");
        assert_eq!(handle.path().unwrap(), "/user/3");
        assert_eq!(handle.path().unwrap(), "/user/3");
        assert_eq!(handle.params().len(), 1);
    }

    #[test]
    fn test_branches_do_not_alias() {
        let base = route("/user/:id/item/:item").with("id", "3");
        let book = base.clone().with("item", "book");
        let pen = base.clone().with("item", "pen");

        assert_eq!(book.path().unwrap(), "/user/3/item/book");
        assert_eq!(pen.path().unwrap(), "/user/3/item/pen");
        assert!(base.path().is_err());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let path = route("/search/:q").with("q", "a b&c").path().unwrap();
        assert_eq!(path, "/search/a b&c");
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        assert_eq!(route("//a//b").path().unwrap(), "/a/b");
        assert_eq!(route("a/b").path().unwrap(), "/a/b");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        assert_eq!(route("/users/").path().unwrap(), "/users/");
        assert_eq!(route("/user/:id/").with("id", "3").path().unwrap(), "/user/3/");
    }

    #[test]
    fn test_with_params() {
        let path = route("/user/:id/item/:item")
            .with_params([("id", "3"), ("item", "book")])
            .path()
            .unwrap();
        assert_eq!(path, "/user/3/item/book");
    }

    #[test]
    fn test_accessors() {
        let handle = NamedRoute::new("user", Some("/user/:id".to_string())).with("id", "3");
        assert_eq!(handle.name(), "user");
        assert_eq!(handle.template(), "/user/:id");
        assert_eq!(handle.params().get("id").map(String::as_str), Some("3"));
        assert_eq!(NamedRoute::new("x", None).template(), "");
    }

    #[test]
    fn test_url_joins_onto_base() {
        let base = Url::parse("http://localhost:8080/app/").unwrap();
        let url = route("/item/*splat")
            .with("splat", "records/7")
            .url(&base)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/item/records/7");
    }

    #[test]
    fn test_url_propagates_render_error() {
        let base = Url::parse("https://example.org").unwrap();
        let err = route("/user/:id").url(&base).unwrap_err();
        assert!(matches!(err, NamedRoutesError::RouteParameterNotSet(_)));
    }

    #[test]
    fn test_url_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.org").unwrap();
        let err = route("/about").url(&base).unwrap_err();
        assert!(matches!(err, NamedRoutesError::InvalidUrl(_)));
    }
}
