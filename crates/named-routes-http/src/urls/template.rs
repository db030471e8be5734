//! Route template segments and path composition.
//!
//! A route template such as `/user/:id/files/*path` is a `/`-delimited list of
//! segments. Each segment is a literal, a named parameter (`:name`, one path
//! segment) or a wildcard parameter (`*name`, the remainder of the path).
//! Templates are not validated here: the underlying router owns that.

/// One `/`-delimited segment of a route template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Verbatim text.
    Literal(&'a str),
    /// A `:name` placeholder.
    Param(&'a str),
    /// A `*name` placeholder.
    Wildcard(&'a str),
}

impl<'a> Segment<'a> {
    /// Classifies a single segment by its first character.
    ///
    /// # Examples
    ///
    /// ```
    /// use named_routes_http::urls::template::Segment;
    ///
    /// assert_eq!(Segment::parse("users"), Segment::Literal("users"));
    /// assert_eq!(Segment::parse(":id"), Segment::Param("id"));
    /// assert_eq!(Segment::parse("*rest"), Segment::Wildcard("rest"));
    /// ```
    pub fn parse(segment: &'a str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            Self::Param(name)
        } else if let Some(name) = segment.strip_prefix('*') {
            Self::Wildcard(name)
        } else {
            Self::Literal(segment)
        }
    }

    /// Returns the parameter name for placeholder segments.
    pub const fn param_name(&self) -> Option<&'a str> {
        match self {
            Self::Param(name) | Self::Wildcard(name) => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// Iterates over the non-empty segments of `template`, in order.
pub fn segments(template: &str) -> impl Iterator<Item = Segment<'_>> {
    template
        .split('/')
        .filter(|part| !part.is_empty())
        .map(Segment::parse)
}

/// Returns the placeholder names of `template` in template order.
///
/// # Examples
///
/// ```
/// use named_routes_http::urls::template::parameter_names;
///
/// assert_eq!(parameter_names("/user/:id/item/*splat"), vec!["id", "splat"]);
/// assert!(parameter_names("/about/us").is_empty());
/// ```
pub fn parameter_names(template: &str) -> Vec<&str> {
    segments(template).filter_map(|s| s.param_name()).collect()
}

/// Joins a group base path with a path relative to it.
///
/// An empty `relative` yields `base` unchanged. Otherwise the two are joined
/// with `/` and lexically cleaned (duplicate slashes collapsed, `.` removed,
/// `..` resolved). A trailing slash on `relative` is kept.
///
/// # Examples
///
/// ```
/// use named_routes_http::urls::template::join_paths;
///
/// assert_eq!(join_paths("/api", "v1"), "/api/v1");
/// assert_eq!(join_paths("/api/v1", "/submit"), "/api/v1/submit");
/// assert_eq!(join_paths("/api", "/users/"), "/api/users/");
/// assert_eq!(join_paths("/api", ""), "/api");
/// ```
pub fn join_paths(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }

    let joined = if base.is_empty() {
        relative.to_string()
    } else {
        format!("{base}/{relative}")
    };

    let mut cleaned = clean_path(&joined);
    if relative.ends_with('/') && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}

/// Returns the shortest lexically equivalent form of `path`.
///
/// Rooted paths stay rooted and `..` never climbs above the root. An empty
/// result is returned as `"."` for relative paths and `"/"` for rooted ones.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if stack.last().is_some_and(|last| *last != "..") {
                    stack.pop();
                } else if !rooted {
                    stack.push("..");
                }
            }
            other => stack.push(other),
        }
    }

    let body = stack.join("/");
    match (rooted, body.is_empty()) {
        (true, _) => format!("/{body}"),
        (false, true) => ".".to_string(),
        (false, false) => body,
    }
}
