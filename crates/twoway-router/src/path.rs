/// Path splitting, joining and optional normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
///
/// The router splits purely textually. `users//1/` becomes
/// `["users", "", "1", ""]` and will usually not match anything; callers
/// that accept sloppy input should run [`normalize`] first.

use std::borrow::Cow;

use crate::config::RouterConfig;
use crate::formatter::Segments;

/// Splits a path into segments on the configured separator
///
/// With `leading_separator` set, the path must start with the separator and
/// that one separator is stripped; `None` otherwise.
///
/// An empty body splits into **no** segments, so a route that formats nothing
/// (one built from [`end`](crate::end) alone) parses back from `""`, or from
/// the bare separator with `leading_separator`. The flip side: a lone
/// [`segment`](crate::segment) holding `""` formats to the same path and
/// cannot be told apart from it.
///
/// # Examples
///
/// ```
/// use twoway_router::{split, RouterConfig};
///
/// let config = RouterConfig::default();
/// assert_eq!(split("users/1", &config), Some(vec!["users", "1"]));
///
/// let config = RouterConfig::default().with_leading_separator(true);
/// assert_eq!(split("/users/1", &config), Some(vec!["users", "1"]));
/// assert_eq!(split("users/1", &config), None);
/// assert_eq!(split("/", &config), Some(vec![]));
/// ```
pub fn split<'a>(path: &'a str, config: &RouterConfig) -> Option<Vec<&'a str>> {
    let separator = config.separator.as_str();

    let body = if config.leading_separator {
        path.strip_prefix(separator)?
    } else {
        path
    };

    if body.is_empty() {
        return Some(Vec::new());
    }

    Some(body.split(separator).collect())
}

/// Joins formatted segments with the configured separator
///
/// # Examples
///
/// ```
/// use twoway_router::{join, RouterConfig, Segments};
///
/// let mut segments = Segments::new();
/// segments.push("users");
/// segments.push("1");
///
/// assert_eq!(join(&segments, &RouterConfig::default()), "users/1");
/// assert_eq!(
///     join(&segments, &RouterConfig::default().with_leading_separator(true)),
///     "/users/1"
/// );
/// ```
pub fn join(segments: &Segments, config: &RouterConfig) -> String {
    let body = segments.join(&config.separator);

    if config.leading_separator {
        format!("{}{}", config.separator, body)
    } else {
        body
    }
}

/// Checks whether a path has no empty segments
///
/// **Pure function**: No side effects, deterministic output.
///
/// # Rules
///
/// - Must not be empty
/// - Must not contain a doubled separator
/// - Must not end with the separator
/// - May start with the separator (it is left to [`RouterConfig::leading_separator`])
///
/// # Examples
///
/// ```
/// use twoway_router::is_canonical;
///
/// assert!(is_canonical("users/1", "/"));
/// assert!(is_canonical("/users/1", "/"));
///
/// assert!(!is_canonical("", "/"));
/// assert!(!is_canonical("users/1/", "/"));
/// assert!(!is_canonical("users//1", "/"));
/// ```
pub fn is_canonical(path: &str, separator: &str) -> bool {
    // Empty check (short-circuit)
    if path.is_empty() || separator.is_empty() {
        return false;
    }

    let body = path.strip_prefix(separator).unwrap_or(path);

    !body.is_empty() && body.split(separator).all(|segment| !segment.is_empty())
}

/// Removes empty segments from a path
///
/// **Pure function** with zero-copy optimization using `Cow<'_, str>`.
///
/// Returns `Cow::Borrowed` when input is already canonical (zero allocations).
/// Returns `Cow::Owned` when normalization needed (single allocation).
/// A leading separator is kept if present.
///
/// # Examples
///
/// ```
/// use twoway_router::normalize;
/// use std::borrow::Cow;
///
/// // Canonical paths: zero allocations (Cow::Borrowed)
/// assert!(matches!(normalize("users/1", "/"), Cow::Borrowed("users/1")));
///
/// assert_eq!(normalize("users/1/", "/"), "users/1");
/// assert_eq!(normalize("users//1", "/"), "users/1");
/// assert_eq!(normalize("//users///1//", "/"), "/users/1");
/// ```
pub fn normalize<'a>(path: &'a str, separator: &str) -> Cow<'a, str> {
    // Fast path: if already canonical, return borrowed (zero-copy!)
    if separator.is_empty() || is_canonical(path, separator) {
        return Cow::Borrowed(path);
    }

    // Slow path: split → filter → join pipeline
    let normalized = path
        .split(separator)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator);

    if path.starts_with(separator) {
        Cow::Owned(format!("{}{}", separator, normalized))
    } else {
        Cow::Owned(normalized)
    }
}
