// File: src/router.rs
// Purpose: Ordered set of whole-route matches resolving paths to locations

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::RouterConfig;
use crate::error::Result;
use crate::formatter::{Formatter, Segments};
use crate::matcher::Match;
use crate::parser::{one_of, Parser, Tokens};
use crate::path;

/// A closed set of locations an application can route to
///
/// Implement it on the enum that names every page. The `NotFound` variant
/// is what [`Router::parse`] returns when no route matches.
pub trait Location: Sized + 'static {
    /// The sentinel for paths no route accepts
    fn not_found() -> Self;
}

type ProjectFn<L> = dyn Fn(&mut Segments, &L) -> bool + Send + Sync;

/// One registered route: a named parser plus a partial formatter
struct Entry<L> {
    name: String,
    parser: Parser<L>,
    /// Writes the location and returns true iff this route owns it
    format: Arc<ProjectFn<L>>,
}

impl<L> Clone for Entry<L> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            parser: self.parser.clone(),
            format: Arc::clone(&self.format),
        }
    }
}

/// Resolves paths to locations and locations back to paths
///
/// Routes are tried in registration order and the **first** route whose
/// parser succeeds wins; there is no search for a longer match. Register
/// specific routes before general routes that are textual prefixes of them:
/// `users/:id/invoice/:id` before `users/:id`.
///
/// A router is immutable once built and can be shared across threads.
///
/// # Examples
///
/// ```
/// use twoway_router::{end, int, lit, Location, Router, RouterConfig};
///
/// # fn main() -> twoway_router::Result<()> {
/// #[derive(Debug, PartialEq)]
/// enum Page {
///     Home,
///     User(i64),
///     NotFound,
/// }
///
/// impl Location for Page {
///     fn not_found() -> Self {
///         Page::NotFound
///     }
/// }
///
/// let router = Router::builder()
///     .with_config(RouterConfig::default().with_leading_separator(true))
///     .route(
///         "home",
///         lit("home").skip(end()),
///         |()| Page::Home,
///         |page: &Page| matches!(page, Page::Home).then_some(()),
///     )
///     .route(
///         "user",
///         lit("users").and(int()).skip(end()),
///         Page::User,
///         |page: &Page| match page {
///             Page::User(id) => Some(*id),
///             _ => None,
///         },
///     )
///     .build()?;
///
/// assert_eq!(router.parse("/home"), Page::Home);
/// assert_eq!(router.parse("/users/1"), Page::User(1));
/// assert_eq!(router.parse("/user/1"), Page::NotFound);
/// assert_eq!(router.format(&Page::User(1)).as_deref(), Some("/users/1"));
/// assert_eq!(router.format(&Page::NotFound), None);
/// # Ok(())
/// # }
/// ```
pub struct Router<L> {
    routes: Vec<Entry<L>>,
    config: RouterConfig,
}

impl<L> Clone for Router<L> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            config: self.config.clone(),
        }
    }
}

impl<L> fmt::Debug for Router<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.route_names().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<L: Location> Router<L> {
    /// Starts an empty router with the default configuration
    pub fn builder() -> RouterBuilder<L> {
        RouterBuilder::new()
    }

    /// Resolves a path to a location
    ///
    /// Returns [`Location::not_found`] when the path cannot be split under
    /// the configured separator rules, when no route matches, or when the
    /// first matching route leaves segments unconsumed.
    pub fn parse(&self, path: &str) -> L {
        match path::split(path, &self.config) {
            Some(tokens) => self.parse_tokens(&tokens),
            None => {
                debug!(path, "path rejected by separator rules");
                L::not_found()
            }
        }
    }

    /// Resolves already split segments to a location
    ///
    /// Only the first route whose parser succeeds is considered. If it leaves
    /// segments over, the result is `NotFound` and later routes are not tried.
    pub fn parse_tokens(&self, tokens: Tokens<'_>) -> L {
        let matched = self.routes.iter().find_map(|entry| {
            entry
                .parser
                .run(tokens)
                .map(|(location, rest)| (entry.name.as_str(), location, rest))
        });

        match matched {
            Some((route, location, [])) => {
                debug!(route, segments = tokens.len(), "route matched");
                location
            }
            Some((route, _, rest)) => {
                debug!(route, trailing = rest.len(), "route matched with trailing segments");
                L::not_found()
            }
            None => {
                debug!(segments = tokens.len(), "no route matched");
                L::not_found()
            }
        }
    }

    /// Formats a location into a path
    ///
    /// Returns `None` for a location no route owns, typically `NotFound`.
    pub fn format(&self, location: &L) -> Option<String> {
        self.format_segments(location)
            .map(|segments| path::join(&segments, &self.config))
    }

    /// Formats a location into segments, without joining them
    pub fn format_segments(&self, location: &L) -> Option<Segments> {
        let mut segments = Segments::new();

        let route = self
            .routes
            .iter()
            .find(|entry| (entry.format)(&mut segments, location))?;

        trace!(route = route.name.as_str(), segments = segments.len(), "location formatted");
        Some(segments)
    }

    /// All route parsers folded into one ordered alternative
    ///
    /// Unlike [`Router::parse`], the result does not require the input to be
    /// fully consumed; use routes ending in [`end`](crate::end) for that.
    pub fn parser(&self) -> Parser<L> {
        one_of(self.routes.iter().map(|entry| entry.parser.clone()))
    }
}

impl<L> Router<L> {
    /// Route names in precedence order
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Immutable builder API for [`Router`]
///
/// Each [`RouterBuilder::route`] call appends a route with lower precedence
/// than every route added before it.
pub struct RouterBuilder<L> {
    routes: Vec<Entry<L>>,
    config: RouterConfig,
}

impl<L: Location> Default for RouterBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Location> RouterBuilder<L> {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            config: RouterConfig::default(),
        }
    }

    /// Replaces the split/join configuration
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a route
    ///
    /// - `name`: used in logs and [`Router::route_names`]
    /// - `matcher`: the whole-route match, usually ending in [`end`](crate::end)
    /// - `inject`: wraps a parsed value into its location variant
    /// - `project`: unwraps that variant again, `None` for every other variant
    ///
    /// `project(&inject(a))` must be `Some(a)`, the same obligation as for
    /// [`Match::imap`].
    pub fn route<A, I, P>(
        mut self,
        name: impl Into<String>,
        matcher: Match<A>,
        inject: I,
        project: P,
    ) -> Self
    where
        A: 'static,
        I: Fn(A) -> L + Send + Sync + 'static,
        P: Fn(&L) -> Option<A> + Send + Sync + 'static,
    {
        let (parser, formatter): (Parser<A>, Formatter<A>) = matcher.into_parts();

        self.routes.push(Entry {
            name: name.into(),
            parser: parser.map(inject),
            format: Arc::new(move |out: &mut Segments, location: &L| match project(location) {
                Some(a) => {
                    formatter.write(out, &a);
                    true
                }
                None => false,
            }),
        });
        self
    }

    /// Finishes the router
    ///
    /// Fails with [`Error::EmptySeparator`](crate::Error::EmptySeparator)
    /// when the separator is empty, since joined paths could not be split
    /// back apart.
    pub fn build(self) -> Result<Router<L>> {
        self.config.validate()?;

        debug!(routes = self.routes.len(), separator = %self.config.separator, "router built");

        Ok(Router {
            routes: self.routes,
            config: self.config,
        })
    }
}
