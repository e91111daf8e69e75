/// Formatters that write values back out as path segments
///
/// A [`Formatter<A>`] is the mirror image of a [`Parser<A>`](crate::Parser):
/// it takes the segments written so far plus a value, and appends the
/// segments that represent the value. Formatting never fails.

use std::fmt;
use std::sync::Arc;

/// Append-only list of formatted path segments
///
/// Formatters only get [`Segments::push`], so earlier segments can never be
/// removed or reordered.
///
/// # Examples
///
/// ```
/// use twoway_router::Segments;
///
/// let mut out = Segments::new();
/// out.push("users");
/// out.push(1.to_string());
///
/// assert_eq!(out.join("/"), "users/1");
/// assert_eq!(out.as_tokens(), vec!["users", "1"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments(Vec<String>);

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one segment at the end
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Borrows the segments as parser input
    ///
    /// Allocates a fresh `Vec<&str>` on every call; hold on to it when
    /// parsing the same segments repeatedly.
    pub fn as_tokens(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Joins the segments with `separator`
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Segments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type FormatFn<A> = dyn Fn(&mut Segments, &A) + Send + Sync;

/// A composable writer of values into path segments
///
/// # Examples
///
/// ```
/// use twoway_router::{Formatter, Segments};
///
/// let id = Formatter::new(|out, n: &i64| out.push(n.to_string()));
/// let users = Formatter::new(|out, _: &()| out.push("users"));
///
/// let route = users.then(id);
/// assert_eq!(route.run(Segments::new(), &((), 7)).join("/"), "users/7");
/// ```
pub struct Formatter<A> {
    write: Arc<FormatFn<A>>,
}

impl<A> Clone for Formatter<A> {
    fn clone(&self) -> Self {
        Self {
            write: Arc::clone(&self.write),
        }
    }
}

impl<A> fmt::Debug for Formatter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("input", &std::any::type_name::<A>())
            .finish()
    }
}

impl<A: 'static> Formatter<A> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Segments, &A) + Send + Sync + 'static,
    {
        Self { write: Arc::new(f) }
    }

    /// Formats `a` after the segments already in `segments`
    pub fn run(&self, mut segments: Segments, a: &A) -> Segments {
        self.write(&mut segments, a);
        segments
    }

    /// Formats `a` in place
    pub fn write(&self, segments: &mut Segments, a: &A) {
        (self.write)(segments, a)
    }

    /// Appends nothing
    pub fn empty() -> Self {
        Self::new(|_, _| {})
    }

    /// Formats the first component with `self`, then the second with `that`
    ///
    /// Must mirror the order in which the paired parser consumes segments.
    pub fn then<B: 'static>(self, that: Formatter<B>) -> Formatter<(A, B)> {
        Formatter::new(move |out, (a, b): &(A, B)| {
            self.write(out, a);
            that.write(out, b);
        })
    }

    /// Adapts the formatter to another value type by converting before writing
    pub fn contramap<B, F>(self, f: F) -> Formatter<B>
    where
        B: 'static,
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        Formatter::new(move |out, b: &B| self.write(out, &f(b)))
    }
}
