/// Parsers over path segments
///
/// A [`Parser<A>`] is a pure function from the remaining segments to either
/// nothing (no match) or a value plus the segments it left unconsumed.
///
/// All combinators are **pure**: they build new parsers and never mutate the
/// ones they were given. Parsers are cheap to clone (`Arc` inside) and can be
/// shared between threads.

use std::fmt;
use std::sync::Arc;

/// Remaining input of a parser: the not-yet-consumed suffix of a split path.
///
/// `"users/1/invoice/42"` is represented as `&["users", "1", "invoice", "42"]`.
pub type Tokens<'a> = &'a [&'a str];

type ParseFn<A> = dyn for<'a> Fn(Tokens<'a>) -> Option<(A, Tokens<'a>)> + Send + Sync;

/// A composable, possibly failing consumer of path segments
///
/// # Examples
///
/// ```
/// use twoway_router::Parser;
///
/// // Consumes one segment and yields its length
/// let len = Parser::new(|input| {
///     let (first, rest) = input.split_first()?;
///     Some((first.len(), rest))
/// });
///
/// assert_eq!(len.run(&["users", "1"]), Some((5, &["1"][..])));
/// assert_eq!(len.run(&[]), None);
/// ```
pub struct Parser<A> {
    run: Arc<ParseFn<A>>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<A> fmt::Debug for Parser<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<A>())
            .finish()
    }
}

impl<A: 'static> Parser<A> {
    /// Wraps a parsing function
    ///
    /// The function must only ever return a suffix of its input as the
    /// remainder. Slicing (`split_first`, `&input[n..]`) guarantees that.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(Tokens<'a>) -> Option<(A, Tokens<'a>)> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Runs the parser against `input`
    pub fn run<'a>(&self, input: Tokens<'a>) -> Option<(A, Tokens<'a>)> {
        (self.run)(input)
    }

    /// Always succeeds with `a`, consuming nothing
    pub fn pure(a: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(move |input| Some((a.clone(), input)))
    }

    /// Always fails, consuming nothing
    ///
    /// Identity element for [`Parser::alt`].
    pub fn zero() -> Self {
        Self::new(|_| None)
    }

    /// Transforms the parsed value, leaving the remainder untouched
    ///
    /// Behaves exactly like `self.chain(move |a| Parser::pure(f(a)))` without
    /// the intermediate parser.
    pub fn map<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Parser::new(move |input| self.run(input).map(|(a, rest)| (f(a), rest)))
    }

    /// Sequences two parsers where the second depends on the first's value
    ///
    /// The parser returned by `f` only sees what `self` left unconsumed.
    /// A failure of either side is a failure of the whole.
    pub fn chain<B, F>(self, f: F) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> Parser<B> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (a, rest) = self.run(input)?;
            f(a).run(rest)
        })
    }

    /// Sequences two independent parsers, pairing their values
    pub fn then<B: 'static>(self, that: Parser<B>) -> Parser<(A, B)> {
        Parser::new(move |input| {
            let (a, rest) = self.run(input)?;
            let (b, rest) = that.run(rest)?;
            Some(((a, b), rest))
        })
    }

    /// Tries `self`, falling back to `that` on the **original** input
    ///
    /// Nothing `self` consumed before failing leaks into `that`, and `that`
    /// is never run when `self` succeeds.
    pub fn alt(self, that: Parser<A>) -> Parser<A> {
        Parser::new(move |input| self.run(input).or_else(|| that.run(input)))
    }

    /// Applies a parsed function to a parsed value
    ///
    /// The function is parsed first, then the value from the remainder.
    pub fn ap<B, F>(self, fab: Parser<F>) -> Parser<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Parser::new(move |input| {
            let (f, rest) = fab.run(input)?;
            let (a, rest) = self.run(rest)?;
            Some((f(a), rest))
        })
    }
}

/// Folds parsers into one ordered alternative
///
/// Equivalent to `Parser::zero().alt(p1).alt(p2)...`: the first parser that
/// succeeds wins, and an empty list never matches.
pub fn one_of<A, I>(parsers: I) -> Parser<A>
where
    A: 'static,
    I: IntoIterator<Item = Parser<A>>,
{
    parsers.into_iter().fold(Parser::zero(), Parser::alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first() -> Parser<String> {
        Parser::new(|input| {
            let (head, rest) = input.split_first()?;
            Some((head.to_string(), rest))
        })
    }

    fn exact(expected: &'static str) -> Parser<&'static str> {
        Parser::new(move |input| match input.split_first() {
            Some((head, rest)) if *head == expected => Some((expected, rest)),
            _ => None,
        })
    }

    #[test]
    fn test_pure_consumes_nothing() {
        let p = Parser::pure(7);
        assert_eq!(p.run(&["a", "b"]), Some((7, &["a", "b"][..])));
        assert_eq!(p.run(&[]), Some((7, &[][..])));
    }

    #[test]
    fn test_zero_never_matches() {
        let p: Parser<i32> = Parser::zero();
        assert_eq!(p.run(&[]), None);
        assert_eq!(p.run(&["a"]), None);
    }

    #[test]
    fn test_map_keeps_remainder() {
        let p = first().map(|s| s.len());
        assert_eq!(p.run(&["users", "1"]), Some((5, &["1"][..])));
    }

    #[test]
    fn test_map_matches_chain_pure() {
        let direct = first().map(|s| s.to_uppercase());
        let derived = first().chain(|s| Parser::pure(s.to_uppercase()));

        for input in [&["a", "b"][..], &["x"][..], &[][..]] {
            assert_eq!(direct.run(input), derived.run(input));
        }
    }

    #[test]
    fn test_chain_sees_only_remainder() {
        let p = first().chain(|a| first().map(move |b| format!("{a}-{b}")));
        assert_eq!(
            p.run(&["a", "b", "c"]),
            Some(("a-b".to_string(), &["c"][..]))
        );
        assert_eq!(p.run(&["a"]), None);
    }

    #[test]
    fn test_chain_can_depend_on_value() {
        // Reads a count, then that many segments
        let counted = first().chain(|n| {
            let n: usize = n.parse().unwrap_or(0);
            Parser::new(move |input| {
                (input.len() >= n).then(|| (input[..n].join(","), &input[n..]))
            })
        });
        assert_eq!(
            counted.run(&["2", "a", "b", "c"]),
            Some(("a,b".to_string(), &["c"][..]))
        );
        assert_eq!(counted.run(&["3", "a"]), None);
    }

    #[test]
    fn test_then_pairs_values() {
        let p = exact("users").then(first());
        assert_eq!(
            p.run(&["users", "1"]),
            Some((("users", "1".to_string()), &[][..]))
        );
        assert_eq!(p.run(&["posts", "1"]), None);
    }

    #[test]
    fn test_alt_retries_on_original_input() {
        // Left side consumes "users" before failing on "invoice"
        let left = exact("users").then(exact("invoice")).map(|_| "left");
        let right = exact("users").map(|_| "right");

        let p = left.alt(right.clone());
        let input: Tokens<'_> = &["users", "1"];
        assert_eq!(p.run(input), right.run(input));
        assert_eq!(p.run(input), Some(("right", &["1"][..])));
    }

    #[test]
    fn test_alt_prefers_first_success() {
        let p = exact("a").map(|_| 1).alt(exact("a").map(|_| 2));
        assert_eq!(p.run(&["a"]), Some((1, &[][..])));
    }

    #[test]
    fn test_ap_parses_function_first() {
        let f = exact("double").map(|_| |n: usize| n * 2);
        let n = first().map(|s| s.len());
        let p = n.ap(f);
        assert_eq!(p.run(&["double", "abc"]), Some((6, &[][..])));
        assert_eq!(p.run(&["abc", "double"]), None);
    }

    #[test]
    fn test_one_of_empty_never_matches() {
        let p: Parser<u8> = one_of(Vec::new());
        assert_eq!(p.run(&["a"]), None);
    }

    #[test]
    fn test_one_of_first_success_wins() {
        let p = one_of(vec![
            exact("b").map(|_| 'b'),
            exact("a").map(|_| 'x'),
            exact("a").map(|_| 'y'),
        ]);
        assert_eq!(p.run(&["a"]), Some(('x', &[][..])));
        assert_eq!(p.run(&["c"]), None);
    }

    #[test]
    fn test_parsers_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser<String>>();
    }
}
