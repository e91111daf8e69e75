/// Primitive segment matches
///
/// The building blocks every route match is composed from. Each one is
/// invertible on its own: whatever its formatter writes, its parser reads
/// back as the same value.
///
/// | Match | Parses | Formats |
/// |-------|--------|---------|
/// | `lit("users")` | exactly the segment `users` | `users` |
/// | `int()` | one canonical base-10 `i64` | `n.to_string()` |
/// | `segment()` | any single segment | the string as-is |
/// | `end()` | nothing, iff no segments remain | nothing |

use crate::formatter::Formatter;
use crate::matcher::Match;
use crate::parser::Parser;

/// Matches one segment equal to `literal` (case-sensitive)
///
/// # Examples
///
/// ```
/// use twoway_router::lit;
///
/// let users = lit("users");
/// assert_eq!(users.parse(&["users", "1"]), Some(((), &["1"][..])));
/// assert_eq!(users.parse(&["Users", "1"]), None);
/// assert_eq!(users.format(&()).join("/"), "users");
/// ```
pub fn lit(literal: impl Into<String>) -> Match<()> {
    let literal = literal.into();
    let expected = literal.clone();

    Match::new(
        Parser::new(move |input| match input.split_first() {
            Some((head, rest)) if *head == expected => Some(((), rest)),
            _ => None,
        }),
        Formatter::new(move |out, _: &()| out.push(literal.as_str())),
    )
}

/// Matches one segment holding a canonical base-10 integer
///
/// Accepted segments are exactly those `i64::to_string` produces: `0`, or an
/// optional `-` followed by digits without a leading zero. `01`, `+1`, `-0`,
/// `1abc` and out-of-range numbers are rejected, which keeps the parser the
/// exact inverse of the formatter.
///
/// # Examples
///
/// ```
/// use twoway_router::int;
///
/// assert_eq!(int().parse(&["42"]), Some((42, &[][..])));
/// assert_eq!(int().parse(&["-7", "x"]), Some((-7, &["x"][..])));
/// assert_eq!(int().parse(&["1abc"]), None);
/// assert_eq!(int().parse(&["007"]), None);
/// assert_eq!(int().format(&42).join("/"), "42");
/// ```
pub fn int() -> Match<i64> {
    Match::new(
        Parser::new(|input| {
            let (head, rest) = input.split_first()?;
            parse_canonical_int(head).map(|n| (n, rest))
        }),
        Formatter::new(|out, n: &i64| out.push(n.to_string())),
    )
}

/// Matches any single segment as text
///
/// The formatter writes the string unchanged. Strings containing the path
/// separator cannot round-trip since segments are never escaped.
///
/// # Examples
///
/// ```
/// use twoway_router::{lit, segment};
///
/// let post = lit("posts").and(segment());
/// assert_eq!(
///     post.parse(&["posts", "hello-world"]),
///     Some(("hello-world".to_string(), &[][..]))
/// );
/// ```
pub fn segment() -> Match<String> {
    Match::new(
        Parser::new(|input| {
            let (head, rest) = input.split_first()?;
            Some((head.to_string(), rest))
        }),
        Formatter::new(|out, s: &String| out.push(s.as_str())),
    )
}

/// Matches the end of the input
///
/// Succeeds without consuming anything iff no segments remain, so
/// `users/1/extra` does not match a route ending in `end()`. Formats nothing.
pub fn end() -> Match<()> {
    Match::new(
        Parser::new(|input| input.is_empty().then_some(((), input))),
        Formatter::empty(),
    )
}

/// Parses `token` iff it is the canonical decimal form of an `i64`
fn parse_canonical_int(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);

    let canonical = match digits.as_bytes() {
        [] => false,
        // "0" is canonical, "-0" is not
        [b'0'] => digits.len() == token.len(),
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    };

    if canonical {
        token.parse().ok()
    } else {
        None
    }
}
