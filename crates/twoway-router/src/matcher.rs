/// Bidirectional matches
///
/// A [`Match<A>`] keeps a [`Parser<A>`] and a [`Formatter<A>`] together so
/// every combinator changes both sides at once. Build route matches from the
/// primitives in [`crate::primitive`] and these combinators only, and the
/// round-trip law holds by construction (provided every [`Match::imap`]
/// passes a `from` that undoes its `to`).

use std::fmt;

use crate::formatter::{Formatter, Segments};
use crate::parser::{Parser, Tokens};

/// A parser and a formatter over the same value, composed in lock-step
///
/// # Examples
///
/// ```
/// use twoway_router::{end, int, lit, Match};
///
/// // "users/:id"
/// let user: Match<i64> = lit("users").and(int()).skip(end());
///
/// assert_eq!(user.parse(&["users", "1"]), Some((1, &[][..])));
/// assert_eq!(user.format(&1).join("/"), "users/1");
/// assert!(user.round_trips(&1));
/// ```
pub struct Match<A> {
    parser: Parser<A>,
    formatter: Formatter<A>,
}

impl<A> Clone for Match<A> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            formatter: self.formatter.clone(),
        }
    }
}

impl<A> fmt::Debug for Match<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("parser", &self.parser)
            .field("formatter", &self.formatter)
            .finish()
    }
}

impl<A: 'static> Match<A> {
    /// Pairs a parser with its formatter
    ///
    /// The caller is responsible for the pair being mutual inverses. Prefer
    /// composing existing matches over calling this directly.
    pub fn new(parser: Parser<A>, formatter: Formatter<A>) -> Self {
        Self { parser, formatter }
    }

    pub fn parser(&self) -> &Parser<A> {
        &self.parser
    }

    pub fn formatter(&self) -> &Formatter<A> {
        &self.formatter
    }

    pub fn into_parts(self) -> (Parser<A>, Formatter<A>) {
        (self.parser, self.formatter)
    }

    /// Runs the parser side
    pub fn parse<'a>(&self, input: Tokens<'a>) -> Option<(A, Tokens<'a>)> {
        self.parser.run(input)
    }

    /// Runs the formatter side from empty segments
    pub fn format(&self, a: &A) -> Segments {
        self.formatter.run(Segments::new(), a)
    }

    /// Checks the round-trip law for one value
    ///
    /// True iff formatting `a` and parsing the result gives back `a` with
    /// nothing left over.
    pub fn round_trips(&self, a: &A) -> bool
    where
        A: PartialEq,
    {
        let segments = self.format(a);
        let tokens = segments.as_tokens();
        matches!(self.parse(&tokens), Some((parsed, rest)) if rest.is_empty() && parsed == *a)
    }

    /// Sequences two matches into a pair
    ///
    /// The parser consumes `self` then `that`; the formatter writes the
    /// first component then the second, in the same order.
    pub fn then<B: 'static>(self, that: Match<B>) -> Match<(A, B)> {
        Match {
            parser: self.parser.then(that.parser),
            formatter: self.formatter.then(that.formatter),
        }
    }

    /// Changes the value type of both sides
    ///
    /// `to` maps parsed values forward, `from` maps values back before
    /// formatting. `from(&to(a))` must equal `a` for every `a` this match
    /// can parse, otherwise formatting and parsing stop being inverses.
    /// Nothing checks this at runtime; cover it with [`Match::round_trips`].
    pub fn imap<B, F, G>(self, to: F, from: G) -> Match<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
        G: Fn(&B) -> A + Send + Sync + 'static,
    {
        Match {
            parser: self.parser.map(to),
            formatter: self.formatter.contramap(from),
        }
    }

    /// Sequences a unit match after `self`, keeping `self`'s value
    ///
    /// Same as `self.then(unit).imap(|(a, ())| a, |a| (a.clone(), ()))`
    /// without requiring `A: Clone`.
    pub fn skip(self, unit: Match<()>) -> Match<A> {
        let (parser, formatter) = (self.parser, self.formatter);
        let (unit_parser, unit_formatter) = (unit.parser, unit.formatter);

        Match {
            parser: parser.then(unit_parser).map(|(a, ())| a),
            formatter: Formatter::new(move |out, a: &A| {
                formatter.write(out, a);
                unit_formatter.write(out, &());
            }),
        }
    }
}

impl Match<()> {
    /// Sequences `that` after a unit match, keeping `that`'s value
    ///
    /// `lit("users").and(int())` is a `Match<i64>` for `users/:id`.
    pub fn and<B: 'static>(self, that: Match<B>) -> Match<B> {
        let (unit_parser, unit_formatter) = (self.parser, self.formatter);
        let (parser, formatter) = (that.parser, that.formatter);

        Match {
            parser: unit_parser.then(parser).map(|((), b)| b),
            formatter: Formatter::new(move |out, b: &B| {
                unit_formatter.write(out, &());
                formatter.write(out, b);
            }),
        }
    }
}
