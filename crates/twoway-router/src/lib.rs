//! # Twoway Router
//!
//! Invertible path routing. A single [`Match`] describes a route once and
//! gets both directions from that one description:
//!
//! - **Parsing**: path segments → typed value (`"users/1"` → `User { id: 1 }`)
//! - **Formatting**: typed value → path segments (`User { id: 1 }` → `"users/1"`)
//!
//! ## Functional Programming Approach
//!
//! - **Pure combinators**: [`Parser`], [`Formatter`] and [`Match`] are immutable
//!   values that compose into bigger values, no mutation after construction
//! - **Zero-copy input**: parsers walk borrowed `&[&str]` slices, and the
//!   remainder is always a suffix of the input
//! - **Append-only output**: formatters can only push onto [`Segments`]
//! - **Absence instead of errors**: a parser that does not match returns `None`;
//!   the [`Router`] turns "nothing matched" into the location's `NotFound`
//!
//! ## The Round-Trip Law
//!
//! For every value `a` a match built from the provided primitives can produce:
//!
//! ```text
//! m.parse(&m.format(&a).as_tokens()) == Some((a, []))
//! ```
//!
//! [`Match::imap`] is the one place the law can be broken: its `from`
//! function must undo its `to` function. Use [`Match::round_trips`] in tests.
//!
//! ## Example
//!
//! ```
//! use twoway_router::{end, int, lit, Location, Router};
//!
//! # fn main() -> twoway_router::Result<()> {
//! #[derive(Debug, Clone, PartialEq)]
//! enum Page {
//!     User { id: i64 },
//!     Invoice { user_id: i64, invoice_id: i64 },
//!     NotFound,
//! }
//!
//! impl Location for Page {
//!     fn not_found() -> Self {
//!         Page::NotFound
//!     }
//! }
//!
//! let router = Router::builder()
//!     // Most specific first: "users/:id" is a prefix of this one
//!     .route(
//!         "invoice",
//!         lit("users").and(int()).skip(lit("invoice")).then(int()).skip(end()),
//!         |(user_id, invoice_id)| Page::Invoice { user_id, invoice_id },
//!         |page: &Page| match page {
//!             Page::Invoice { user_id, invoice_id } => Some((*user_id, *invoice_id)),
//!             _ => None,
//!         },
//!     )
//!     .route(
//!         "user",
//!         lit("users").and(int()).skip(end()),
//!         |id| Page::User { id },
//!         |page: &Page| match page {
//!             Page::User { id } => Some(*id),
//!             _ => None,
//!         },
//!     )
//!     .build()?;
//!
//! assert_eq!(router.parse("users/1"), Page::User { id: 1 });
//! assert_eq!(
//!     router.parse("users/1/invoice/42"),
//!     Page::Invoice { user_id: 1, invoice_id: 42 }
//! );
//! assert_eq!(router.parse("users/abc"), Page::NotFound);
//! assert_eq!(
//!     router.format(&Page::Invoice { user_id: 1, invoice_id: 42 }).as_deref(),
//!     Some("users/1/invoice/42")
//! );
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod error;
pub mod formatter;
pub mod matcher;
pub mod parser;
pub mod path;
pub mod primitive;
mod router;

// Re-export public types
pub use config::{Config, RouterConfig, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use formatter::{Formatter, Segments};
pub use matcher::Match;
pub use parser::{one_of, Parser, Tokens};
pub use path::{is_canonical, join, normalize, split};
pub use primitive::{end, int, lit, segment};
pub use router::{Location, Router, RouterBuilder};
