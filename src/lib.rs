//! # seqcomb - Parser Combinator Engine
//!
//! Grammars are assembled once from small parsers and reused for any number
//! of inputs. Every parser returns an [`Outcome`] inside a [`ParseResult`]:
//!
//! - **Soft failure** (`Outcome::Failure`) means "this alternative did not
//!   match". It always carries the cursor the parser started from, so choices
//!   and optional elements can backtrack freely.
//! - **Fatal failure** (`Err(ParseError)`) is raised only at commit points
//!   ([`Expect`]) and passes through every combinator unchanged.
//!
//! [`Sequence`] captures values under per-grammar key enums, which keeps field
//! access checked instead of positional. Recursive grammars are wired through
//! [`rule::Rule`] handles.
//!
//! ```
//! use seqcomb::utf8::{digit, is_char};
//! use seqcomb::{Element, ExpectExt, MapExt, ParseError, Sequence, many, sequence};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Pair {
//!     Left,
//!     Right,
//! }
//!
//! let number = || {
//!     many(digit())
//!         .at_least(1)
//!         .map(|ds| ds.into_iter().collect::<String>())
//! };
//! let pair: Sequence<Pair, String> = sequence(vec![
//!     Element::skip(is_char('(')),
//!     Element::keep(Pair::Left, number()),
//!     Element::skip(is_char(',')),
//!     Element::keep(Pair::Right, number().expect("expected a number")),
//!     Element::skip(is_char(')')),
//! ]);
//!
//! let mut captures = seqcomb::parse(&pair, "(12,34)").unwrap();
//! assert_eq!(captures.take(&Pair::Right).as_deref(), Some("34"));
//!
//! let error = seqcomb::parse(&pair, "(12,)").unwrap_err();
//! assert!(matches!(error, ParseError::Expected { .. }));
//! assert_eq!(error.position(), 4);
//! ```

pub mod any;
pub mod cursor;
pub mod dsl;
pub mod eoi;
pub mod error;
pub mod expect;
pub mod filter_map;
pub mod json;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or;
pub mod outcome;
pub mod parser;
pub mod rule;
pub mod sequence;
pub mod utf8;

pub use any::{Any, any};
pub use cursor::Cursor;
pub use eoi::{EndOfInput, end_of_input};
pub use error::{CodeLoc, ParseError, ReadablePosition};
pub use expect::{Expect, ExpectExt, expect};
pub use filter_map::{FilterMap, FilterMapExt, filter_map};
pub use lazy::{Lazy, lazy};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use or::{Or, OrExt, or};
pub use outcome::{Outcome, ParseResult};
pub use parser::{BoxedParser, Named, Parser, ParserExt, parse};
pub use rule::{DEFAULT_MAX_DEPTH, Rule, RuleDefinition};
pub use sequence::{Captures, Element, Sequence, field, sequence};
