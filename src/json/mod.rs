//! JSON values, built entirely from the engine's combinators
//!
//! Commit points make malformed input fail fast: once a member's `:` or a
//! separating `,` has been read, the following value is mandatory, and a
//! complete document must not be followed by anything but whitespace.

mod grammar;
mod value;

pub use value::Json;

use crate::error::ParseError;
use crate::parser::BoxedParser;
use once_cell::sync::Lazy;

static ELEMENT: Lazy<BoxedParser<Json>> = Lazy::new(grammar::element_grammar);
static DOCUMENT: Lazy<BoxedParser<Json>> = Lazy::new(grammar::document);

/// Shared JSON element grammar: one value with optional surrounding whitespace
///
/// Trailing input is left alone, which lets the grammar be embedded in larger
/// inputs. Arrays and objects may nest up to [`crate::DEFAULT_MAX_DEPTH`]
/// levels; deeper input is rejected with [`ParseError::TooDeep`].
pub fn grammar() -> &'static BoxedParser<Json> {
    &ELEMENT
}

/// Parse a complete JSON text
pub fn parse(input: &str) -> Result<Json, ParseError<'_>> {
    crate::parser::parse(&*DOCUMENT, input)
}
