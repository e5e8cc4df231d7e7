use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;
use tracing::debug;

/// Commit point: turns a soft failure of the wrapped parser into a fatal error
///
/// Use it once the grammar has seen enough to rule out every alternative,
/// e.g. after an opening delimiter when the closing one becomes mandatory.
/// The raised [`ParseError::Expected`] carries the offset where the wrapped
/// parser failed, and no enclosing combinator will backtrack past it.
pub struct Expect<P> {
    parser: P,
    message: Cow<'static, str>,
}

impl<P> Expect<P> {
    pub fn new(parser: P, message: impl Into<Cow<'static, str>>) -> Self {
        Expect {
            parser,
            message: message.into(),
        }
    }
}

impl<P> Parser for Expect<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Outcome::Failure { cursor: failed_at } => {
                let (code, position) = failed_at.inner();
                debug!(message = %self.message, position, "commit point failed");
                Err(ParseError::Expected {
                    message: self.message.clone(),
                    loc: CodeLoc::new(code, position),
                })
            }
            success => Ok(success),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Extension trait to add .expect() method support for parsers
pub trait ExpectExt: Parser + Sized {
    fn expect(self, message: impl Into<Cow<'static, str>>) -> Expect<Self> {
        Expect::new(self, message)
    }
}

/// Implement ExpectExt for all parsers
impl<P> ExpectExt for P where P: Parser {}

/// Convenience function to create an Expect parser
pub fn expect<P>(parser: P, message: impl Into<Cow<'static, str>>) -> Expect<P>
where
    P: Parser,
{
    Expect::new(parser, message)
}
