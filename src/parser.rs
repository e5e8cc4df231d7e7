use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};
use crate::outcome::{Outcome, ParseResult};
use std::borrow::Cow;
use tracing::debug;

/// Core parser trait for parser combinators
///
/// Parsers are immutable values. The input lifetime is bound per call, so a
/// grammar built once can be reused for any number of inputs and shared
/// between threads.
pub trait Parser {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// A soft failure must carry the cursor that was passed in; only the
    /// fatal `Err` arm may abandon the parse.
    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output>;

    /// Name used in diagnostics
    fn name(&self) -> Cow<'_, str>;
}

/// Type-erased parser, used wherever parsers of different types are stored together
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

/// Parser wrapper that overrides the diagnostic name
pub struct Named<P> {
    parser: P,
    name: Cow<'static, str>,
}

impl<P> Named<P> {
    pub fn new(parser: P, name: impl Into<Cow<'static, str>>) -> Self {
        Named {
            parser,
            name: name.into(),
        }
    }
}

impl<P> Parser for Named<P>
where
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Extension trait for naming and boxing parsers
pub trait ParserExt: Parser + Sized {
    fn named(self, name: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(self, name)
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<P> ParserExt for P where P: Parser {}

/// Run `parser` against the whole of `input`, starting at offset 0
///
/// Returns the produced value on success. A soft failure at the top level is
/// reported as [`ParseError::NoMatch`]; fatal errors are returned as raised.
/// Full consumption of `input` is not required here; grammars that need it
/// end with [`crate::eoi::end_of_input`].
pub fn parse<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, ParseError<'code>>
where
    P: Parser + ?Sized,
{
    debug!(parser = %parser.name(), input_len = input.len(), "parse start");

    match parser.parse(Cursor::new(input)) {
        Ok(Outcome::Success { value, cursor }) => {
            debug!(consumed = cursor.position(), "parse succeeded");
            Ok(value)
        }
        Ok(Outcome::Failure { cursor }) => {
            debug!(offset = cursor.position(), "parse did not match");
            Err(ParseError::NoMatch {
                parser: parser.name().into_owned(),
                loc: CodeLoc::new(input, cursor.position()),
            })
        }
        Err(error) => {
            debug!(offset = error.position(), "parse aborted");
            Err(error)
        }
    }
}
