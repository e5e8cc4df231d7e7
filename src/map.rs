use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The mapper runs only on success and never moves the cursor.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.parser.parse(cursor)?.map(&self.mapper))
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
