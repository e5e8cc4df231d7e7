use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both alternatives run from the same cursor. A fatal error from the first
/// alternative is returned without trying the second.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser1.parse(cursor)? {
            success @ Outcome::Success { .. } => Ok(success),
            Outcome::Failure { .. } => self.parser2.parse(cursor),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} | {}", self.parser1.name(), self.parser2.name()))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::expect::ExpectExt;
    use crate::utf8::char::is_char;

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(is_char('a'), is_char('b'));

        let outcome = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(outcome.cursor().value(), Some('b'));
        assert_eq!(outcome.into_value(), Some('a'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = or(is_char('a'), is_char('b'));

        let outcome = parser.parse(Cursor::new("bcd")).unwrap();
        assert_eq!(outcome.cursor().value(), Some('c'));
        assert_eq!(outcome.into_value(), Some('b'));
    }

    #[test]
    fn test_or_both_fail() {
        let parser = or(is_char('a'), is_char('b'));

        let outcome = parser.parse(Cursor::new("xyz")).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.offset(), 0);
    }

    #[test]
    fn test_or_method_chain() {
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));

        let outcome = parser.parse(Cursor::new("c")).unwrap();
        assert!(outcome.cursor().eos());
        assert_eq!(outcome.into_value(), Some('c'));
    }

    #[test]
    fn test_or_fatal_first_alternative_stops() {
        let parser = is_char('a').expect("expected 'a'").or(is_char('b'));

        let result = parser.parse(Cursor::new("b"));
        assert!(matches!(result, Err(ParseError::Expected { .. })));
    }

    #[test]
    fn test_or_name() {
        let parser = is_char('a').or(is_char('b'));
        assert_eq!(parser.name(), "'a' | 'b'");
    }
}
