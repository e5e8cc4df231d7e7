use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::{BoxedParser, Parser};
use std::borrow::Cow;
use tracing::trace;

/// Ordered choice over any number of alternatives of the same output type
///
/// Alternatives are tried in order from the same cursor and the first success
/// wins, even if a later alternative would consume more. A fatal error from
/// any alternative ends the choice immediately.
pub struct Any<V> {
    parsers: Vec<BoxedParser<V>>,
}

impl<V> Any<V> {
    pub fn new(parsers: Vec<BoxedParser<V>>) -> Self {
        Any { parsers }
    }
}

impl<V> Parser for Any<V> {
    type Output = V;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        for parser in &self.parsers {
            if let success @ Outcome::Success { .. } = parser.parse(cursor)? {
                return Ok(success);
            }
        }

        trace!(
            parser = %self.name(),
            offset = cursor.position(),
            "no alternative matched"
        );
        Ok(Outcome::failure(cursor))
    }

    fn name(&self) -> Cow<'_, str> {
        let names: Vec<_> = self.parsers.iter().map(|p| p.name()).collect();
        Cow::Owned(format!("any({})", names.join(" | ")))
    }
}

/// Convenience function to create an ordered choice
pub fn any<V>(parsers: Vec<BoxedParser<V>>) -> Any<V> {
    Any::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::expect::ExpectExt;
    use crate::parser::ParserExt;
    use crate::utf8::char::is_char;
    use crate::utf8::string::literal;

    #[test]
    fn test_any_first_alternative() {
        let parser = any(vec![is_char('a').boxed(), is_char('b').boxed()]);

        let outcome = parser.parse(Cursor::new("ab")).unwrap();
        assert_eq!(outcome.offset(), 1);
        assert_eq!(outcome.into_value(), Some('a'));
    }

    #[test]
    fn test_any_later_alternative() {
        let parser = any(vec![
            is_char('a').boxed(),
            is_char('b').boxed(),
            is_char('c').boxed(),
        ]);

        let outcome = parser.parse(Cursor::new("c")).unwrap();
        assert_eq!(outcome.into_value(), Some('c'));
    }

    #[test]
    fn test_any_first_success_wins() {
        // the shorter literal is listed first and shadows the longer one
        let parser = any(vec![literal("a", 1).boxed(), literal("ab", 2).boxed()]);

        let outcome = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(outcome.offset(), 1);
        assert_eq!(outcome.into_value(), Some(1));
    }

    #[test]
    fn test_any_no_match_fails_at_entry() {
        let parser = any(vec![literal("null", ()).boxed(), literal("nil", ()).boxed()]);
        let cursor = Cursor::new(" nu").next();

        let outcome = parser.parse(cursor).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.offset(), 1);
    }

    #[test]
    fn test_any_empty_list_fails() {
        let parser: Any<char> = any(vec![]);

        let outcome = parser.parse(Cursor::new("abc")).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_any_fatal_error_short_circuits() {
        let parser = any(vec![
            is_char('a').expect("expected 'a'").boxed(),
            is_char('x').boxed(),
        ]);

        let result = parser.parse(Cursor::new("x"));
        assert!(matches!(result, Err(ParseError::Expected { .. })));
    }

    #[test]
    fn test_any_name() {
        let parser = any(vec![is_char('a').boxed(), is_char('b').boxed()]);
        assert_eq!(parser.name(), "any('a' | 'b')");
    }
}
