use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that maps the output of another parser and fails softly on `None`
///
/// Grammars use this to pull typed fields out of sequence captures. A `None`
/// is reported as a failure at the cursor the parser was invoked with.
pub struct FilterMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> FilterMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Self { parser, mapper }
    }
}

impl<P, F, U> Parser for FilterMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(cursor)? {
            Outcome::Success { value, cursor: next } => match (self.mapper)(value) {
                Some(mapped) => Ok(Outcome::success(mapped, next)),
                None => Ok(Outcome::failure(cursor)),
            },
            Outcome::Failure { .. } => Ok(Outcome::failure(cursor)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Extension trait to add filter_map method to all parsers
pub trait FilterMapExt: Parser {
    fn filter_map<F, U>(self, mapper: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMap::new(self, mapper)
    }
}

impl<P: Parser> FilterMapExt for P {}

/// Convenience function to create a filter-mapped parser
pub fn filter_map<P, F, U>(parser: P, mapper: F) -> FilterMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Option<U>,
{
    FilterMap::new(parser, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::char::any_char;

    #[test]
    fn test_filter_map_success() {
        let parser = any_char().filter_map(|c| c.to_digit(16));

        let outcome = parser.parse(Cursor::new("f")).unwrap();
        assert_eq!(outcome.offset(), 1);
        assert_eq!(outcome.into_value(), Some(15));
    }

    #[test]
    fn test_filter_map_none_fails_at_entry() {
        let cursor = Cursor::new("xg").next();
        let parser = any_char().filter_map(|c| c.to_digit(16));

        let outcome = parser.parse(cursor).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.offset(), 1);
    }

    #[test]
    fn test_filter_map_unicode_categories() {
        let test_cases = [
            ("a", true),
            ("Z", true),
            ("ñ", true),
            ("中", true),
            ("1", false),
            ("!", false),
            (" ", false),
        ];

        for (input, should_succeed) in test_cases {
            let parser = filter_map(any_char(), |c| c.is_alphabetic().then_some(c));
            let outcome = parser.parse(Cursor::new(input)).unwrap();

            assert_eq!(
                outcome.is_success(),
                should_succeed,
                "Unexpected outcome for: {}",
                input
            );
        }
    }

    #[test]
    fn test_chained_filter_maps() {
        let parser = any_char()
            .filter_map(|c| c.is_alphabetic().then_some(c))
            .filter_map(|c| c.is_uppercase().then_some(c));

        assert!(parser.parse(Cursor::new("A")).unwrap().is_success());
        assert!(!parser.parse(Cursor::new("a")).unwrap().is_success());
    }
}
