use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that matches one character out of a fixed set
pub struct AnyOf {
    chars: Cow<'static, str>,
}

impl AnyOf {
    pub fn new(chars: impl Into<Cow<'static, str>>) -> Self {
        Self {
            chars: chars.into(),
        }
    }
}

impl Parser for AnyOf {
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(match cursor.value() {
            Some(ch) if self.chars.contains(ch) => Outcome::success(ch, cursor.next()),
            _ => Outcome::failure(cursor),
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("one of {:?}", self.chars))
    }
}

/// Convenience function to create a parser for any character in `chars`
pub fn any_of(chars: impl Into<Cow<'static, str>>) -> AnyOf {
    AnyOf::new(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_of_members() {
        let parser = any_of("eE");

        for input in ["e10", "E10"] {
            let outcome = parser.parse(Cursor::new(input)).unwrap();
            assert!(outcome.is_success(), "Expected success for: {}", input);
            assert_eq!(outcome.offset(), 1);
        }
    }

    #[test]
    fn test_any_of_non_member() {
        let outcome = any_of("123456789").parse(Cursor::new("0")).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.offset(), 0);
    }

    #[test]
    fn test_any_of_end_of_input() {
        let outcome = any_of("+-").parse(Cursor::new("")).unwrap();
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_any_of_owned_set() {
        let set: String = ('a'..='f').collect();
        let outcome = any_of(set).parse(Cursor::new("c")).unwrap();

        assert_eq!(outcome.into_value(), Some('c'));
    }

    #[test]
    fn test_any_of_name() {
        assert_eq!(any_of("+-").name(), "one of \"+-\"");
    }
}
