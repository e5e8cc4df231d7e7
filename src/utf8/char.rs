use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes and returns any single character
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(match cursor.value() {
            Some(ch) => Outcome::success(ch, cursor.next()),
            // End of input is an ordinary non-match
            None => Outcome::failure(cursor),
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("any character")
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that matches a specific character
pub struct IsChar(char);

impl Parser for IsChar {
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(match cursor.value() {
            Some(ch) if ch == self.0 => Outcome::success(ch, cursor.next()),
            _ => Outcome::failure(cursor),
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self.0))
    }
}

/// Convenience function to create a parser that matches a specific character
pub fn is_char(expected: char) -> IsChar {
    IsChar(expected)
}
