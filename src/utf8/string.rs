use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use crate::sequence::{Element, Sequence, sequence};
use crate::utf8::char::is_char;
use std::borrow::Cow;

/// Parser that matches an exact string and yields a caller-supplied value
///
/// The text is matched as a sequence of required, uncaptured characters, so
/// a mismatch anywhere fails the whole literal at its start.
pub struct Literal<T> {
    text: Cow<'static, str>,
    chars: Sequence<(), ()>,
    value: T,
}

impl<T> Literal<T> {
    pub fn new(text: impl Into<Cow<'static, str>>, value: T) -> Self {
        let text = text.into();
        let chars = sequence(text.chars().map(|c| Element::skip(is_char(c))).collect());
        Self { text, chars, value }
    }
}

impl<T> Parser for Literal<T>
where
    T: Clone,
{
    type Output = T;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(self.chars.parse(cursor)?.map(|_| self.value.clone()))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self.text))
    }
}

/// Convenience function to create a Literal parser
pub fn literal<T: Clone>(text: impl Into<Cow<'static, str>>, value: T) -> Literal<T> {
    Literal::new(text, value)
}
