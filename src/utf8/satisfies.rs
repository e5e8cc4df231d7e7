use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that consumes one character if it satisfies a predicate
pub struct Satisfies<F> {
    predicate: F,
    name: Cow<'static, str>,
}

impl<F> Satisfies<F> {
    pub fn new(predicate: F, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            predicate,
            name: name.into(),
        }
    }
}

impl<F> Parser for Satisfies<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(match cursor.value() {
            Some(ch) if (self.predicate)(ch) => Outcome::success(ch, cursor.next()),
            _ => Outcome::failure(cursor),
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Convenience function to create a predicate-based character parser
pub fn satisfies<F>(predicate: F, name: impl Into<Cow<'static, str>>) -> Satisfies<F>
where
    F: Fn(char) -> bool,
{
    Satisfies::new(predicate, name)
}
