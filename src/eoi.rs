use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Zero-width parser that only succeeds when no input is left
pub struct EndOfInput;

impl Parser for EndOfInput {
    type Output = ();

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok(if cursor.eos() {
            Outcome::success((), cursor)
        } else {
            Outcome::failure(cursor)
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("end of input")
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
