use crate::cursor::Cursor;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;
use tracing::trace;

/// Parser combinator that greedily matches repeated occurrences of the given parser
///
/// Repetition stops at the first soft failure, at end of input, or once `max`
/// values were collected. If fewer than `min` values were collected the whole
/// repetition fails at the cursor it started from.
///
/// A child that succeeds without consuming input is recorded once and ends
/// the repetition, so a zero-width child can never loop forever.
pub struct Many<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many {
            parser,
            min: 0,
            max: None,
        }
    }

    /// Require at least `min` repetitions
    pub fn at_least(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Stop after `max` repetitions
    pub fn at_most(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Require exactly `count` repetitions
    pub fn exactly(self, count: usize) -> Self {
        self.at_least(count).at_most(count)
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();
        let mut current = cursor;

        while !current.eos() && self.max.is_none_or(|max| results.len() < max) {
            match self.parser.parse(current)? {
                Outcome::Success { value, cursor: next } => {
                    results.push(value);
                    if next.position() == current.position() {
                        trace!(
                            parser = %self.parser.name(),
                            offset = current.position(),
                            "zero-width repetition, stopping"
                        );
                        break;
                    }
                    current = next;
                }
                Outcome::Failure { .. } => break,
            }
        }

        if results.len() < self.min {
            trace!(
                parser = %self.parser.name(),
                collected = results.len(),
                min = self.min,
                "too few repetitions"
            );
            return Ok(Outcome::failure(cursor));
        }

        Ok(Outcome::success(results, current))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("many({})", self.parser.name()))
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}
