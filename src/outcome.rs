use crate::cursor::Cursor;
use crate::error::ParseError;

/// Result of attempting a match
///
/// `Failure` is a soft failure: callers may backtrack and try something else.
/// Its cursor is always the cursor the failing combinator was invoked with, so
/// no partial consumption leaks out of a failed attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'code, T> {
    Success { value: T, cursor: Cursor<'code> },
    Failure { cursor: Cursor<'code> },
}

/// What every parser returns
///
/// The `Err` arm is the fatal channel. It is only produced by commit points
/// (see [`crate::expect`]) and every combinator forwards it with `?`.
pub type ParseResult<'code, T> = Result<Outcome<'code, T>, ParseError<'code>>;

impl<'code, T> Outcome<'code, T> {
    pub fn success(value: T, cursor: Cursor<'code>) -> Self {
        Outcome::Success { value, cursor }
    }

    pub fn failure(cursor: Cursor<'code>) -> Self {
        Outcome::Failure { cursor }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Cursor after consumption on success, or the attempt's start on failure
    pub fn cursor(&self) -> Cursor<'code> {
        match self {
            Outcome::Success { cursor, .. } | Outcome::Failure { cursor } => *cursor,
        }
    }

    pub fn offset(&self) -> usize {
        self.cursor().position()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Transform a successful value, leaving the cursor alone
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'code, U> {
        match self {
            Outcome::Success { value, cursor } => Outcome::Success {
                value: f(value),
                cursor,
            },
            Outcome::Failure { cursor } => Outcome::Failure { cursor },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let cursor = Cursor::new("abc").next();
        let outcome = Outcome::success('a', cursor);

        assert!(outcome.is_success());
        assert_eq!(outcome.offset(), 1);
        assert_eq!(outcome.value(), Some(&'a'));
        assert_eq!(outcome.into_value(), Some('a'));
    }

    #[test]
    fn test_failure_has_no_value() {
        let outcome: Outcome<'_, char> = Outcome::failure(Cursor::new("abc"));

        assert!(!outcome.is_success());
        assert_eq!(outcome.offset(), 0);
        assert_eq!(outcome.value(), None);
    }

    #[test]
    fn test_map_keeps_cursor() {
        let cursor = Cursor::new("42").next().next();
        let outcome = Outcome::success(42, cursor).map(|n| n * 2);

        assert_eq!(outcome, Outcome::success(84, cursor));

        let failed: Outcome<'_, i32> = Outcome::failure(cursor);
        assert_eq!(failed.map(|n| n * 2), Outcome::failure(cursor));
    }
}
