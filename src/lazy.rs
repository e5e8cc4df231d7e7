use crate::cursor::Cursor;
use crate::outcome::ParseResult;
use crate::parser::Parser;
use std::borrow::Cow;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory runs on every parse. For recursive grammars that should be
/// built once, use [`crate::rule::Rule`].
pub struct Lazy<F> {
    factory: F,
}

impl<F, P> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Output = P::Output;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned((self.factory)().name().into_owned())
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::many::many;
    use crate::utf8::char::is_char;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_basic() {
        let parser = lazy(|| is_char('a'));

        let outcome = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(outcome.offset(), 1);
        assert_eq!(outcome.into_value(), Some('a'));
    }

    #[test]
    fn test_lazy_with_many() {
        let parser = lazy(|| many(is_char('a')));

        let outcome = parser.parse(Cursor::new("aaaa")).unwrap();
        assert_eq!(outcome.offset(), 4);
        assert_eq!(outcome.into_value().map(|v| v.len()), Some(4));
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = AtomicUsize::new(0);
        let parser = lazy(|| {
            built.fetch_add(1, Ordering::SeqCst);
            is_char('x')
        });
        assert_eq!(built.load(Ordering::SeqCst), 0);

        let outcome = parser.parse(Cursor::new("xyz")).unwrap();
        assert_eq!(outcome.into_value(), Some('x'));
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_name() {
        let parser = lazy(|| is_char('x'));
        assert_eq!(parser.name(), "'x'");
    }
}
