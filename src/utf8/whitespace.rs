use crate::many::{Many, many};
use crate::utf8::satisfies::{Satisfies, satisfies};

/// Convenience function to create a single Unicode whitespace parser
pub fn whitespace_char() -> Satisfies<fn(char) -> bool> {
    satisfies(char::is_whitespace as fn(char) -> bool, "whitespace")
}

/// Zero or more whitespace characters; never fails
pub fn whitespace() -> Many<Satisfies<fn(char) -> bool>> {
    many(whitespace_char())
}
