use crate::utf8::satisfies::{Satisfies, satisfies};

/// Convenience function to create a Unicode letter parser
pub fn letter() -> Satisfies<fn(char) -> bool> {
    satisfies(char::is_alphabetic as fn(char) -> bool, "letter")
}
