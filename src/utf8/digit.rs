use crate::utf8::satisfies::{Satisfies, satisfies};

/// Convenience function to create a decimal digit parser
///
/// Only `0`-`9` are accepted, so the matched text can be handed to the
/// standard numeric parsers.
pub fn digit() -> Satisfies<fn(char) -> bool> {
    satisfies(is_ascii_digit as fn(char) -> bool, "digit")
}

fn is_ascii_digit(c: char) -> bool {
    c.is_ascii_digit()
}
