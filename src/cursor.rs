/// Immutable position in a complete text input
///
/// A cursor is a `(text, offset)` pair. Advancing produces a new cursor; the
/// original stays valid, which is what lets combinators backtrack by simply
/// reusing the cursor they were invoked with.
///
/// Offsets are byte offsets into the UTF-8 text and always sit on a character
/// boundary. The cursor also counts how many rules it is nested in, so that
/// recursive grammars can refuse input nested deeper than the stack allows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<'code> {
    text: &'code str,
    offset: usize,
    depth: usize,
}

impl<'code> Cursor<'code> {
    /// Create a cursor at the start of `text`
    pub fn new(text: &'code str) -> Self {
        Cursor {
            text,
            offset: 0,
            depth: 0,
        }
    }

    /// Get the character at the current position, or `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advance past the current character
    ///
    /// At end of input the cursor is returned unchanged.
    pub fn next(self) -> Self {
        match self.value() {
            Some(ch) => Cursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
                depth: self.depth,
            },
            None => self,
        }
    }

    /// Get the current offset in the text
    ///
    /// For end-of-input cursors this is the length of the text.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.offset >= self.text.len()
    }

    /// The complete input text
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The unconsumed part of the input
    pub fn remaining(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// Number of rules the cursor is currently nested in
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Same position at a different rule nesting depth
    pub fn with_depth(self, depth: usize) -> Self {
        Cursor { depth, ..self }
    }

    /// Consume the cursor and return the input text and current offset
    pub fn inner(self) -> (&'code str, usize) {
        (self.text, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cursor = Cursor::new("hello\nworld");

        assert_eq!(cursor.value(), Some('h'));

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('e'));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_eof() {
        let mut cursor = Cursor::new("ab");

        assert_eq!(cursor.value(), Some('a'));
        cursor = cursor.next();
        assert_eq!(cursor.value(), Some('b'));

        cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_next_at_eof_stays_put() {
        let cursor = Cursor::new("x").next();
        assert!(cursor.eos());

        let again = cursor.next();
        assert_eq!(again, cursor);
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");

        assert!(cursor.eos());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn test_multibyte_characters() {
        let cursor = Cursor::new("åä!");

        assert_eq!(cursor.value(), Some('å'));
        let cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.value(), Some('ä'));
        let cursor = cursor.next();
        assert_eq!(cursor.remaining(), "!");
    }

    #[test]
    fn test_copy_independence() {
        let cursor = Cursor::new("abcd");

        let saved_at_a = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('b'));

        // Saved copies are unaffected
        assert_eq!(saved_at_a.value(), Some('a'));

        let saved_at_b = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('c'));

        assert_eq!(saved_at_a.next().value(), Some('b'));
        assert_eq!(saved_at_b.next().value(), Some('c'));
    }

    #[test]
    fn test_source_and_inner() {
        let cursor = Cursor::new("xyz").next().next();

        assert_eq!(cursor.source(), "xyz");
        assert_eq!(cursor.remaining(), "z");
        assert_eq!(cursor.inner(), ("xyz", 2));
    }

    #[test]
    fn test_depth_survives_advancing() {
        let cursor = Cursor::new("abc").with_depth(3);
        assert_eq!(cursor.depth(), 3);

        let cursor = cursor.next();
        assert_eq!(cursor.depth(), 3);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.with_depth(0), Cursor::new("abc").next());
    }
}
