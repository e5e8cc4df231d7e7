use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A location in the parsed input
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CodeLoc<'code> {
    code: &'code str,
    /// The position in `code` where the error was detected
    loc: usize,
}

impl<'code> CodeLoc<'code> {
    pub fn new(code: &'code str, loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// The input from the error position onwards
    pub fn remaining(&self) -> &'code str {
        self.code.get(self.loc..).unwrap_or("")
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: We return byte offset instead of column number because column
    /// calculation depends on the rendering context (tab width, wide and
    /// zero-width characters). The byte offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = self.code.get(..self.loc).unwrap_or(self.code);
        let line = 1 + before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: before.len() - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.code.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < first || current_line > last {
                continue;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                // Align the pointer by characters, not bytes
                let column = content
                    .get(..pos.byte_offset)
                    .map_or(pos.byte_offset, |head| head.chars().count());
                let pointer_offset = prefix.len() + column;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }

    /// Context lines joined for display
    pub fn context(&self) -> String {
        self.context_lines().join("\n")
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )
    }
}

/// Fatal parse errors
///
/// These are never produced for an ordinary non-match inside a grammar; see
/// [`crate::outcome::Outcome::Failure`] for that.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError<'code> {
    /// A commit point was reached and the required construct was missing
    #[error("Syntax error at {loc}: {message}\n\n{}", .loc.context())]
    Expected {
        message: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// The top-level parser did not match
    #[error("Input does not match {parser} at {loc}\n\n{}", .loc.context())]
    NoMatch { parser: String, loc: CodeLoc<'code> },
    /// A rule was declared but its definition was never installed
    #[error("Rule '{rule}' used before it was defined at {loc}")]
    UndefinedRule {
        rule: Cow<'static, str>,
        loc: CodeLoc<'code>,
    },
    /// Input nests rules deeper than the rule allows
    #[error("Rule '{rule}' nested deeper than {limit} levels at {loc}\n\n{}", .loc.context())]
    TooDeep {
        rule: Cow<'static, str>,
        limit: usize,
        loc: CodeLoc<'code>,
    },
}

impl<'code> ParseError<'code> {
    pub fn loc(&self) -> CodeLoc<'code> {
        match self {
            ParseError::Expected { loc, .. }
            | ParseError::NoMatch { loc, .. }
            | ParseError::UndefinedRule { loc, .. }
            | ParseError::TooDeep { loc, .. } => *loc,
        }
    }

    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// The unconsumed input at the error position
    pub fn remaining(&self) -> &'code str {
        self.loc().remaining()
    }
}
