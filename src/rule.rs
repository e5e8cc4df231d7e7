use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParseError};
use crate::outcome::{Outcome, ParseResult};
use crate::parser::{BoxedParser, Parser};
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

/// Rule nesting allowed before a parse is refused
///
/// Each nested rule costs several combinator frames of stack; this keeps
/// grammars such as JSON well inside a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

struct RuleCell<V> {
    name: Cow<'static, str>,
    max_depth: usize,
    body: OnceCell<BoxedParser<V>>,
}

/// Named, shareable reference to a grammar rule whose body is installed later
///
/// Handles are cheap to clone and may be embedded in other parsers before the
/// rule itself is defined, which is how self-referential grammars are built:
///
/// ```
/// use seqcomb::rule::Rule;
/// use seqcomb::utf8::char::is_char;
/// use seqcomb::{Element, MapExt, ParserExt, sequence};
///
/// // nested = '(' nested? ')'
/// let (nested, definition) = Rule::<usize>::declare("nested");
/// let body = sequence(vec![
///     Element::skip(is_char('(')),
///     Element::keep((), nested.clone()).optional(),
///     Element::skip(is_char(')')),
/// ])
/// .map(|mut captures| captures.take(&()).map_or(1, |depth: usize| depth + 1));
/// let nested = definition.define(body.boxed());
///
/// assert_eq!(seqcomb::parse(&nested, "((()))").unwrap(), 3);
/// ```
///
/// Every entry into a rule counts one level of nesting on the cursor. Entering
/// a rule that is already `max_depth` levels deep raises
/// [`ParseError::TooDeep`] instead of recursing further.
///
/// A cycle of rules keeps itself alive; grammars are meant to be built once
/// and kept for the life of the process.
pub struct Rule<V> {
    cell: Arc<RuleCell<V>>,
}

/// One-shot handle that installs the body of a declared [`Rule`]
pub struct RuleDefinition<V> {
    cell: Arc<RuleCell<V>>,
}

impl<V> Rule<V> {
    /// Declare a rule without a body yet, limited to [`DEFAULT_MAX_DEPTH`]
    pub fn declare(name: impl Into<Cow<'static, str>>) -> (Rule<V>, RuleDefinition<V>) {
        Self::declare_with_max_depth(name, DEFAULT_MAX_DEPTH)
    }

    /// Declare a rule that refuses to be entered at `max_depth` or deeper
    pub fn declare_with_max_depth(
        name: impl Into<Cow<'static, str>>,
        max_depth: usize,
    ) -> (Rule<V>, RuleDefinition<V>) {
        let cell = Arc::new(RuleCell {
            name: name.into(),
            max_depth,
            body: OnceCell::new(),
        });
        (
            Rule {
                cell: Arc::clone(&cell),
            },
            RuleDefinition { cell },
        )
    }

    pub fn is_defined(&self) -> bool {
        self.cell.body.get().is_some()
    }
}

impl<V> RuleDefinition<V> {
    /// Install the body and return a handle to the now complete rule
    pub fn define(self, parser: BoxedParser<V>) -> Rule<V> {
        // the definition handle is unique, so the cell is still empty
        let _ = self.cell.body.set(parser);
        Rule { cell: self.cell }
    }
}

impl<V> Clone for Rule<V> {
    fn clone(&self) -> Self {
        Rule {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<V> Parser for Rule<V> {
    type Output = V;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let (code, position) = cursor.inner();
        let Some(body) = self.cell.body.get() else {
            return Err(ParseError::UndefinedRule {
                rule: self.cell.name.clone(),
                loc: CodeLoc::new(code, position),
            });
        };

        let depth = cursor.depth();
        if depth >= self.cell.max_depth {
            debug!(rule = %self.cell.name, depth, position, "rule nesting limit reached");
            return Err(ParseError::TooDeep {
                rule: self.cell.name.clone(),
                limit: self.cell.max_depth,
                loc: CodeLoc::new(code, position),
            });
        }

        Ok(match body.parse(cursor.with_depth(depth + 1))? {
            Outcome::Success { value, cursor: next } => {
                Outcome::success(value, next.with_depth(depth))
            }
            Outcome::Failure { .. } => Outcome::failure(cursor),
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.cell.name)
    }
}
