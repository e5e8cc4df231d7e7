use crate::cursor::Cursor;
use crate::map::MapExt;
use crate::outcome::{Outcome, ParseResult};
use crate::parser::{BoxedParser, Parser, ParserExt};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::hash::Hash;
use tracing::trace;

/// Values captured by a [`Sequence`], keyed by element
///
/// Keys are a small enum declared next to each sequence, so fields are
/// looked up by name rather than by position. Iteration follows element order.
#[derive(Debug, Clone, PartialEq)]
pub struct Captures<K: Hash + Eq, V> {
    values: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Captures<K, V> {
    pub fn new() -> Self {
        Captures {
            values: IndexMap::new(),
        }
    }

    /// Record a value, replacing any earlier capture under the same key
    pub fn insert(&mut self, key: K, value: V) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    /// Remove and return a captured value
    pub fn take(&mut self, key: &K) -> Option<V> {
        self.values.shift_remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }

    /// Captured values in element order
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.values.into_values()
    }
}

impl<K: Hash + Eq, V> Default for Captures<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// One step of a [`Sequence`]
///
/// An element is either kept (its value is captured under a key) or skipped
/// (it must still match, but its value is dropped), and either required or
/// optional.
pub struct Element<K, V> {
    parser: BoxedParser<Option<V>>,
    key: Option<K>,
    required: bool,
}

impl<K, V> Element<K, V>
where
    K: 'static,
    V: 'static,
{
    /// A required element whose value is captured under `key`
    pub fn keep<P>(key: K, parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
        P::Output: Into<V>,
    {
        Element {
            parser: parser.map(|value| Some(value.into())).boxed(),
            key: Some(key),
            required: true,
        }
    }

    /// A required element whose value is discarded
    pub fn skip<P>(parser: P) -> Self
    where
        P: Parser + Send + Sync + 'static,
    {
        Element {
            parser: parser.map(|_| None).boxed(),
            key: None,
            required: true,
        }
    }

    /// Make the element optional: a failure is skipped without consuming input
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Parser combinator that applies its elements in order
///
/// The sequence is atomic. If any required element fails, the whole sequence
/// fails at the cursor it was invoked with, whatever the earlier elements
/// consumed.
pub struct Sequence<K, V> {
    elements: Vec<Element<K, V>>,
}

impl<K, V> Sequence<K, V> {
    pub fn new(elements: Vec<Element<K, V>>) -> Self {
        Sequence { elements }
    }
}

impl<K, V> Parser for Sequence<K, V>
where
    K: Clone + Hash + Eq,
{
    type Output = Captures<K, V>;

    fn parse<'code>(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        let mut captures = Captures::new();
        let mut current = cursor;

        for element in &self.elements {
            match element.parser.parse(current)? {
                Outcome::Success { value, cursor: next } => {
                    if let (Some(key), Some(value)) = (&element.key, value) {
                        captures.insert(key.clone(), value);
                    }
                    current = next;
                }
                Outcome::Failure { .. } if !element.required => continue,
                Outcome::Failure { .. } => {
                    trace!(
                        element = %element.parser.name(),
                        offset = current.position(),
                        "required sequence element failed"
                    );
                    return Ok(Outcome::failure(cursor));
                }
            }
        }

        Ok(Outcome::success(captures, current))
    }

    fn name(&self) -> Cow<'_, str> {
        let names: Vec<_> = self
            .elements
            .iter()
            .map(|element| {
                let name = element.parser.name();
                if element.required {
                    name.into_owned()
                } else {
                    format!("{}?", name)
                }
            })
            .collect();
        Cow::Owned(format!("({})", names.join(" ")))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<K, V>(elements: Vec<Element<K, V>>) -> Sequence<K, V> {
    Sequence::new(elements)
}

/// Mapper that pulls a single capture out of a sequence's result
///
/// Pair it with `filter_map` so that a missing capture is a soft failure.
pub fn field<K, V>(key: K) -> impl Fn(Captures<K, V>) -> Option<V>
where
    K: Hash + Eq,
{
    move |mut captures| captures.take(&key)
}
