use super::value::Json;
use crate::any::any;
use crate::eoi::end_of_input;
use crate::expect::ExpectExt;
use crate::filter_map::FilterMapExt;
use crate::many::many;
use crate::map::MapExt;
use crate::parser::{BoxedParser, ParserExt};
use crate::rule::Rule;
use crate::sequence::{Captures, Element, Sequence, field, sequence};
use crate::utf8::{any_of, digit, is_char, literal, satisfies, whitespace};
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Number {
    Sign,
    Integer,
    Fraction,
    Exponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Integer {
    Lead,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Fraction {
    Point,
    Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Exponent {
    Marker,
    Sign,
    Digits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Escape {
    Unit,
    Piece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Text {
    Pieces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Item {
    First,
    Rest,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Member {
    Key,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Container {
    Items,
}

/// Decoded unit of string content
#[derive(Debug, Clone, Copy, PartialEq)]
enum Piece {
    Char(char),
    /// UTF-16 code unit from a `\u` escape
    Unit(u16),
}

fn text<K: Hash + Eq>(captures: Captures<K, String>) -> String {
    captures.into_values().collect()
}

fn digits() -> BoxedParser<String> {
    many(digit())
        .at_least(1)
        .map(|ds| ds.into_iter().collect::<String>())
        .boxed()
}

fn integer() -> BoxedParser<String> {
    let nonzero: Sequence<Integer, String> = sequence(vec![
        Element::keep(Integer::Lead, any_of("123456789")),
        Element::keep(
            Integer::Rest,
            many(digit()).map(|ds| ds.into_iter().collect::<String>()),
        ),
    ]);
    any(vec![
        literal("0", String::from("0")).boxed(),
        nonzero.map(text).boxed(),
    ])
    .boxed()
}

fn fraction() -> BoxedParser<String> {
    let parts: Sequence<Fraction, String> = sequence(vec![
        Element::keep(Fraction::Point, is_char('.')),
        Element::keep(Fraction::Digits, digits()),
    ]);
    parts.map(text).boxed()
}

fn exponent() -> BoxedParser<String> {
    let parts: Sequence<Exponent, String> = sequence(vec![
        Element::keep(Exponent::Marker, any_of("eE")),
        Element::keep(Exponent::Sign, any_of("+-")).optional(),
        Element::keep(Exponent::Digits, digits()),
    ]);
    parts.map(text).boxed()
}

fn number() -> BoxedParser<Json> {
    let parts: Sequence<Number, String> = sequence(vec![
        Element::keep(Number::Sign, is_char('-')).optional(),
        Element::keep(Number::Integer, integer()),
        Element::keep(Number::Fraction, fraction()).optional(),
        Element::keep(Number::Exponent, exponent()).optional(),
    ]);
    parts
        .filter_map(|captures| text(captures).parse::<f64>().ok())
        .map(Json::Number)
        .named("number")
        .boxed()
}

fn unescape(c: char) -> char {
    match c {
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        other => other,
    }
}

fn hex_unit() -> BoxedParser<u16> {
    many(satisfies(|c: char| c.is_ascii_hexdigit(), "hex digit"))
        .exactly(4)
        .filter_map(|ds| u16::from_str_radix(&ds.into_iter().collect::<String>(), 16).ok())
        .boxed()
}

fn escape() -> BoxedParser<Piece> {
    let unicode: Sequence<Escape, u16> = sequence(vec![
        Element::skip(is_char('u')),
        Element::keep(
            Escape::Unit,
            hex_unit().expect("expected four hex digits after \\u"),
        ),
    ]);
    let body = any(vec![
        any_of("\"\\/bfnrt")
            .map(|c| Piece::Char(unescape(c)))
            .boxed(),
        unicode
            .filter_map(field(Escape::Unit))
            .map(Piece::Unit)
            .boxed(),
    ]);
    let parts: Sequence<Escape, Piece> = sequence(vec![
        Element::skip(is_char('\\')),
        Element::keep(Escape::Piece, body.expect("invalid escape sequence")),
    ]);
    parts.filter_map(field(Escape::Piece)).boxed()
}

fn character() -> BoxedParser<Piece> {
    any(vec![
        satisfies(|c: char| c != '"' && c != '\\' && c >= ' ', "string character")
            .map(Piece::Char)
            .boxed(),
        escape(),
    ])
    .boxed()
}

fn flush(text: &mut String, units: &mut Vec<u16>) {
    text.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// Join string pieces, pairing up surrogates from consecutive `\u` escapes
fn decode(pieces: Vec<Piece>) -> String {
    let mut text = String::new();
    let mut units = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Unit(unit) => units.push(unit),
            Piece::Char(c) => {
                flush(&mut text, &mut units);
                text.push(c);
            }
        }
    }
    flush(&mut text, &mut units);
    text
}

fn string() -> BoxedParser<String> {
    let parts: Sequence<Text, Vec<Piece>> = sequence(vec![
        Element::skip(is_char('"')),
        Element::keep(Text::Pieces, many(character())),
        Element::skip(is_char('"').expect("expected closing '\"'")),
    ]);
    parts
        .filter_map(field(Text::Pieces))
        .map(decode)
        .named("string")
        .boxed()
}

/// `item (',' ws item!)*`
///
/// Whitespace after the comma is consumed before the commit point so a
/// missing item is reported where it should start.
fn comma_separated<T, F>(item: F, message: &'static str) -> BoxedParser<Vec<T>>
where
    T: 'static,
    F: Fn() -> BoxedParser<T>,
{
    let next: Sequence<Item, T> = sequence(vec![
        Element::skip(is_char(',')),
        Element::skip(whitespace()),
        Element::keep(Item::Value, item().expect(message)),
    ]);
    let parts: Sequence<Item, Vec<T>> = sequence(vec![
        Element::keep(Item::First, item().map(|first| vec![first])),
        Element::keep(Item::Rest, many(next.filter_map(field(Item::Value)))),
    ]);
    parts
        .map(|captures| captures.into_values().flatten().collect())
        .boxed()
}

fn element(value: &Rule<Json>) -> BoxedParser<Json> {
    let parts: Sequence<Item, Json> = sequence(vec![
        Element::skip(whitespace()),
        Element::keep(Item::Value, value.clone()),
        Element::skip(whitespace()),
    ]);
    parts.filter_map(field(Item::Value)).boxed()
}

fn array(value: &Rule<Json>) -> BoxedParser<Json> {
    let parts: Sequence<Container, Vec<Json>> = sequence(vec![
        Element::skip(is_char('[')),
        Element::keep(
            Container::Items,
            comma_separated(|| element(value), "expected a value after ','"),
        )
        .optional(),
        Element::skip(whitespace()),
        Element::skip(is_char(']').expect("expected ']'")),
    ]);
    parts
        .map(|mut captures| Json::Array(captures.take(&Container::Items).unwrap_or_default()))
        .named("array")
        .boxed()
}

fn member(value: &Rule<Json>) -> BoxedParser<(String, Json)> {
    let parts: Sequence<Member, Json> = sequence(vec![
        Element::skip(whitespace()),
        Element::keep(Member::Key, string()),
        Element::skip(whitespace()),
        Element::skip(is_char(':').expect("expected ':'")),
        Element::skip(whitespace()),
        Element::keep(Member::Value, value.clone().expect("expected a value")),
        Element::skip(whitespace()),
    ]);
    parts
        .filter_map(|mut captures| {
            let key = captures.take(&Member::Key)?.into_string()?;
            let value = captures.take(&Member::Value)?;
            Some((key, value))
        })
        .boxed()
}

fn object(value: &Rule<Json>) -> BoxedParser<Json> {
    let parts: Sequence<Container, Vec<(String, Json)>> = sequence(vec![
        Element::skip(is_char('{')),
        Element::keep(
            Container::Items,
            comma_separated(|| member(value), "expected a member after ','"),
        )
        .optional(),
        Element::skip(whitespace()),
        Element::skip(is_char('}').expect("expected '}'")),
    ]);
    parts
        .map(|mut captures| {
            let members = captures.take(&Container::Items).unwrap_or_default();
            Json::Object(members.into_iter().collect())
        })
        .named("object")
        .boxed()
}

/// Build the JSON element grammar: one value with optional surrounding whitespace
///
/// Trailing input is left alone; [`document`] requires that the value spans
/// the whole input. The recursive `value` rule keeps itself alive, so this is
/// only built once, behind [`crate::json::grammar`].
pub(super) fn element_grammar() -> BoxedParser<Json> {
    let (value, definition) = Rule::declare("value");
    let element = element(&value);
    definition.define(
        any(vec![
            literal("null", Json::Null).boxed(),
            literal("false", Json::Bool(false)).boxed(),
            literal("true", Json::Bool(true)).boxed(),
            number(),
            object(&value),
            array(&value),
            string().map(Json::String).boxed(),
        ])
        .boxed(),
    );
    element
}

/// Build the grammar for a complete JSON text
pub(super) fn document() -> BoxedParser<Json> {
    let parts: Sequence<Item, Json> = sequence(vec![
        Element::keep(Item::Value, element_grammar()),
        Element::skip(end_of_input().expect("unexpected trailing characters")),
    ]);
    parts
        .filter_map(field(Item::Value))
        .named("json document")
        .boxed()
}
