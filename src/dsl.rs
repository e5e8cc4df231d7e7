//! A tiny function-declaration language
//!
//! ```text
//! pub fn main(int count, str name = world) { }
//! ```
//!
//! Only the declaration is parsed; bodies must be empty.

use crate::eoi::end_of_input;
use crate::error::ParseError;
use crate::expect::ExpectExt;
use crate::filter_map::FilterMapExt;
use crate::many::{Many, many};
use crate::map::MapExt;
use crate::parser::{BoxedParser, ParserExt};
use crate::sequence::{Element, Sequence, field, sequence};
use crate::utf8::satisfies::Satisfies;
use crate::utf8::{is_char, letter, literal, whitespace, whitespace_char};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionArg {
    pub ty: String,
    pub name: String,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub visibility: Visibility,
    pub name: String,
    pub args: Vec<FunctionArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Decl {
    Visibility,
    Name,
    Args,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Arg {
    Type,
    Name,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum List {
    First,
    Rest,
    Item,
}

/// Values captured by the declaration sequence
enum Part {
    Visibility(Visibility),
    Name(String),
    Args(Vec<FunctionArg>),
}

impl From<Visibility> for Part {
    fn from(visibility: Visibility) -> Self {
        Part::Visibility(visibility)
    }
}

impl From<String> for Part {
    fn from(name: String) -> Self {
        Part::Name(name)
    }
}

impl From<Vec<FunctionArg>> for Part {
    fn from(args: Vec<FunctionArg>) -> Self {
        Part::Args(args)
    }
}

/// One or more whitespace characters
fn ws1() -> Many<Satisfies<fn(char) -> bool>> {
    many(whitespace_char()).at_least(1)
}

fn ident() -> BoxedParser<String> {
    many(letter())
        .at_least(1)
        .map(|chars| chars.into_iter().collect::<String>())
        .named("identifier")
        .boxed()
}

/// `ws '=' ws ident!`
fn default_value() -> BoxedParser<String> {
    let parts: Sequence<Arg, String> = sequence(vec![
        Element::skip(whitespace()),
        Element::skip(is_char('=')),
        Element::skip(whitespace()),
        Element::keep(Arg::Default, ident().expect("expected a default value")),
    ]);
    parts.filter_map(field(Arg::Default)).boxed()
}

fn arg() -> BoxedParser<FunctionArg> {
    let parts: Sequence<Arg, String> = sequence(vec![
        Element::keep(Arg::Type, ident()),
        Element::skip(ws1()),
        Element::keep(Arg::Name, ident()),
        Element::keep(Arg::Default, default_value()).optional(),
    ]);
    parts
        .filter_map(|mut captures| {
            Some(FunctionArg {
                ty: captures.take(&Arg::Type)?,
                name: captures.take(&Arg::Name)?,
                default: captures.take(&Arg::Default),
            })
        })
        .named("argument")
        .boxed()
}

/// `arg (ws ',' ws arg)*`
fn args() -> BoxedParser<Vec<FunctionArg>> {
    let next: Sequence<List, FunctionArg> = sequence(vec![
        Element::skip(whitespace()),
        Element::skip(is_char(',')),
        Element::skip(whitespace()),
        Element::keep(List::Item, arg()),
    ]);
    let parts: Sequence<List, Vec<FunctionArg>> = sequence(vec![
        Element::keep(List::First, arg().map(|first| vec![first])),
        Element::keep(List::Rest, many(next.filter_map(field(List::Item)))),
    ]);
    parts
        .map(|captures| captures.into_values().flatten().collect())
        .boxed()
}

/// `"pub" ws1`
fn public() -> BoxedParser<Visibility> {
    let parts: Sequence<Decl, Visibility> = sequence(vec![
        Element::keep(Decl::Visibility, literal("pub", Visibility::Public)),
        Element::skip(ws1()),
    ]);
    parts.filter_map(field(Decl::Visibility)).boxed()
}

/// Build the grammar for a single function declaration spanning the whole input
pub fn grammar() -> BoxedParser<FunctionDecl> {
    let parts: Sequence<Decl, Part> = sequence(vec![
        Element::skip(whitespace()),
        Element::keep(Decl::Visibility, public()).optional(),
        Element::skip(literal("fn", ())),
        Element::skip(ws1()),
        Element::keep(Decl::Name, ident().expect("expected a function name")),
        Element::skip(whitespace()),
        Element::skip(is_char('(')),
        Element::skip(whitespace()),
        Element::keep(Decl::Args, args()).optional(),
        Element::skip(whitespace()),
        Element::skip(is_char(')').expect("expected ')'")),
        Element::skip(whitespace()),
        Element::skip(is_char('{').expect("expected '{'")),
        Element::skip(whitespace()),
        Element::skip(is_char('}').expect("expected '}'")),
        Element::skip(whitespace()),
        Element::skip(end_of_input().expect("unexpected trailing characters")),
    ]);
    parts
        .filter_map(|mut captures| {
            let visibility = match captures.take(&Decl::Visibility) {
                Some(Part::Visibility(visibility)) => visibility,
                _ => Visibility::default(),
            };
            let name = match captures.take(&Decl::Name)? {
                Part::Name(name) => name,
                _ => return None,
            };
            let args = match captures.take(&Decl::Args) {
                Some(Part::Args(args)) => args,
                _ => Vec::new(),
            };
            Some(FunctionDecl {
                visibility,
                name,
                args,
            })
        })
        .named("function declaration")
        .boxed()
}

static FUNCTION: Lazy<BoxedParser<FunctionDecl>> = Lazy::new(grammar);

/// Parse a function declaration
pub fn parse(input: &str) -> Result<FunctionDecl, ParseError<'_>> {
    crate::parser::parse(&*FUNCTION, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::parser::Parser;

    fn expected_arg(ty: &str, name: &str, default: Option<&str>) -> FunctionArg {
        FunctionArg {
            ty: ty.to_string(),
            name: name.to_string(),
            default: default.map(str::to_string),
        }
    }

    #[test]
    fn test_public_function_with_argument() {
        let decl = parse("pub fn main(int i) {  }").unwrap();

        assert_eq!(
            decl,
            FunctionDecl {
                visibility: Visibility::Public,
                name: String::from("main"),
                args: vec![expected_arg("int", "i", None)],
            }
        );
    }

    #[test]
    fn test_private_function_without_arguments() {
        let decl = parse("fn main() {}").unwrap();

        assert_eq!(decl.visibility, Visibility::Private);
        assert_eq!(decl.name, "main");
        assert!(decl.args.is_empty());
    }

    #[test]
    fn test_arguments_with_defaults() {
        let decl = parse("  fn greet( str name = world , int times ) {\n}\n").unwrap();

        assert_eq!(
            decl.args,
            vec![
                expected_arg("str", "name", Some("world")),
                expected_arg("int", "times", None),
            ]
        );
    }

    #[test]
    fn test_spaces_around_separators_are_optional() {
        let decl = parse("fn f(int a,int b=c){}").unwrap();

        assert_eq!(
            decl.args,
            vec![expected_arg("int", "a", None), expected_arg("int", "b", Some("c"))]
        );
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let error = parse("fn (int i) {}").unwrap_err();

        match error {
            ParseError::Expected { message, loc } => {
                assert_eq!(message, "expected a function name");
                assert_eq!(loc.position(), 3);
            }
            other => panic!("Expected Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_argument_list_is_fatal() {
        let error = parse("fn main(int i {}").unwrap_err();

        assert!(matches!(error, ParseError::Expected { .. }));
        assert_eq!(error.position(), 14);
    }

    #[test]
    fn test_missing_default_value_is_fatal() {
        let error = parse("pub fn main(int i = ) {}").unwrap_err();

        match error {
            ParseError::Expected { message, loc } => {
                assert_eq!(message, "expected a default value");
                assert_eq!(loc.position(), 20);
            }
            other => panic!("Expected Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_body_is_fatal() {
        let error = parse("pub fn main()").unwrap_err();

        match error {
            ParseError::Expected { message, .. } => assert_eq!(message, "expected '{'"),
            other => panic!("Expected Expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_input_is_fatal() {
        let error = parse("fn main() {} fn").unwrap_err();
        assert_eq!(error.position(), 13);
    }

    #[test]
    fn test_not_a_declaration() {
        for input in ["", "function main() {}", "pub main() {}", "fnmain() {}"] {
            let error = parse(input).unwrap_err();
            assert!(
                matches!(error, ParseError::NoMatch { .. }),
                "Expected NoMatch for: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_pub_needs_whitespace() {
        let outcome = public().parse(Cursor::new("pubfn")).unwrap();
        assert!(!outcome.is_success());
    }
}
