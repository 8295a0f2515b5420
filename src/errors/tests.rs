//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.x".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalLexeme {
            lexeme: "@".to_string(),
        },
        position(1, 10),
    );

    assert_eq!(error.get_error_name(), "IllegalLexeme");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::IllegalLexeme {
            lexeme: "@".to_string()
        }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::ResourceAlreadyClosed, position(42, 7));

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(error.get_position().file.as_str(), "test.x");
}

#[test]
fn test_resource_already_closed_error() {
    let error = Error::new(ErrorImpl::ResourceAlreadyClosed, position(0, 0));

    assert_eq!(error.get_error_name(), "ResourceAlreadyClosed");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_source_unavailable_error() {
    let error = Error::new(
        ErrorImpl::SourceUnavailable {
            path: "missing.x".to_string(),
            reason: "No such file or directory".to_string(),
        },
        position(0, 0),
    );

    assert_eq!(error.get_error_name(), "SourceUnavailable");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_names_lexeme() {
    let error = Error::new(
        ErrorImpl::IllegalLexeme {
            lexeme: "#".to_string(),
        },
        position(3, 4),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`#`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::IllegalLexeme {
            lexeme: "@".to_string(),
        },
        position(2, 5),
    );

    assert_eq!(error.to_string(), "illegal character: \"@\" at test.x:2:5");
}
