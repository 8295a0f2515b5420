use std::fmt::Display;

use crate::Position;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalLexeme { .. } => "IllegalLexeme",
            ErrorImpl::ResourceAlreadyClosed => "ResourceAlreadyClosed",
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalLexeme { lexeme } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid operator or separator",
                lexeme
            )),
            ErrorImpl::ResourceAlreadyClosed => ErrorTip::Suggestion(String::from(
                "the source was read again after the scanner reached end of stream",
            )),
            ErrorImpl::SourceUnavailable { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {lexeme:?}")]
    IllegalLexeme { lexeme: String },
    #[error("source read after it was closed")]
    ResourceAlreadyClosed,
    #[error("could not read {path:?}: {reason}")]
    SourceUnavailable { path: String, reason: String },
}
