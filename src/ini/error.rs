use std::fmt;

use thiserror::Error;

use crate::schema::ValueKind;

/// What made a line malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    UnterminatedSection,
    EmptySectionName,
    MissingEquals,
    MissingKey,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyntaxErrorKind::UnterminatedSection => "section header is missing ']'",
            SyntaxErrorKind::EmptySectionName => "section name is empty",
            SyntaxErrorKind::MissingEquals => "expected 'key = value'",
            SyntaxErrorKind::MissingKey => "assignment has no key",
        })
    }
}

/// A malformed line, reported with its 1-based line number.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("line:{line}, syntax error: {kind}")]
    Syntax { line: usize, kind: SyntaxErrorKind },

    #[error("line:{line}, value type error: key '{key}' expected {expected}, found {value:?}")]
    ValueType {
        line: usize,
        key: String,
        expected: ValueKind,
        value: String,
    },

    #[error("line:{line}, key '{key}' is bound to unsupported type `{type_name}`")]
    UnsupportedFieldKind {
        line: usize,
        key: String,
        type_name: &'static str,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Syntax { line, .. }
            | ParseError::ValueType { line, .. }
            | ParseError::UnsupportedFieldKind { line, .. } => *line,
        }
    }
}
