use std::fmt;

use thiserror::Error;

use crate::io::MapIoError;
use crate::model::Kind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line={}, column={}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapErrorCode {
    MalformedDocument,
    MissingIdentifier,
    MalformedAttribute,
    LookupNotFound,
    InvalidActionSplit,
    InvalidArgumentShape,
    Io,
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("malformed map markup: {message} ({location})")]
    MalformedDocument {
        message: String,
        location: SourceLocation,
    },
    #[error("<{tag}> element #{element_index} has no uid attribute ({location})", tag = .kind.tag())]
    MissingIdentifier {
        kind: Kind,
        element_index: usize,
        location: SourceLocation,
    },
    #[error(
        "<{tag}> element #{element_index}: attribute '{attribute}' value '{value}' is not a valid {expected} ({location})",
        tag = .kind.tag()
    )]
    MalformedAttribute {
        kind: Kind,
        attribute: String,
        value: String,
        expected: &'static str,
        element_index: usize,
        location: SourceLocation,
    },
    #[error("{kind:?} with uid '{uid}' not found")]
    LookupNotFound { kind: Kind, uid: String },
    #[error(
        "trigger '{uid}': chunk #{chunk_index} ends with a 'skip next trigger action' action; \
move it away from the end of the chunk"
    )]
    InvalidActionSplit { uid: String, chunk_index: usize },
    #[error("{operation}: invalid argument '{argument}': {reason}")]
    InvalidArgumentShape {
        operation: &'static str,
        argument: String,
        reason: String,
    },
    #[error(transparent)]
    Io(#[from] MapIoError),
}

impl MapError {
    pub fn code(&self) -> MapErrorCode {
        match self {
            MapError::MalformedDocument { .. } => MapErrorCode::MalformedDocument,
            MapError::MissingIdentifier { .. } => MapErrorCode::MissingIdentifier,
            MapError::MalformedAttribute { .. } => MapErrorCode::MalformedAttribute,
            MapError::LookupNotFound { .. } => MapErrorCode::LookupNotFound,
            MapError::InvalidActionSplit { .. } => MapErrorCode::InvalidActionSplit,
            MapError::InvalidArgumentShape { .. } => MapErrorCode::InvalidArgumentShape,
            MapError::Io(_) => MapErrorCode::Io,
        }
    }

    pub(crate) fn invalid_argument(
        operation: &'static str,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MapError::InvalidArgumentShape {
            operation,
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}
