use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Shape of a JSON value, reported when traversal hits a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PointerError {
    #[error("jsonpointer: a pointer should start with a reference to the root value (/): {pointer:?}")]
    InvalidPointerSyntax { pointer: String },
    #[error("jsonpointer: the JSON document provided is null")]
    NilDocument,
    #[error("jsonpointer: the document does not have the reference {token:?} (token {position})")]
    ReferenceNotFound { token: String, position: usize },
    #[error("jsonpointer: the reference {token:?} is trying to access a field on an array (token {position})")]
    NotAnArrayIndex { token: String, position: usize },
    #[error(
        "jsonpointer: index [{index}] is out of bounds for an array of length {len} (token {position})"
    )]
    IndexOutOfBounds {
        index: i64,
        len: usize,
        position: usize,
    },
    #[error("jsonpointer: the reference {token:?} is trying to access a single {kind} value (token {position})")]
    CannotTraverseScalar {
        token: String,
        position: usize,
        kind: ValueKind,
    },
    #[error("jsonpointer: referenced value has an unexpected shape: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl PointerError {
    /// Zero-based index of the token that failed, if the error came from traversal.
    pub fn position(&self) -> Option<usize> {
        match self {
            PointerError::ReferenceNotFound { position, .. }
            | PointerError::NotAnArrayIndex { position, .. }
            | PointerError::IndexOutOfBounds { position, .. }
            | PointerError::CannotTraverseScalar { position, .. } => Some(*position),
            PointerError::InvalidPointerSyntax { .. }
            | PointerError::NilDocument
            | PointerError::Deserialize(_) => None,
        }
    }
}
