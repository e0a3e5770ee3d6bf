use core::fmt;

use crate::value::ValueKind;

/// Errors that can occur while parsing a JSON pointer or applying it to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A non-empty pointer does not start with `/`.
    InvalidPointer { pointer: String },
    /// A token can not be applied to the value reached so far.
    Traversal {
        /// The part of the pointer that was traversed successfully.
        cursor: String,
        /// What was found at `cursor`.
        kind: ValueKind,
        /// The token that could not be applied.
        token: String,
    },
    /// A token written into an array is neither `-` nor an index up to its length.
    InvalidIndex { cursor: String, token: String },
}

impl Error {
    pub(crate) fn invalid_pointer(pointer: impl Into<String>) -> Error {
        Error::InvalidPointer {
            pointer: pointer.into(),
        }
    }
    pub(crate) fn traversal(
        cursor: impl Into<String>,
        kind: ValueKind,
        token: impl Into<String>,
    ) -> Error {
        Error::Traversal {
            cursor: cursor.into(),
            kind,
            token: token.into(),
        }
    }
    pub(crate) fn invalid_index(cursor: impl Into<String>, token: impl Into<String>) -> Error {
        Error::InvalidIndex {
            cursor: cursor.into(),
            token: token.into(),
        }
    }
    /// The location at which the operation failed, if it got past parsing.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        match self {
            Error::InvalidPointer { .. } => None,
            Error::Traversal { cursor, .. } | Error::InvalidIndex { cursor, .. } => Some(cursor),
        }
    }
    /// The token that could not be applied, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::InvalidPointer { .. } => None,
            Error::Traversal { token, .. } | Error::InvalidIndex { token, .. } => Some(token),
        }
    }
    /// The kind of value that rejected the token.
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Error::InvalidPointer { .. } => None,
            Error::Traversal { kind, .. } => Some(*kind),
            Error::InvalidIndex { .. } => Some(ValueKind::Array),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPointer { pointer } => {
                f.write_fmt(format_args!("Invalid JSON Pointer: '{pointer}'"))
            }
            Error::Traversal {
                cursor,
                kind,
                token,
            } => {
                let kind = match kind {
                    ValueKind::Undefined | ValueKind::Null => kind.as_str(),
                    ValueKind::Boolean => "a boolean",
                    ValueKind::Number => "a number",
                    ValueKind::String => "a string",
                    ValueKind::Array => "an array",
                    ValueKind::Object => "an object",
                };
                f.write_fmt(format_args!(
                    "Value at '{cursor}' is {kind} and does not have property '{token}'"
                ))
            }
            Error::InvalidIndex { cursor, token } => f.write_fmt(format_args!(
                "Value at '{cursor}' is an array and '{token}' is not a valid array index"
            )),
        }
    }
}

impl std::error::Error for Error {}
