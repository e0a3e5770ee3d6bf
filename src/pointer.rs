//! Compiled JSON pointers and pointer composition.
use std::{fmt, str::FromStr};

use crate::{
    ops,
    segments::Segments,
    token::write_escaped,
    value::Json,
    Error,
};

/// The pointer to the whole document.
pub const NIL: &str = "";

/// Append a raw `token` to `pointer`, escaping it.
///
/// ```rust
/// assert_eq!(json_pointer::append("/foo", "b~a/r"), "/foo/b~0a~1r");
/// assert_eq!(json_pointer::append(json_pointer::NIL, "bar"), "/bar");
/// ```
#[must_use]
pub fn append(pointer: &str, token: &str) -> String {
    let mut buffer = String::with_capacity(pointer.len() + token.len() + 1);
    buffer.push_str(pointer);
    buffer.push('/');
    write_escaped(&mut buffer, token);
    buffer
}

/// A parsed JSON pointer that can be applied to any number of values.
///
/// Parsing happens once, in [`JsonPointer::new`]; every operation then walks the stored tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    pointer: String,
    tokens: Vec<String>,
}

impl JsonPointer {
    /// Parse a pointer.
    ///
    /// # Errors
    ///
    /// If `pointer` is not empty and does not start with `/`.
    pub fn new(pointer: &str) -> Result<JsonPointer, Error> {
        let tokens = Segments::new(pointer)?.map(String::from).collect();
        tracing::trace!(pointer, "Compiled JSON pointer");
        Ok(JsonPointer {
            pointer: pointer.to_string(),
            tokens,
        })
    }
    /// The pointer to the whole document.
    #[must_use]
    pub fn nil() -> JsonPointer {
        JsonPointer::default()
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pointer
    }
    /// Unescaped reference tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.tokens.is_empty()
    }
    /// Number of reference tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    /// A new pointer with `token` appended.
    #[must_use]
    pub fn join(&self, token: &str) -> JsonPointer {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(token.to_string());
        JsonPointer {
            pointer: append(&self.pointer, token),
            tokens,
        }
    }
    /// A new pointer with an array index appended.
    #[must_use]
    pub fn join_index(&self, idx: usize) -> JsonPointer {
        let mut buffer = itoa::Buffer::new();
        self.join(buffer.format(idx))
    }
    /// Read the value this pointer refers to.
    ///
    /// Returns `Ok(None)` if the last token refers to something that does not exist.
    ///
    /// # Errors
    ///
    /// If a token has to be applied to a scalar, `null`, or a missing value.
    pub fn get<'s>(&self, subject: &'s Json) -> Result<Option<&'s Json>, Error> {
        ops::get(&self.tokens, subject)
    }
    /// Return a copy of `subject` with `value` stored at this pointer.
    ///
    /// Only the containers on the path are copied, everything else is shared with `subject`.
    ///
    /// # Errors
    ///
    /// If a token has to be applied to a scalar, `null`, or a missing value, or if a token
    /// applied to an array is not an index within its length.
    pub fn set(&self, subject: &Json, value: Json) -> Result<Json, Error> {
        ops::set(&self.tokens, subject, value)
    }
    /// Store `value` at this pointer, modifying `subject`.
    ///
    /// The nil pointer leaves `subject` unchanged. On error, containers visited before the
    /// failing token may already be detached from trees they were shared with.
    ///
    /// # Errors
    ///
    /// Same as [`JsonPointer::set`].
    pub fn assign(&self, subject: &mut Json, value: Json) -> Result<(), Error> {
        ops::assign(&self.tokens, subject, value)
    }
    /// Return a copy of `subject` without the value at this pointer.
    ///
    /// Array elements are replaced by holes. Deleting something that does not exist is not an
    /// error as long as its parent exists.
    ///
    /// # Errors
    ///
    /// If a token before the last one has to be applied to a scalar, `null`, or a missing value.
    pub fn unset(&self, subject: &Json) -> Result<Json, Error> {
        ops::unset(&self.tokens, subject)
    }
    /// Delete the value at this pointer from `subject`.
    ///
    /// # Errors
    ///
    /// Same as [`JsonPointer::unset`].
    pub fn remove(&self, subject: &mut Json) -> Result<(), Error> {
        ops::remove(&self.tokens, subject)
    }
    /// Bind a subject, leaving the value to be provided later.
    pub fn setter<'a>(&'a self, subject: &'a Json) -> impl Fn(Json) -> Result<Json, Error> + 'a {
        move |value| self.set(subject, value)
    }
    /// Bind a subject for repeated in-place assignments.
    pub fn assigner<'a>(
        &'a self,
        subject: &'a mut Json,
    ) -> impl FnMut(Json) -> Result<(), Error> + 'a {
        move |value| self.assign(&mut *subject, value)
    }
}

impl FromStr for JsonPointer {
    type Err = Error;

    fn from_str(pointer: &str) -> Result<Self, Self::Err> {
        JsonPointer::new(pointer)
    }
}

impl TryFrom<&str> for JsonPointer {
    type Error = Error;

    fn try_from(pointer: &str) -> Result<Self, Self::Error> {
        JsonPointer::new(pointer)
    }
}

impl AsRef<str> for JsonPointer {
    fn as_ref(&self) -> &str {
        &self.pointer
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer)
    }
}
