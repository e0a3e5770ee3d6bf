//! Walks over a value tree driven by parsed pointer tokens.
//!
//! Every operation receives the full token list. On failure, the cursor reported in the error is
//! rebuilt from the tokens that were already applied, so successful walks never pay for it.
mod delete;
mod get;
mod write;

pub(crate) use delete::{remove, unset};
pub(crate) use get::get;
pub(crate) use write::{assign, set};

use crate::{pointer::append, value::ValueKind, Error};

/// The pointer made of the first `depth` tokens.
pub(crate) fn cursor(tokens: &[String], depth: usize) -> String {
    tokens[..depth]
        .iter()
        .fold(String::new(), |pointer, token| append(&pointer, token))
}

/// `tokens[depth]` could not be applied to a value of `kind`.
pub(crate) fn traversal_error(tokens: &[String], depth: usize, kind: ValueKind) -> Error {
    let error = Error::traversal(cursor(tokens, depth), kind, tokens[depth].as_str());
    tracing::debug!(%error, "JSON pointer traversal failed");
    error
}

/// `tokens[depth]` is not a valid index into the array reached so far.
pub(crate) fn invalid_index_error(tokens: &[String], depth: usize) -> Error {
    let error = Error::invalid_index(cursor(tokens, depth), tokens[depth].as_str());
    tracing::debug!(%error, "JSON pointer traversal failed");
    error
}
