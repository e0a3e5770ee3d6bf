use std::borrow::Cow;

use crate::{token::unescape, Error};

/// A lazy iterator over the unescaped reference tokens of a JSON pointer.
///
/// Tokens are borrowed from the pointer unless they contain escape sequences.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Segments<'a> {
    /// Validate `pointer` and prepare to iterate over its tokens.
    ///
    /// # Errors
    ///
    /// If `pointer` is not empty and does not start with `/`.
    pub fn new(pointer: &'a str) -> Result<Self, Error> {
        if pointer.is_empty() {
            return Ok(Segments { remaining: None });
        }
        match pointer.strip_prefix('/') {
            Some(rest) => Ok(Segments {
                remaining: Some(rest),
            }),
            None => {
                tracing::debug!(pointer, "Rejected JSON pointer without a leading '/'");
                Err(Error::invalid_pointer(pointer))
            }
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining?;
        let raw = match remaining.split_once('/') {
            Some((raw, rest)) => {
                self.remaining = Some(rest);
                raw
            }
            None => {
                self.remaining = None;
                remaining
            }
        };
        Some(unescape(raw))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// Iterate over the unescaped tokens of `pointer`.
///
/// # Errors
///
/// If `pointer` is not empty and does not start with `/`.
pub fn pointer_segments(pointer: &str) -> Result<Segments<'_>, Error> {
    Segments::new(pointer)
}

/// Parse `pointer` into owned, unescaped tokens.
///
/// # Errors
///
/// If `pointer` is not empty and does not start with `/`.
pub fn parse(pointer: &str) -> Result<Vec<String>, Error> {
    Ok(Segments::new(pointer)?.map(Cow::into_owned).collect())
}
