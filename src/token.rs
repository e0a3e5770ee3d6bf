//! Reference token encoding and interpretation.
use std::borrow::Cow;

use crate::value::JsonArray;

/// Escape a raw token: `~` becomes `~0` and `/` becomes `~1`.
pub fn escape(token: &str) -> Cow<'_, str> {
    if token.contains(['~', '/']) {
        let mut buffer = String::with_capacity(token.len() + 2);
        write_escaped(&mut buffer, token);
        Cow::Owned(buffer)
    } else {
        Cow::Borrowed(token)
    }
}

pub(crate) fn write_escaped(buffer: &mut String, mut token: &str) {
    while let Some(idx) = token.find(['~', '/']) {
        let (before, after) = token.split_at(idx);
        buffer.push_str(before);
        match after.as_bytes()[0] {
            b'~' => buffer.push_str("~0"),
            _ => buffer.push_str("~1"),
        }
        token = &after[1..];
    }
    buffer.push_str(token);
}

/// Decode an escaped token: `~1` becomes `/`, then `~0` becomes `~`.
///
/// A `~` that does not start an escape sequence is kept as is.
pub fn unescape(mut token: &str) -> Cow<'_, str> {
    let Some(mut tilde_idx) = token.find('~') else {
        return Cow::Borrowed(token);
    };

    // Single pass, equivalent to replacing `~1` first and `~0` second
    let mut buffer = String::with_capacity(token.len());
    loop {
        let (before, after) = token.split_at(tilde_idx);
        buffer.push_str(before);
        token = &after[1..];
        match token.as_bytes().first() {
            Some(b'1') => {
                buffer.push('/');
                token = &token[1..];
            }
            Some(b'0') => {
                buffer.push('~');
                token = &token[1..];
            }
            // The next character is re-examined, it may start an escape itself
            Some(_) => buffer.push('~'),
            None => {
                buffer.push('~');
                break;
            }
        }
        let Some(next_tilde_idx) = token.find('~') else {
            buffer.push_str(token);
            break;
        };
        tilde_idx = next_tilde_idx;
    }
    Cow::Owned(buffer)
}

/// A token interpreted against the array it indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Index {
    /// A position inside or past the end of the array. `-` resolves to the array length.
    At(usize),
    /// The token can not address an array element.
    Invalid,
}

impl Index {
    pub(crate) fn compute(array: &JsonArray, token: &str) -> Index {
        if token == "-" {
            Index::At(array.len())
        } else {
            parse_index(token).map_or(Index::Invalid, Index::At)
        }
    }
    pub(crate) fn position(self) -> Option<usize> {
        match self {
            Index::At(idx) => Some(idx),
            Index::Invalid => None,
        }
    }
}

/// Parse an array index per RFC 6901: `0` or ASCII digits without a leading zero.
/// Tokens like `01`, `+1` or `1e3` never address an element.
fn parse_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => token.parse().ok(),
        _ => None,
    }
}
