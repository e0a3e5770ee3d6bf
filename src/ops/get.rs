use crate::{
    ops::traversal_error,
    token::Index,
    value::{Json, ValueKind},
    Error,
};

/// Resolve `tokens` against `subject`.
///
/// A missing key, index, or hole is only acceptable for the last token: the walk continues with
/// nothing and fails on the next token, if any.
pub(crate) fn get<'s>(tokens: &[String], subject: &'s Json) -> Result<Option<&'s Json>, Error> {
    let mut current = Some(subject);
    for (depth, token) in tokens.iter().enumerate() {
        current = match current {
            Some(Json::Object(map)) => map.get(token.as_str()),
            Some(Json::Array(items)) => Index::compute(items, token)
                .position()
                .and_then(|idx| items.get(idx)),
            other => return Err(traversal_error(tokens, depth, ValueKind::from(other))),
        };
    }
    Ok(current)
}
