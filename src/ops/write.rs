use std::sync::Arc;

use crate::{
    ops::{invalid_index_error, traversal_error},
    token::Index,
    value::{Json, JsonArray, JsonObject, ValueKind},
    Error,
};

/// Copy-on-write assignment. Returns a new root; `subject` is left untouched.
pub(crate) fn set(tokens: &[String], subject: &Json, value: Json) -> Result<Json, Error> {
    set_at(tokens, 0, Some(subject), value)
}

fn set_at(
    tokens: &[String],
    depth: usize,
    subject: Option<&Json>,
    value: Json,
) -> Result<Json, Error> {
    let Some(token) = tokens.get(depth) else {
        return Ok(value);
    };
    match subject {
        Some(Json::Object(map)) => {
            let child = set_at(tokens, depth + 1, map.get(token.as_str()), value)?;
            let mut copy = JsonObject::clone(map);
            copy.insert(token.clone(), child);
            Ok(Json::Object(Arc::new(copy)))
        }
        Some(Json::Array(items)) => {
            let Index::At(idx) = Index::compute(items, token) else {
                return Err(invalid_index_error(tokens, depth));
            };
            let child = set_at(tokens, depth + 1, items.get(idx), value)?;
            let mut copy = JsonArray::clone(items);
            // Only the slot right after the last element may be created
            if copy.set(idx, child) {
                Ok(Json::Array(Arc::new(copy)))
            } else {
                Err(invalid_index_error(tokens, depth))
            }
        }
        other => Err(traversal_error(tokens, depth, ValueKind::from(other))),
    }
}

/// In-place assignment.
pub(crate) fn assign(tokens: &[String], subject: &mut Json, value: Json) -> Result<(), Error> {
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(());
    };
    let parent = descend(tokens, parents.len(), subject)?;
    match parent {
        Json::Object(map) => {
            Arc::make_mut(map).insert(last.clone(), value);
            Ok(())
        }
        Json::Array(items) => match Index::compute(items, last) {
            Index::At(idx) if idx <= items.len() => {
                Arc::make_mut(items).set(idx, value);
                Ok(())
            }
            _ => Err(invalid_index_error(tokens, parents.len())),
        },
        other => Err(traversal_error(tokens, parents.len(), other.kind())),
    }
}

/// Follow the first `depth` tokens mutably, detaching shared containers on the way.
pub(super) fn descend<'s>(
    tokens: &[String],
    depth: usize,
    subject: &'s mut Json,
) -> Result<&'s mut Json, Error> {
    let mut current = subject;
    for (step, token) in tokens[..depth].iter().enumerate() {
        let next = match current {
            Json::Object(map) => Arc::make_mut(map).get_mut(token.as_str()),
            Json::Array(items) => match Index::compute(items, token) {
                Index::At(idx) => Arc::make_mut(items).get_mut(idx),
                Index::Invalid => None,
            },
            other => return Err(traversal_error(tokens, step, other.kind())),
        };
        // Nothing here, so the following token has nothing to be applied to
        current = next.ok_or_else(|| traversal_error(tokens, step + 1, ValueKind::Undefined))?;
    }
    Ok(current)
}
