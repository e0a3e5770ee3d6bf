use std::sync::Arc;

use crate::{
    ops::{traversal_error, write::descend},
    token::Index,
    value::{Json, JsonArray, JsonObject, ValueKind},
    Error,
};

/// Copy-on-write deletion. Returns a new root; `subject` is left untouched.
///
/// Deleting something that does not exist still copies the containers along the path.
pub(crate) fn unset(tokens: &[String], subject: &Json) -> Result<Json, Error> {
    if tokens.is_empty() {
        return Ok(subject.clone());
    }
    unset_at(tokens, 0, Some(subject))
}

fn unset_at(tokens: &[String], depth: usize, subject: Option<&Json>) -> Result<Json, Error> {
    let token = &tokens[depth];
    let is_last = depth + 1 == tokens.len();
    match subject {
        Some(Json::Object(map)) => {
            if is_last {
                let mut copy = JsonObject::clone(map);
                copy.shift_remove(token.as_str());
                Ok(Json::Object(Arc::new(copy)))
            } else {
                let child = unset_at(tokens, depth + 1, map.get(token.as_str()))?;
                let mut copy = JsonObject::clone(map);
                copy.insert(token.clone(), child);
                Ok(Json::Object(Arc::new(copy)))
            }
        }
        Some(Json::Array(items)) => {
            let position = Index::compute(items, token).position();
            if is_last {
                let mut copy = JsonArray::clone(items);
                if let Some(idx) = position {
                    copy.take(idx);
                }
                Ok(Json::Array(Arc::new(copy)))
            } else {
                let child = unset_at(tokens, depth + 1, position.and_then(|idx| items.get(idx)))?;
                let mut copy = JsonArray::clone(items);
                // A successful descent means the element exists
                if let Some(idx) = position {
                    copy.set(idx, child);
                }
                Ok(Json::Array(Arc::new(copy)))
            }
        }
        other => Err(traversal_error(tokens, depth, ValueKind::from(other))),
    }
}

/// In-place deletion. Array elements become holes.
pub(crate) fn remove(tokens: &[String], subject: &mut Json) -> Result<(), Error> {
    let Some((last, parents)) = tokens.split_last() else {
        return Ok(());
    };
    match descend(tokens, parents.len(), subject)? {
        Json::Object(map) => {
            if map.contains_key(last.as_str()) {
                Arc::make_mut(map).shift_remove(last.as_str());
            }
            Ok(())
        }
        Json::Array(items) => {
            if let Index::At(idx) = Index::compute(items, last) {
                if items.get(idx).is_some() {
                    Arc::make_mut(items).take(idx);
                }
            }
            Ok(())
        }
        other => Err(traversal_error(tokens, parents.len(), other.kind())),
    }
}
