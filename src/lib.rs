//! RFC 6901 JSON Pointers over reference-counted value trees.
//!
//! - 🔎 Reading values at a pointer
//! - ✏️ Writing and deleting, either in place or copy-on-write
//! - 🧩 Pointer composition with proper escaping
//!
//! # Reading
//!
//! ```rust
//! # fn main() -> Result<(), json_pointer::Error> {
//! use json_pointer::Json;
//! use serde_json::json;
//!
//! let subject = Json::from(json!({"foo": ["bar", "baz"], "a/b": 1}));
//!
//! assert_eq!(json_pointer::get("/foo/1", &subject)?, Some(&Json::from("baz")));
//! assert_eq!(json_pointer::get("/a~1b", &subject)?, Some(&Json::from(1_i64)));
//! // Missing values are not errors
//! assert_eq!(json_pointer::get("/missing", &subject)?, None);
//! // But indexing into them is
//! assert!(json_pointer::get("/missing/value", &subject).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Writing
//!
//! Immutable operations ([`set`], [`unset`]) return a new root and copy only the containers on
//! the path to the target. Everything else is shared with the original tree:
//!
//! ```rust
//! # fn main() -> Result<(), json_pointer::Error> {
//! use json_pointer::Json;
//! use serde_json::json;
//!
//! let subject = Json::from(json!({"aaa": {"ccc": 333, "ddd": 444}, "bbb": [222]}));
//! let updated = json_pointer::set("/aaa/ccc", &subject, Json::from("foo"))?;
//!
//! let bbb = |value: &Json| json_pointer::get("/bbb", value).ok().flatten().cloned();
//! assert!(bbb(&updated).unwrap().ptr_eq(&bbb(&subject).unwrap()));
//! assert_eq!(json_pointer::get("/aaa/ccc", &subject)?, Some(&Json::from(333_i64)));
//! # Ok(())
//! # }
//! ```
//!
//! Mutating operations ([`assign`], [`remove`]) modify the subject in place:
//!
//! ```rust
//! # fn main() -> Result<(), json_pointer::Error> {
//! use json_pointer::Json;
//! use serde_json::{json, Value};
//!
//! let mut subject = Json::from(json!({"list": [1, 2]}));
//! json_pointer::assign("/list/-", &mut subject, Json::from(3_i64))?;
//! json_pointer::remove("/list/0", &mut subject)?;
//! // Deleted elements leave holes, the remaining indices do not move
//! assert_eq!(Value::from(&subject), json!({"list": [null, 2, 3]}));
//! # Ok(())
//! # }
//! ```
//!
//! # Compiled pointers
//!
//! Every operation is also available on [`JsonPointer`], which parses the pointer once:
//!
//! ```rust
//! # fn main() -> Result<(), json_pointer::Error> {
//! use json_pointer::Json;
//! use serde_json::json;
//!
//! let pointer = json_pointer::compile("/name")?;
//! for subject in [json!({"name": "a"}), json!({"name": "b"})] {
//!     assert!(pointer.get(&Json::from(subject))?.is_some());
//! }
//! # Ok(())
//! # }
//! ```
mod error;
mod ops;
mod pointer;
mod segments;
mod token;
mod value;

pub use error::Error;
pub use pointer::{append, JsonPointer, NIL};
pub use segments::{parse, pointer_segments, Segments};
pub use token::{escape, unescape};
pub use value::{Json, JsonArray, JsonObject, ValueKind};

/// Parse `pointer` once for repeated use.
///
/// # Errors
///
/// If `pointer` is not empty and does not start with `/`.
pub fn compile(pointer: &str) -> Result<JsonPointer, Error> {
    JsonPointer::new(pointer)
}

/// Read the value at `pointer`.
///
/// # Errors
///
/// If `pointer` is invalid or one of its tokens has to be applied to a scalar, `null`, or a
/// missing value.
pub fn get<'s>(pointer: &str, subject: &'s Json) -> Result<Option<&'s Json>, Error> {
    JsonPointer::new(pointer)?.get(subject)
}

/// Return a copy of `subject` with `value` stored at `pointer`.
///
/// # Errors
///
/// See [`JsonPointer::set`].
pub fn set(pointer: &str, subject: &Json, value: Json) -> Result<Json, Error> {
    JsonPointer::new(pointer)?.set(subject, value)
}

/// Store `value` at `pointer` inside `subject`.
///
/// # Errors
///
/// See [`JsonPointer::assign`].
pub fn assign(pointer: &str, subject: &mut Json, value: Json) -> Result<(), Error> {
    JsonPointer::new(pointer)?.assign(subject, value)
}

/// Return a copy of `subject` without the value at `pointer`.
///
/// # Errors
///
/// See [`JsonPointer::unset`].
pub fn unset(pointer: &str, subject: &Json) -> Result<Json, Error> {
    JsonPointer::new(pointer)?.unset(subject)
}

/// Delete the value at `pointer` from `subject`.
///
/// # Errors
///
/// See [`JsonPointer::remove`].
pub fn remove(pointer: &str, subject: &mut Json) -> Result<(), Error> {
    JsonPointer::new(pointer)?.remove(subject)
}
