//! Tree values addressed by JSON pointers.
use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use serde_json::{Number, Value};

/// An ordered JSON object. Keys keep their insertion order.
pub type JsonObject = IndexMap<String, Json>;

/// A JSON-like value.
///
/// Containers are reference counted, so cloning a [`Json`] never copies a subtree. Copy-on-write
/// updates rely on this: everything off the updated path is shared with the original tree, which
/// can be checked with [`Json::ptr_eq`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Json {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Arc<JsonArray>),
    Object(Arc<JsonObject>),
}

impl Json {
    /// Create an array value.
    pub fn array(items: impl Into<JsonArray>) -> Json {
        Json::Array(Arc::new(items.into()))
    }
    /// Create an object value.
    pub fn object(map: JsonObject) -> Json {
        Json::Object(Arc::new(map))
    }
    /// The category of this value.
    pub fn kind(&self) -> ValueKind {
        ValueKind::from(self)
    }
    #[inline]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }
    #[inline]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }
    /// Mutable access to the array, detaching it first if it is shared with another tree.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Json::Array(items) => Some(Arc::make_mut(items)),
            _ => None,
        }
    }
    /// Mutable access to the object, detaching it first if it is shared with another tree.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Json::Object(map) => Some(Arc::make_mut(map)),
            _ => None,
        }
    }
    /// Whether both values are the very same container.
    ///
    /// Scalars are never considered identical, even when equal.
    pub fn ptr_eq(&self, other: &Json) -> bool {
        match (self, other) {
            (Json::Array(left), Json::Array(right)) => Arc::ptr_eq(left, right),
            (Json::Object(left), Json::Object(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// An array whose slots may be empty.
///
/// Deleting an element leaves a hole instead of shifting the following elements, so pointers to
/// later indices stay valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonArray(Vec<Option<Json>>);

impl JsonArray {
    /// Number of slots, holes included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// The element at `index`, or `None` when it is out of bounds or a hole.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Json> {
        self.0.get(index).and_then(Option::as_ref)
    }
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Json> {
        self.0.get_mut(index).and_then(Option::as_mut)
    }
    /// Whether `index` is in bounds but holds no value.
    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.0.get(index), Some(None))
    }
    /// Store `value` at `index`. An index equal to the length appends.
    ///
    /// Returns `false` and leaves the array untouched when `index` is past the end.
    pub fn set(&mut self, index: usize, value: Json) -> bool {
        let len = self.0.len();
        match self.0.get_mut(index) {
            Some(slot) => *slot = Some(value),
            None if index == len => self.0.push(Some(value)),
            None => return false,
        }
        true
    }
    /// Empty the slot at `index` without shifting the rest and return its previous value.
    pub fn take(&mut self, index: usize) -> Option<Json> {
        self.0.get_mut(index).and_then(Option::take)
    }
    /// Iterate over slots, yielding `None` for holes.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Json>> {
        self.0.iter().map(Option::as_ref)
    }
}

impl From<Vec<Json>> for JsonArray {
    fn from(items: Vec<Json>) -> Self {
        Self(items.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Json>>> for JsonArray {
    fn from(slots: Vec<Option<Json>>) -> Self {
        Self(slots)
    }
}

impl FromIterator<Json> for JsonArray {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

/// The category of a location inside a tree.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// Nothing exists at the location.
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Undefined => "undefined",
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Json> for ValueKind {
    fn from(value: &Json) -> Self {
        match value {
            Json::Null => ValueKind::Null,
            Json::Bool(_) => ValueKind::Boolean,
            Json::Number(_) => ValueKind::Number,
            Json::String(_) => ValueKind::String,
            Json::Array(_) => ValueKind::Array,
            Json::Object(_) => ValueKind::Object,
        }
    }
}

impl From<Option<&Json>> for ValueKind {
    fn from(value: Option<&Json>) -> Self {
        value.map_or(ValueKind::Undefined, ValueKind::from)
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Json::Null,
            Value::Bool(value) => Json::Bool(value),
            Value::Number(value) => Json::Number(value),
            Value::String(value) => Json::String(value),
            Value::Array(items) => {
                Json::array(items.into_iter().map(Json::from).collect::<JsonArray>())
            }
            Value::Object(map) => Json::object(
                map.into_iter()
                    .map(|(key, value)| (key, Json::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Json> for Value {
    fn from(value: &Json) -> Self {
        match value {
            Json::Null => Value::Null,
            Json::Bool(value) => Value::Bool(*value),
            Json::Number(value) => Value::Number(value.clone()),
            Json::String(value) => Value::String(value.clone()),
            // Holes have no JSON representation
            Json::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|slot| slot.map_or(Value::Null, Value::from))
                    .collect(),
            ),
            Json::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        Value::from(&value)
    }
}

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Json::Bool(value)
    }
}

impl From<i64> for Json {
    fn from(value: i64) -> Self {
        Json::Number(value.into())
    }
}

impl From<u64> for Json {
    fn from(value: u64) -> Self {
        Json::Number(value.into())
    }
}

impl From<f64> for Json {
    /// Non-finite numbers become `null`, matching `serde_json`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Json::Null, Json::Number)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::String(value.to_owned())
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json::String(value)
    }
}

impl From<JsonArray> for Json {
    fn from(items: JsonArray) -> Self {
        Json::array(items)
    }
}

impl From<JsonObject> for Json {
    fn from(map: JsonObject) -> Self {
        Json::object(map)
    }
}
