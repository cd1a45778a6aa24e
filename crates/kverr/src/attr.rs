//! Attribute values and the shaping rules that keep them key/value aligned.
//!
//! The flat attribute list alternates key, value, key, value. [`normalize`]
//! repairs odd input before storage, [`merge`] concatenates lists across
//! wraps, and [`dedup_map`]/[`to_map`] collapse the list into a map view.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

/// Key under which a lone or leading unpaired attribute is stored.
pub const MSG_KEY: &str = "msg";

/// Key under which repaired-input diagnostics are stored.
pub const WARNING_KEY: &str = "warning";

/// One cell of the flat attribute sequence.
///
/// Values stay typed until a map or string view is rendered; only then are
/// they coerced to their display form.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// A string value, or a key cell.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl AttrValue {
    /// Capture any displayable value as an attribute.
    ///
    /// The value is rendered immediately. Scalars that should stay typed go
    /// through the `From` conversions instead.
    pub fn of(value: impl fmt::Display) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(v) => f.write_str(v),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<u32> for AttrValue {
    fn from(v: u32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<usize> for AttrValue {
    fn from(v: usize) -> Self {
        AttrValue::Int(v as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<f32> for AttrValue {
    fn from(v: f32) -> Self {
        AttrValue::Float(f64::from(v))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

/// Build a `Vec<AttrValue>` from mixed scalar values.
///
/// ```rust
/// let fields = kverr::attrs!["port", 8080, "tls", true];
/// assert_eq!(fields.len(), 4);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::std::vec::Vec::<$crate::AttrValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::AttrValue::from($value)),+]
    };
}

/// Repair a field list into the canonical even-length key/value form.
///
/// An even list is returned unchanged. An odd list (a single message, or a
/// leading message followed by key/value pairs) gets the [`MSG_KEY`] key
/// prepended so its first element becomes the message value.
pub fn normalize(mut fields: Vec<AttrValue>) -> Vec<AttrValue> {
    if fields.len() % 2 == 1 {
        fields.insert(0, AttrValue::from(MSG_KEY));
    }
    fields
}

/// Concatenate two field lists, existing fields first.
///
/// No deduplication happens here; that is deferred to the map views.
pub fn merge(mut existing: Vec<AttrValue>, new: Vec<AttrValue>) -> Vec<AttrValue> {
    existing.extend(new);
    existing
}

/// Collapse a flat field list into a deduplicated map of typed values.
///
/// Even-indexed cells are coerced to string keys. A repeated key folds its
/// values into one string, newest value leftmost, separated by `" - "`, and
/// the chain extends the same way across further repeats. A trailing key with
/// no paired value is dropped and reported under [`WARNING_KEY`]; the rest of
/// the map is unaffected.
pub fn dedup_map(fields: &[AttrValue]) -> HashMap<String, AttrValue> {
    let mut map = HashMap::with_capacity(fields.len() / 2 + 1);
    let mut pairs = fields.chunks_exact(2);
    for pair in &mut pairs {
        let key = pair[0].to_string();
        let value = pair[1].clone();
        match map.remove(&key) {
            Some(prev) => {
                map.insert(key, AttrValue::Str(format!("{value} - {prev}")));
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    if let [dangling] = pairs.remainder() {
        warn!(key = %dangling, "attribute key has no paired value");
        map.insert(
            WARNING_KEY.to_string(),
            AttrValue::Str(format!("dangling attribute key '{dangling}' had no value")),
        );
    }
    map
}

/// Collapse a flat field list into a deduplicated map of display strings.
pub fn to_map(fields: &[AttrValue]) -> HashMap<String, String> {
    dedup_map(fields)
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
}
