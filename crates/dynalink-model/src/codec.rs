//! Conversion between plain JSON values and the type-tagged attribute form.
//!
//! On the wire every scalar or set attribute is a single-key object whose key
//! names its type, e.g. `{"S": "hello"}` or `{"NN": [1, 2]}`. Composite
//! attribute maps are not wrapped themselves; each member is encoded in turn.
//!
//! # Ambiguity
//!
//! [`decode`] recognizes an encoded scalar purely by shape: any single-entry
//! object keyed by one of the tags in [`TypeTag::DECODE_PRIORITY`]. A nested
//! attribute map that legitimately holds exactly one member named `N`, `S`,
//! etc. is therefore indistinguishable from an encoded scalar and will be
//! unwrapped. Closing this gap would need a wrapper the service does not
//! understand, so the behaviour is kept for wire compatibility.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// A wire type tag.
///
/// Binary tags are recognized when decoding responses but never produced by
/// [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Binary.
    B,
    /// Number.
    N,
    /// String.
    S,
    /// Binary set.
    Bb,
    /// Number set.
    Nn,
    /// String set.
    Ss,
}

impl TypeTag {
    /// Order in which tags are looked up when decoding.
    pub const DECODE_PRIORITY: [Self; 6] = [Self::B, Self::N, Self::S, Self::Bb, Self::Nn, Self::Ss];

    /// Returns the tag as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::N => "N",
            Self::S => "S",
            Self::Bb => "BB",
            Self::Nn => "NN",
            Self::Ss => "SS",
        }
    }

    /// Parse a wire key into a tag.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::DECODE_PRIORITY
            .into_iter()
            .find(|tag| tag.as_str() == key)
    }

    /// Wrap `payload` in a single-key object under this tag.
    #[must_use]
    pub fn wrap(self, payload: Value) -> Value {
        let mut tagged = Map::with_capacity(1);
        tagged.insert(self.as_str().to_owned(), payload);
        Value::Object(tagged)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the set tag for an array.
///
/// Only the first element is inspected: a number yields [`TypeTag::Nn`], a
/// string yields [`TypeTag::Ss`]. An empty array is treated as a number set.
/// Any other first element means the array is not a set and `None` is
/// returned. Mixed arrays are not rejected; they take the tag of their first
/// element.
#[must_use]
pub fn set_tag(elements: &[Value]) -> Option<TypeTag> {
    match elements.first() {
        None | Some(Value::Number(_)) => Some(TypeTag::Nn),
        Some(Value::String(_)) => Some(TypeTag::Ss),
        Some(_) => None,
    }
}

/// Encode a plain value into its type-tagged form.
///
/// Numbers are carried unchanged under `N` (not converted to strings).
/// Objects are encoded member by member and are never wrapped. Arrays that
/// are not sets are encoded element by element. Booleans and nulls pass
/// through.
#[must_use]
pub fn encode(value: Value) -> Value {
    match value {
        Value::Number(_) => TypeTag::N.wrap(value),
        Value::String(_) => TypeTag::S.wrap(value),
        Value::Array(elements) => match set_tag(&elements) {
            Some(tag) => tag.wrap(Value::Array(elements)),
            None => Value::Array(elements.into_iter().map(encode).collect()),
        },
        Value::Object(members) => Value::Object(encode_map(members)),
        Value::Bool(_) | Value::Null => value,
    }
}

/// Encode every member of an attribute map.
#[must_use]
pub fn encode_map(members: Map<String, Value>) -> Map<String, Value> {
    members
        .into_iter()
        .map(|(name, value)| (name, encode(value)))
        .collect()
}

/// Decode a type-tagged value back into its plain form.
///
/// See the module docs for the single-key ambiguity.
#[must_use]
pub fn decode(value: Value) -> Value {
    match value {
        Value::Object(members) => match tagged_payload(members) {
            Ok(payload) => payload,
            Err(members) => Value::Object(decode_map(members)),
        },
        Value::Array(elements) => Value::Array(elements.into_iter().map(decode).collect()),
        scalar => scalar,
    }
}

/// Decode every member of an attribute map.
#[must_use]
pub fn decode_map(members: Map<String, Value>) -> Map<String, Value> {
    members
        .into_iter()
        .map(|(name, value)| (name, decode(value)))
        .collect()
}

/// Take the payload out of a single-entry tagged object, or hand the object
/// back untouched.
fn tagged_payload(mut members: Map<String, Value>) -> Result<Value, Map<String, Value>> {
    let tag = match members.keys().next() {
        Some(key) if members.len() == 1 => TypeTag::from_key(key),
        _ => None,
    };
    match tag.and_then(|tag| members.remove(tag.as_str())) {
        Some(payload) => Ok(payload),
        None => Err(members),
    }
}

/// Encode the `value` fields of conditional-write expectations.
///
/// Each attribute maps to a condition object; any field named `value`
/// (compared case-insensitively) is encoded, every other field (such as
/// `Exists`) is copied verbatim.
#[must_use]
pub fn encode_expected(expected: BTreeMap<String, Map<String, Value>>) -> Map<String, Value> {
    expected
        .into_iter()
        .map(|(attribute, condition)| {
            let condition: Map<String, Value> = condition
                .into_iter()
                .map(|(field, value)| {
                    if field.eq_ignore_ascii_case("value") {
                        (field, encode(value))
                    } else {
                        (field, value)
                    }
                })
                .collect();
            (attribute, Value::Object(condition))
        })
        .collect()
}
