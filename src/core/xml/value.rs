//! Converted value produced by the XML mapper

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Dynamically shaped result of converting an XML node.
///
/// `Scalar` only ever holds JSON null, booleans, numbers or strings; JSON
/// objects and arrays are always lifted into `Object` / `Array`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XmlValue {
    Scalar(Value),
    Object(BTreeMap<String, XmlValue>),
    Array(Vec<XmlValue>),
}

impl Default for XmlValue {
    fn default() -> Self {
        XmlValue::Object(BTreeMap::new())
    }
}

impl XmlValue {
    /// Interpret raw attribute or text content as a JSON literal, falling
    /// back to the raw string.
    pub fn literal(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value) => XmlValue::from(value),
            Err(_) => XmlValue::Scalar(Value::String(raw.to_string())),
        }
    }

    pub fn string<S: Into<String>>(value: S) -> Self {
        XmlValue::Scalar(Value::String(value.into()))
    }

    /// Look up a key of an object value
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Follow a path of object keys
    pub fn at(&self, path: &[&str]) -> Option<&XmlValue> {
        path.iter().try_fold(self, |value, key| value.get(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlValue::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            XmlValue::Scalar(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            XmlValue::Scalar(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, XmlValue>> {
        match self {
            XmlValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[XmlValue]> {
        match self {
            XmlValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, XmlValue::Scalar(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, XmlValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, XmlValue::Array(_))
    }

    /// Normalise a "single value or sequence" field into a list.
    ///
    /// Repeated tags convert to an `Array` but a lone tag does not, so
    /// readers of listing payloads go through this before iterating.
    pub fn into_list(self) -> Vec<XmlValue> {
        match self {
            XmlValue::Array(items) => items,
            other => vec![other],
        }
    }

    /// Convert to a plain JSON value, e.g. for `serde_json::from_value`
    pub fn to_json(&self) -> Value {
        match self {
            XmlValue::Scalar(value) => value.clone(),
            XmlValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            XmlValue::Array(items) => Value::Array(items.iter().map(XmlValue::to_json).collect()),
        }
    }

    /// Merge a converted child under `key`, promoting to a sequence when
    /// the key is already taken.
    pub(crate) fn merge_child(map: &mut BTreeMap<String, XmlValue>, key: &str, value: XmlValue) {
        match map.get_mut(key) {
            None => {
                map.insert(key.to_string(), value);
            }
            Some(XmlValue::Array(items)) => items.push(value),
            Some(existing) => {
                let first = std::mem::replace(existing, XmlValue::Array(Vec::with_capacity(2)));
                if let XmlValue::Array(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    }
}

impl From<Value> for XmlValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => XmlValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, XmlValue::from(value)))
                    .collect(),
            ),
            Value::Array(items) => XmlValue::Array(items.into_iter().map(XmlValue::from).collect()),
            scalar => XmlValue::Scalar(scalar),
        }
    }
}
