//! Dynamic value model shared by every helper in the crate.
//!
//! The shaping and coercion helpers operate on loosely typed data, so the
//! runtime type tags live in one explicit sum type instead of being spread
//! across the call sites. `Tuple` is carried as its own variant because the
//! list predicates must distinguish a fixed sequence from a mutable one;
//! JSON has no tuple, so deserialization never produces it and serialization
//! renders it as an array.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Record type used by the shaping helpers: string keys, arbitrary values.
///
/// A BTreeMap keeps iteration deterministic, which makes reports and reprs
/// stable across runs.
pub type Map = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The absent-value marker, distinct from an empty string or zero.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// Immutable fixed sequence. Never produced by deserialization.
    Tuple(Vec<Value>),
    Map(Map),
}

impl Value {
    /// True iff the value is textual.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// True iff the value is a mutable ordered sequence (not a tuple, not a
    /// string).
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// True iff the value is an immutable fixed sequence.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// True iff the value is a record.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// True iff the repr consists entirely of ASCII decimal digits.
    ///
    /// Non-negative integers and digit-only strings qualify; negative
    /// integers, floats, bools, `Null`, containers, and empty strings do not.
    pub fn is_digit(&self) -> bool {
        let repr = self.to_string();
        !repr.is_empty() && repr.bytes().all(|b| b.is_ascii_digit())
    }

    /// The single truthiness rule used by the coercion helpers: `Null`,
    /// `false`, `0`, `0.0`, the empty string, and empty containers are falsy.
    /// Everything else (NaN included) is truthy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::List(items) | Value::Tuple(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    /// Type tag name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Convert to a `serde_json::Value`. Tuples become arrays; non-finite
    /// floats become null because JSON cannot represent them.
    pub fn to_json(&self) -> serde_json::Value {
        self.clone().into()
    }
}

/// The repr used by `is_digit` and the string coercion: scalars render bare
/// (`1`, `1.5`, `true`, `null`, string contents unquoted) and containers
/// render as their JSON text (`[1,2]`, `{"a":1}`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => {
                // f64 Display drops the fraction of whole floats ("1" for
                // 1.0); keep a decimal point so a float repr is never all
                // digits.
                let repr = x.to_string();
                if repr.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
                    write!(f, "{}.0", repr)
                } else {
                    f.write_str(&repr)
                }
            }
            Value::Str(s) => f.write_str(s),
            Value::List(_) | Value::Tuple(_) | Value::Map(_) => {
                match serde_json::to_string(self) {
                    Ok(json) => f.write_str(&json),
                    Err(_) => Err(fmt::Error),
                }
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::from(i),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s),
            Value::List(items) | Value::Tuple(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
