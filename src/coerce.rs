//! Value coercions with explicit absent-result signaling.
//!
//! `to_int` and `to_string` return `Option` instead of raising: `None` is the
//! absent marker and callers are expected to check for it. The `convert`
//! family applies a caller-supplied converter and collapses unwanted outputs
//! to a default; how much collapses is controlled by [`Collapse`] so the
//! "falsy output counts as no output" contract is a named option rather than
//! an implicit truthiness rule.

use crate::error::{Error, Result};
use crate::value::Value;

/// Integer parse of the value's repr, or `None` when the repr is not all
/// digits.
///
/// Never errors. A digit string too large for `i64` also yields `None`.
///
/// ```
/// use plucky::{to_int, Value};
///
/// assert_eq!(to_int(&Value::from(1)), Some(1));
/// assert_eq!(to_int(&Value::from("1")), Some(1));
/// assert_eq!(to_int(&Value::from("a")), None);
/// ```
pub fn to_int(value: &Value) -> Option<i64> {
    if !value.is_digit() {
        return None;
    }
    value.to_string().parse::<i64>().ok()
}

/// The value's repr, or `None` when the repr is empty.
///
/// An empty string is deliberately treated the same as no value.
///
/// ```
/// use plucky::{to_string, Value};
///
/// assert_eq!(to_string(&Value::from(1)), Some("1".to_string()));
/// assert_eq!(to_string(&Value::from("")), None);
/// ```
pub fn to_string(value: &Value) -> Option<String> {
    let repr = value.to_string();
    if repr.is_empty() {
        None
    } else {
        Some(repr)
    }
}

/// How much of a converter's output collapses to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collapse {
    /// Any falsy output (per [`Value::is_falsy`]) collapses to the default.
    Falsy,
    /// Only a `Null` output collapses to the default.
    Absent,
}

/// Converter shape accepted by the by-name lookup: `Null` stands in for an
/// absent result.
pub type Converter = fn(&Value) -> Value;

/// [`to_int`] in converter form.
pub fn int_converter(value: &Value) -> Value {
    match to_int(value) {
        Some(n) => Value::Int(n),
        None => Value::Null,
    }
}

/// [`to_string`] in converter form.
pub fn string_converter(value: &Value) -> Value {
    match to_string(value) {
        Some(s) => Value::Str(s),
        None => Value::Null,
    }
}

/// Apply `converter` to `value`; outputs selected by `collapse` are replaced
/// with `default`.
pub fn convert_with<F>(value: &Value, converter: F, default: Value, collapse: Collapse) -> Value
where
    F: Fn(&Value) -> Value,
{
    let output = converter(value);
    let collapses = match collapse {
        Collapse::Falsy => output.is_falsy(),
        Collapse::Absent => matches!(output, Value::Null),
    };
    if collapses {
        default
    } else {
        output
    }
}

/// Apply `converter` to `value`; falsy output collapses to `Null`.
///
/// ```
/// use plucky::{convert, int_converter, Value};
///
/// assert_eq!(convert(&Value::from("1"), int_converter), Value::Int(1));
/// assert_eq!(convert(&Value::from("a"), int_converter), Value::Null);
/// ```
pub fn convert<F>(value: &Value, converter: F) -> Value
where
    F: Fn(&Value) -> Value,
{
    convert_with(value, converter, Value::Null, Collapse::Falsy)
}

/// Apply `converter` to `value`; falsy output collapses to `default`.
///
/// ```
/// use plucky::{convert_or, int_converter, Value};
///
/// assert_eq!(
///     convert_or(&Value::from("a"), int_converter, Value::Int(0)),
///     Value::Int(0)
/// );
/// ```
pub fn convert_or<F>(value: &Value, converter: F, default: Value) -> Value
where
    F: Fn(&Value) -> Value,
{
    convert_with(value, converter, default, Collapse::Falsy)
}

/// Resolve a built-in converter by name (`"to_int"`, `"to_string"`).
///
/// An unknown name is the one failure this library propagates.
pub fn converter(name: &str) -> Result<Converter> {
    match name {
        "to_int" => Ok(int_converter),
        "to_string" => Ok(string_converter),
        _ => Err(Error::invalid_argument(
            "converter",
            "Converter must be a function",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, record};

    #[test]
    fn to_int_parses_digit_reprs() {
        assert_eq!(to_int(&Value::from(1)), Some(1));
        assert_eq!(to_int(&Value::from(0)), Some(0));
        assert_eq!(to_int(&Value::from("1")), Some(1));
        assert_eq!(to_int(&Value::from("007")), Some(7));
    }

    #[test]
    fn to_int_is_absent_for_non_digits() {
        assert_eq!(to_int(&Value::from("a")), None);
        assert_eq!(to_int(&Value::from("-1")), None);
        assert_eq!(to_int(&Value::from(1.0)), None);
        assert_eq!(to_int(&Value::from("")), None);
        assert_eq!(to_int(&Value::Null), None);
        assert_eq!(to_int(&list![1]), None);
    }

    #[test]
    fn to_int_is_absent_on_overflow() {
        let huge = Value::from("99999999999999999999999999");
        assert!(huge.is_digit());
        assert_eq!(to_int(&huge), None);
    }

    #[test]
    fn to_string_returns_the_repr() {
        assert_eq!(to_string(&Value::from(1)), Some("1".to_string()));
        assert_eq!(to_string(&list![]), Some("[]".to_string()));
        assert_eq!(to_string(&Value::from("a")), Some("a".to_string()));
        assert_eq!(to_string(&Value::Null), Some("null".to_string()));
        assert_eq!(
            to_string(&Value::from(record! { "a" => 1 })),
            Some("{\"a\":1}".to_string())
        );
    }

    #[test]
    fn to_string_collapses_the_empty_repr() {
        assert_eq!(to_string(&Value::from("")), None);
    }

    #[test]
    fn convert_applies_the_converter() {
        assert_eq!(convert(&Value::from("1"), int_converter), Value::Int(1));
        assert_eq!(
            convert(&Value::from(2), string_converter),
            Value::from("2")
        );
    }

    #[test]
    fn convert_or_collapses_absent_output_to_default() {
        assert_eq!(
            convert_or(&Value::from("a"), int_converter, Value::Int(0)),
            Value::Int(0)
        );
    }

    #[test]
    fn convert_or_collapses_falsy_output_to_default() {
        // "0" parses cleanly, but the zero output is falsy and collapses.
        assert_eq!(
            convert_or(&Value::from("0"), int_converter, Value::Int(7)),
            Value::Int(7)
        );
    }

    #[test]
    fn absent_mode_keeps_falsy_output() {
        assert_eq!(
            convert_with(
                &Value::from("0"),
                int_converter,
                Value::Int(7),
                Collapse::Absent
            ),
            Value::Int(0)
        );
        assert_eq!(
            convert_with(
                &Value::from("a"),
                int_converter,
                Value::Int(7),
                Collapse::Absent
            ),
            Value::Int(7)
        );
    }

    #[test]
    fn convert_accepts_closures() {
        let double = |v: &Value| match v.as_int() {
            Some(n) => Value::Int(n * 2),
            None => Value::Null,
        };
        assert_eq!(convert(&Value::from(21), double), Value::Int(42));
    }

    #[test]
    fn converter_lookup_resolves_builtins() {
        let f = converter("to_int").unwrap();
        assert_eq!(f(&Value::from("41")), Value::Int(41));
        let g = converter("to_string").unwrap();
        assert_eq!(g(&Value::from(5)), Value::from("5"));
    }

    #[test]
    fn converter_lookup_fails_for_unknown_names() {
        let err = converter("not_a_converter").unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'converter': Converter must be a function"
        );
    }
}
