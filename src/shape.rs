//! Record and collection shaping helpers.
//!
//! Every function borrows its inputs and returns new owned values; nothing is
//! mutated in place. Missing keys are silently skipped, never an error, and
//! helpers that take a collection accept a single record as a one-element
//! collection.

use crate::value::{Map, Value};

/// A list iterates element by element; anything else is a one-element
/// collection.
fn elements(col: &Value) -> &[Value] {
    match col {
        Value::List(items) => items,
        other => std::slice::from_ref(other),
    }
}

/// Extract the values at `key` from a collection of records.
///
/// Elements that are not records contribute nothing, so the result may be
/// shorter than the input.
///
/// ```
/// use plucky::{list, pluck, record, Value};
///
/// let stooges = list![
///     record! { "name" => "moe", "age" => 40 },
///     record! { "name" => "larry", "age" => 50 },
/// ];
/// assert_eq!(
///     pluck(&stooges, "name"),
///     vec![Value::from("moe"), Value::from("larry")]
/// );
///
/// let curly = Value::from(record! { "name" => "curly", "age" => 60 });
/// assert_eq!(pluck(&curly, "age"), vec![Value::Int(60)]);
/// ```
pub fn pluck(col: &Value, key: &str) -> Vec<Value> {
    pluck_or(col, key, Value::Null)
}

/// [`pluck`] with a caller-supplied default for records missing `key`.
pub fn pluck_or(col: &Value, key: &str, default: Value) -> Vec<Value> {
    elements(col)
        .iter()
        .filter_map(|element| match element {
            Value::Map(record) => Some(
                record
                    .get(key)
                    .cloned()
                    .unwrap_or_else(|| default.clone()),
            ),
            _ => None,
        })
        .collect()
}

/// A copy of `record` filtered to the whitelisted keys.
///
/// Keys not present in the record are silently skipped.
///
/// ```
/// use plucky::{pick, record};
///
/// let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
/// assert_eq!(
///     pick(&moe, &["name", "age"]),
///     record! { "name" => "moe", "age" => 50 }
/// );
/// ```
pub fn pick(record: &Map, keys: &[&str]) -> Map {
    let mut out = Map::new();
    for key in keys {
        if let Some(value) = record.get(*key) {
            out.insert((*key).to_string(), value.clone());
        }
    }
    out
}

/// A copy of `record` without the blacklisted keys.
///
/// ```
/// use plucky::{omit, record};
///
/// let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
/// assert_eq!(omit(&moe, &["userid", "age"]), record! { "name" => "moe" });
/// ```
pub fn omit(record: &Map, keys: &[&str]) -> Map {
    let mut out = Map::new();
    for (key, value) in record {
        if !keys.contains(&key.as_str()) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

/// A copy of `record` with keys renamed per `mapping` (old key, new key).
///
/// Keys not named in the mapping pass through unchanged; mapping entries
/// whose old key is absent contribute nothing. A renamed entry landing on an
/// existing key overwrites it, later mapping entries last.
///
/// ```
/// use plucky::{record, rename};
///
/// assert_eq!(
///     rename(&record! { "a" => 1, "BBB" => 2 }, &[("a", "AAA")]),
///     record! { "AAA" => 1, "BBB" => 2 }
/// );
/// ```
pub fn rename(record: &Map, mapping: &[(&str, &str)]) -> Map {
    let old_keys: Vec<&str> = mapping.iter().map(|(old, _)| *old).collect();
    let mut out = omit(record, &old_keys);
    for (old, new) in mapping {
        if let Some(value) = record.get(*old) {
            out.insert((*new).to_string(), value.clone());
        }
    }
    out
}

/// Apply [`rename`] to every record in a collection.
///
/// The output is always a sequence, even for single-record input. Elements
/// that are not records pass through unchanged.
///
/// ```
/// use plucky::{alias, list, record, Value};
///
/// let libraries = list![
///     record! { "isbn" => 1, "ed" => 1 },
///     record! { "isbn" => 2, "ed" => 2 },
/// ];
/// assert_eq!(
///     alias(&libraries, &[("ed", "edition")]),
///     vec![
///         Value::from(record! { "isbn" => 1, "edition" => 1 }),
///         Value::from(record! { "isbn" => 2, "edition" => 2 }),
///     ]
/// );
///
/// let single = Value::from(record! { "a" => 1 });
/// assert_eq!(
///     alias(&single, &[("a", "b")]),
///     vec![Value::from(record! { "b" => 1 })]
/// );
/// ```
pub fn alias(col: &Value, mapping: &[(&str, &str)]) -> Vec<Value> {
    elements(col)
        .iter()
        .map(|element| match element {
            Value::Map(record) => Value::Map(rename(record, mapping)),
            other => other.clone(),
        })
        .collect()
}

/// The first element of a list, or `Null` when the input is not a list or is
/// empty.
///
/// ```
/// use plucky::{first, list, Value};
///
/// assert_eq!(first(&list![1, 2, 3, 4, 5]), Value::Int(1));
/// assert_eq!(first(&Value::from("not-a-list")), Value::Null);
/// ```
pub fn first(list: &Value) -> Value {
    match list {
        Value::List(items) => items.first().cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

/// The first `n` elements of a list as a new list, clamped to the available
/// length; `Null` when the input is not a list.
///
/// ```
/// use plucky::{first_n, list};
///
/// assert_eq!(first_n(&list![1, 2, 3, 4, 5], 3), list![1, 2, 3]);
/// ```
pub fn first_n(list: &Value, n: usize) -> Value {
    match list {
        Value::List(items) => Value::List(items.iter().take(n).cloned().collect()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, record};

    fn stooges() -> Value {
        list![
            record! { "name" => "moe", "age" => 40 },
            record! { "name" => "larry", "age" => 50 },
            record! { "name" => "curly", "age" => 60 },
        ]
    }

    #[test]
    fn pluck_extracts_values_in_input_order() {
        assert_eq!(
            pluck(&stooges(), "name"),
            vec![
                Value::from("moe"),
                Value::from("larry"),
                Value::from("curly")
            ]
        );
    }

    #[test]
    fn pluck_wraps_a_single_record() {
        let curly = Value::from(record! { "name" => "curly", "age" => 60 });
        assert_eq!(pluck(&curly, "age"), vec![Value::Int(60)]);
    }

    #[test]
    fn pluck_fills_missing_keys_with_the_default() {
        let col = list![
            record! { "name" => "moe", "age" => 40 },
            record! { "name" => "larry" },
        ];
        assert_eq!(
            pluck(&col, "age"),
            vec![Value::Int(40), Value::Null]
        );
        assert_eq!(
            pluck_or(&col, "age", Value::Int(0)),
            vec![Value::Int(40), Value::Int(0)]
        );
    }

    #[test]
    fn pluck_drops_non_record_elements() {
        let col = list![record! { "name" => "moe" }, 42, "x"];
        assert_eq!(pluck(&col, "name"), vec![Value::from("moe")]);
    }

    #[test]
    fn pluck_treats_a_tuple_as_a_single_value() {
        let tuple = Value::Tuple(vec![Value::from(record! { "a" => 1 })]);
        assert_eq!(pluck(&tuple, "a"), Vec::<Value>::new());
    }

    #[test]
    fn pick_keeps_only_listed_present_keys() {
        let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
        assert_eq!(
            pick(&moe, &["name", "age"]),
            record! { "name" => "moe", "age" => 50 }
        );
        assert_eq!(
            pick(&moe, &["name", "missing"]),
            record! { "name" => "moe" }
        );
        assert_eq!(pick(&moe, &[]), record! {});
    }

    #[test]
    fn pick_is_idempotent() {
        let moe = record! { "name" => "moe", "age" => 50 };
        let keys = ["name", "age", "userid"];
        let once = pick(&moe, &keys);
        assert_eq!(pick(&once, &keys), once);
    }

    #[test]
    fn omit_drops_listed_keys() {
        let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
        assert_eq!(omit(&moe, &["userid", "age"]), record! { "name" => "moe" });
        assert_eq!(omit(&moe, &["missing"]), moe);
        assert_eq!(omit(&moe, &[]), moe);
    }

    #[test]
    fn omit_is_idempotent() {
        let moe = record! { "name" => "moe", "age" => 50 };
        let keys = ["age"];
        let once = omit(&moe, &keys);
        assert_eq!(omit(&once, &keys), once);
    }

    #[test]
    fn rename_moves_mapped_keys_and_keeps_the_rest() {
        assert_eq!(
            rename(&record! { "a" => 1, "BBB" => 2 }, &[("a", "AAA")]),
            record! { "AAA" => 1, "BBB" => 2 }
        );
    }

    #[test]
    fn rename_skips_absent_mapping_keys() {
        assert_eq!(
            rename(&record! { "x" => 1 }, &[("a", "b")]),
            record! { "x" => 1 }
        );
    }

    #[test]
    fn rename_onto_an_existing_key_overwrites() {
        assert_eq!(
            rename(&record! { "a" => 1, "b" => 2 }, &[("a", "b")]),
            record! { "b" => 1 }
        );
    }

    #[test]
    fn alias_renames_every_record() {
        let libraries = list![
            record! { "isbn" => 1, "ed" => 1 },
            record! { "isbn" => 2, "ed" => 2 },
        ];
        assert_eq!(
            alias(&libraries, &[("ed", "edition")]),
            vec![
                Value::from(record! { "isbn" => 1, "edition" => 1 }),
                Value::from(record! { "isbn" => 2, "edition" => 2 }),
            ]
        );
    }

    #[test]
    fn alias_wraps_a_single_record() {
        let single = Value::from(record! { "a" => 1 });
        assert_eq!(
            alias(&single, &[("a", "b")]),
            vec![Value::from(record! { "b" => 1 })]
        );
    }

    #[test]
    fn alias_passes_non_record_elements_through() {
        let col = list![record! { "a" => 1 }, 42];
        assert_eq!(
            alias(&col, &[("a", "b")]),
            vec![Value::from(record! { "b" => 1 }), Value::Int(42)]
        );
    }

    #[test]
    fn first_returns_the_first_element() {
        assert_eq!(first(&list![1, 2, 3, 4, 5]), Value::Int(1));
        assert_eq!(first(&list![0]), Value::Int(0));
    }

    #[test]
    fn first_is_absent_for_non_lists() {
        assert_eq!(first(&Value::from("not-a-list")), Value::Null);
        assert_eq!(first(&Value::Tuple(vec![Value::Int(1)])), Value::Null);
        assert_eq!(first(&Value::Null), Value::Null);
    }

    #[test]
    fn first_of_an_empty_list_is_absent() {
        assert_eq!(first(&list![]), Value::Null);
    }

    #[test]
    fn first_n_takes_a_prefix() {
        assert_eq!(first_n(&list![1, 2, 3, 4, 5], 3), list![1, 2, 3]);
        assert_eq!(first_n(&list![1, 2, 3], 0), list![]);
    }

    #[test]
    fn first_n_clamps_to_available_length() {
        assert_eq!(first_n(&list![1, 2], 5), list![1, 2]);
        assert_eq!(first_n(&list![], 3), list![]);
    }

    #[test]
    fn first_n_is_absent_for_non_lists() {
        assert_eq!(first_n(&Value::from("x"), 2), Value::Null);
    }
}
