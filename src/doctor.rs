//! Example-driven self-check.
//!
//! The library's documented usage examples live here as an executable table.
//! [`run`] executes every entry and reports mismatches without stopping
//! mid-run; the report carries the expression text plus expected and actual
//! reprs so a failing entry reads like a failed doctest.

use crate::value::Value;
use crate::{coerce, shape};
use serde::Serialize;
use std::fmt;

/// One documented usage example: a stable name, the expression it checks,
/// and the check itself.
pub struct Example {
    pub name: &'static str,
    pub expression: &'static str,
    run: fn() -> Checked,
}

struct Checked {
    expected: String,
    actual: String,
    passed: bool,
}

fn check<T: PartialEq + fmt::Debug>(expected: T, actual: T) -> Checked {
    Checked {
        passed: expected == actual,
        expected: format!("{:?}", expected),
        actual: format!("{:?}", actual),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub name: String,
    pub expression: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub examples_run: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub command: String,
    pub summary: CheckSummary,
    pub outcomes: Vec<CheckOutcome>,
}

/// Run every example whose name contains `filter` (all of them when `None`).
/// Never stops on a mismatch.
pub fn run(filter: Option<&str>) -> CheckReport {
    let mut outcomes = Vec::new();

    for example in examples() {
        if let Some(pattern) = filter {
            if !example.name.contains(pattern) {
                continue;
            }
        }

        let checked = (example.run)();
        outcomes.push(CheckOutcome {
            name: example.name.to_string(),
            expression: example.expression.to_string(),
            expected: checked.expected,
            actual: checked.actual,
            passed: checked.passed,
        });
    }

    let passed = outcomes.iter().filter(|outcome| outcome.passed).count();
    let failed = outcomes.len() - passed;

    CheckReport {
        command: "selfcheck.run".to_string(),
        summary: CheckSummary {
            examples_run: outcomes.len(),
            passed,
            failed,
        },
        outcomes,
    }
}

pub fn exit_code_from_report(report: &CheckReport) -> i32 {
    if report.summary.failed > 0 {
        1
    } else {
        0
    }
}

/// The full example table. Names are stable identifiers usable as run
/// filters.
pub fn examples() -> Vec<Example> {
    vec![
        Example {
            name: "value.is_string/empty",
            expression: r#"Value::from("").is_string()"#,
            run: || check(true, Value::from("").is_string()),
        },
        Example {
            name: "value.is_string/int",
            expression: "Value::from(1).is_string()",
            run: || check(false, Value::from(1).is_string()),
        },
        Example {
            name: "value.is_list/list",
            expression: "list![].is_list()",
            run: || check(true, list![].is_list()),
        },
        Example {
            name: "value.is_list/string",
            expression: r#"Value::from("[]").is_list()"#,
            run: || check(false, Value::from("[]").is_list()),
        },
        Example {
            name: "value.is_list/map",
            expression: "Value::from(record! {}).is_list()",
            run: || check(false, Value::from(record! {}).is_list()),
        },
        Example {
            name: "value.is_tuple/tuple",
            expression: "Value::Tuple(Vec::new()).is_tuple()",
            run: || check(true, Value::Tuple(Vec::new()).is_tuple()),
        },
        Example {
            name: "value.is_tuple/string",
            expression: r#"Value::from("()").is_tuple()"#,
            run: || check(false, Value::from("()").is_tuple()),
        },
        Example {
            name: "value.is_tuple/list",
            expression: "list![].is_tuple()",
            run: || check(false, list![].is_tuple()),
        },
        Example {
            name: "value.is_map/map",
            expression: "Value::from(record! {}).is_map()",
            run: || check(true, Value::from(record! {}).is_map()),
        },
        Example {
            name: "value.is_map/string",
            expression: r#"Value::from("{}").is_map()"#,
            run: || check(false, Value::from("{}").is_map()),
        },
        Example {
            name: "value.is_map/list",
            expression: "list![].is_map()",
            run: || check(false, list![].is_map()),
        },
        Example {
            name: "value.is_digit/int",
            expression: "Value::from(1).is_digit()",
            run: || check(true, Value::from(1).is_digit()),
        },
        Example {
            name: "value.is_digit/digit-string",
            expression: r#"Value::from("1").is_digit()"#,
            run: || check(true, Value::from("1").is_digit()),
        },
        Example {
            name: "value.is_digit/letter",
            expression: r#"Value::from("a").is_digit()"#,
            run: || check(false, Value::from("a").is_digit()),
        },
        Example {
            name: "value.is_digit/list",
            expression: "list![].is_digit()",
            run: || check(false, list![].is_digit()),
        },
        Example {
            name: "value.is_digit/negative-int",
            expression: "Value::from(-3).is_digit()",
            run: || check(false, Value::from(-3).is_digit()),
        },
        Example {
            name: "value.is_digit/float",
            expression: "Value::from(1.0).is_digit()",
            run: || check(false, Value::from(1.0).is_digit()),
        },
        Example {
            name: "coerce.to_int/int",
            expression: "to_int(&Value::from(1))",
            run: || check(Some(1), coerce::to_int(&Value::from(1))),
        },
        Example {
            name: "coerce.to_int/digit-string",
            expression: r#"to_int(&Value::from("1"))"#,
            run: || check(Some(1), coerce::to_int(&Value::from("1"))),
        },
        Example {
            name: "coerce.to_int/letter",
            expression: r#"to_int(&Value::from("a"))"#,
            run: || check(None, coerce::to_int(&Value::from("a"))),
        },
        Example {
            name: "coerce.to_string/int",
            expression: "to_string(&Value::from(1))",
            run: || check(Some("1".to_string()), coerce::to_string(&Value::from(1))),
        },
        Example {
            name: "coerce.to_string/empty-list",
            expression: "to_string(&list![])",
            run: || check(Some("[]".to_string()), coerce::to_string(&list![])),
        },
        Example {
            name: "coerce.to_string/str",
            expression: r#"to_string(&Value::from("a"))"#,
            run: || check(Some("a".to_string()), coerce::to_string(&Value::from("a"))),
        },
        Example {
            name: "coerce.to_string/empty-string",
            expression: r#"to_string(&Value::from(""))"#,
            run: || check(None, coerce::to_string(&Value::from(""))),
        },
        Example {
            name: "coerce.convert/parse",
            expression: r#"convert(&Value::from("1"), int_converter)"#,
            run: || {
                check(
                    Value::Int(1),
                    coerce::convert(&Value::from("1"), coerce::int_converter),
                )
            },
        },
        Example {
            name: "coerce.convert/default",
            expression: r#"convert_or(&Value::from("a"), int_converter, Value::Int(0))"#,
            run: || {
                check(
                    Value::Int(0),
                    coerce::convert_or(&Value::from("a"), coerce::int_converter, Value::Int(0)),
                )
            },
        },
        Example {
            name: "coerce.convert/falsy-collapse",
            expression: r#"convert_or(&Value::from("0"), int_converter, Value::Int(7))"#,
            run: || {
                check(
                    Value::Int(7),
                    coerce::convert_or(&Value::from("0"), coerce::int_converter, Value::Int(7)),
                )
            },
        },
        Example {
            name: "coerce.convert/absent-mode",
            expression: r#"convert_with(&Value::from("0"), int_converter, Value::Int(7), Collapse::Absent)"#,
            run: || {
                check(
                    Value::Int(0),
                    coerce::convert_with(
                        &Value::from("0"),
                        coerce::int_converter,
                        Value::Int(7),
                        coerce::Collapse::Absent,
                    ),
                )
            },
        },
        Example {
            name: "coerce.converter/lookup",
            expression: r#"converter("to_int")?(&Value::from("41"))"#,
            run: || {
                let actual = match coerce::converter("to_int") {
                    Ok(f) => f(&Value::from("41")),
                    Err(_) => Value::Null,
                };
                check(Value::Int(41), actual)
            },
        },
        Example {
            name: "coerce.converter/unknown",
            expression: r#"converter("not_a_converter")"#,
            run: || {
                let actual = match coerce::converter("not_a_converter") {
                    Ok(_) => "resolved".to_string(),
                    Err(err) => format!("{}: {}", err.code(), err),
                };
                check(
                    "INVALID_ARGUMENT: Invalid argument 'converter': \
                     Converter must be a function"
                        .to_string(),
                    actual,
                )
            },
        },
        Example {
            name: "shape.pluck/collection",
            expression: r#"pluck(&stooges, "name")"#,
            run: || {
                let stooges = list![
                    record! { "name" => "moe", "age" => 40 },
                    record! { "name" => "larry", "age" => 50 },
                    record! { "name" => "curly", "age" => 60 },
                ];
                check(
                    vec![
                        Value::from("moe"),
                        Value::from("larry"),
                        Value::from("curly"),
                    ],
                    shape::pluck(&stooges, "name"),
                )
            },
        },
        Example {
            name: "shape.pluck/single-record",
            expression: r#"pluck(&curly, "age")"#,
            run: || {
                let curly = Value::from(record! { "name" => "curly", "age" => 60 });
                check(vec![Value::Int(60)], shape::pluck(&curly, "age"))
            },
        },
        Example {
            name: "shape.pluck/default",
            expression: r#"pluck_or(&list![record! { "name" => "larry" }], "age", Value::Int(0))"#,
            run: || {
                check(
                    vec![Value::Int(0)],
                    shape::pluck_or(&list![record! { "name" => "larry" }], "age", Value::Int(0)),
                )
            },
        },
        Example {
            name: "shape.pluck/non-record-skipped",
            expression: r#"pluck(&list![record! { "name" => "moe" }, 42], "name")"#,
            run: || {
                check(
                    vec![Value::from("moe")],
                    shape::pluck(&list![record! { "name" => "moe" }, 42], "name"),
                )
            },
        },
        Example {
            name: "shape.pick/listed-keys",
            expression: r#"pick(&moe, &["name", "age"])"#,
            run: || {
                let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
                check(
                    record! { "name" => "moe", "age" => 50 },
                    shape::pick(&moe, &["name", "age"]),
                )
            },
        },
        Example {
            name: "shape.pick/missing-key-skipped",
            expression: r#"pick(&record! { "name" => "moe" }, &["name", "age"])"#,
            run: || {
                check(
                    record! { "name" => "moe" },
                    shape::pick(&record! { "name" => "moe" }, &["name", "age"]),
                )
            },
        },
        Example {
            name: "shape.pick/idempotent",
            expression: r#"pick(&pick(&moe, &keys), &keys) == pick(&moe, &keys)"#,
            run: || {
                let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
                let keys = ["name", "age"];
                let once = shape::pick(&moe, &keys);
                check(once.clone(), shape::pick(&once, &keys))
            },
        },
        Example {
            name: "shape.omit/blacklist",
            expression: r#"omit(&moe, &["userid", "age"])"#,
            run: || {
                let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
                check(
                    record! { "name" => "moe" },
                    shape::omit(&moe, &["userid", "age"]),
                )
            },
        },
        Example {
            name: "shape.omit/idempotent",
            expression: r#"omit(&omit(&moe, &keys), &keys) == omit(&moe, &keys)"#,
            run: || {
                let moe = record! { "name" => "moe", "age" => 50, "userid" => "moe1" };
                let keys = ["age"];
                let once = shape::omit(&moe, &keys);
                check(once.clone(), shape::omit(&once, &keys))
            },
        },
        Example {
            name: "shape.rename/mapping",
            expression: r#"rename(&record! { "a" => 1, "BBB" => 2 }, &[("a", "AAA")])"#,
            run: || {
                check(
                    record! { "AAA" => 1, "BBB" => 2 },
                    shape::rename(&record! { "a" => 1, "BBB" => 2 }, &[("a", "AAA")]),
                )
            },
        },
        Example {
            name: "shape.rename/missing-key",
            expression: r#"rename(&record! { "x" => 1 }, &[("a", "b")])"#,
            run: || {
                check(
                    record! { "x" => 1 },
                    shape::rename(&record! { "x" => 1 }, &[("a", "b")]),
                )
            },
        },
        Example {
            name: "shape.alias/collection",
            expression: r#"alias(&libraries, &[("ed", "edition")])"#,
            run: || {
                let libraries = list![
                    record! { "isbn" => 1, "ed" => 1 },
                    record! { "isbn" => 2, "ed" => 2 },
                ];
                check(
                    vec![
                        Value::from(record! { "isbn" => 1, "edition" => 1 }),
                        Value::from(record! { "isbn" => 2, "edition" => 2 }),
                    ],
                    shape::alias(&libraries, &[("ed", "edition")]),
                )
            },
        },
        Example {
            name: "shape.alias/single-record",
            expression: r#"alias(&Value::from(record! { "a" => 1 }), &[("a", "b")])"#,
            run: || {
                check(
                    vec![Value::from(record! { "b" => 1 })],
                    shape::alias(&Value::from(record! { "a" => 1 }), &[("a", "b")]),
                )
            },
        },
        Example {
            name: "shape.first/element",
            expression: "first(&list![1, 2, 3, 4, 5])",
            run: || check(Value::Int(1), shape::first(&list![1, 2, 3, 4, 5])),
        },
        Example {
            name: "shape.first/count",
            expression: "first_n(&list![1, 2, 3, 4, 5], 3)",
            run: || check(list![1, 2, 3], shape::first_n(&list![1, 2, 3, 4, 5], 3)),
        },
        Example {
            name: "shape.first/non-list",
            expression: r#"first(&Value::from("not-a-list"))"#,
            run: || check(Value::Null, shape::first(&Value::from("not-a-list"))),
        },
        Example {
            name: "shape.first/empty-list",
            expression: "first(&list![])",
            run: || check(Value::Null, shape::first(&list![])),
        },
        Example {
            name: "shape.first/count-clamps",
            expression: "first_n(&list![1, 2], 5)",
            run: || check(list![1, 2], shape::first_n(&list![1, 2], 5)),
        },
    ]
}
