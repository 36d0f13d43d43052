/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// status!("selfcheck", "Running {} examples", count);
/// ```
#[macro_export]
macro_rules! status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

/// Build a [`Map`] literal.
///
/// ```
/// use plucky::{record, Value};
///
/// let moe = record! { "name" => "moe", "age" => 50 };
/// assert_eq!(moe.get("name"), Some(&Value::from("moe")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Map::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert(($key).to_string(), $crate::Value::from($value));
        )+
        map
    }};
}

/// Build a list [`Value`] literal.
///
/// ```
/// use plucky::{list, Value};
///
/// assert_eq!(list![1, 2], Value::List(vec![Value::Int(1), Value::Int(2)]));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Value::List(vec![$($crate::Value::from($item)),+])
    };
}

pub mod coerce;
pub mod doctor;
pub mod error;
pub mod output;
pub mod shape;
pub mod value;

// Re-export the helper surface for ergonomic library use
// Users can write `plucky::pick` instead of `plucky::shape::pick`
pub use coerce::*;
pub use error::{Error, Result};
pub use shape::*;
pub use value::{Map, Value};
