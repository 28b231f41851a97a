//! Domain-specific assertion macros for codex harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! ordering invariant was violated and where in the value.

use serde_json::Value;

/// Assert that every object inside a value iterates its keys in strictly
/// ascending byte order.
///
/// ```rust
/// assert_keys_sorted!(value);
/// ```
#[macro_export]
macro_rules! assert_keys_sorted {
    ($value:expr) => {{
        let value: &serde_json::Value = &$value;
        if let Some(path) = $crate::common::assertions::first_unsorted(value, "$") {
            panic!(
                "assert_keys_sorted! failed: keys out of order at {}\n  value: {}",
                path, value
            );
        }
    }};
}

/// Assert that the serialised form of a value is exactly `expected`.
#[macro_export]
macro_rules! assert_wire {
    ($value:expr, $expected:expr) => {{
        let actual = serde_json::to_string(&$value).expect("serialise value");
        pretty_assertions::assert_eq!(actual, $expected);
    }};
}

/// Path (JSONPath-ish) of the first object whose keys are not sorted.
pub fn first_unsorted(value: &Value, path: &str) -> Option<String> {
    match value {
        Value::Object(map) => {
            let keys: Vec<&String> = map.keys().collect();
            if keys.windows(2).any(|w| w[0].as_bytes() >= w[1].as_bytes()) {
                return Some(path.to_string());
            }
            map.iter()
                .find_map(|(k, v)| first_unsorted(v, &format!("{path}.{k}")))
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, v)| first_unsorted(v, &format!("{path}[{i}]"))),
        _ => None,
    }
}

/// Number of leaves (non-container values) in a value.
pub fn leaf_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(leaf_count).sum(),
        Value::Array(items) => items.iter().map(leaf_count).sum(),
        _ => 1,
    }
}
