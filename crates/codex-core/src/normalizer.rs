//! Normalizer: rewrites a parsed JSON value into deterministic key order.
//!
//! Object keys are reordered byte-wise (case-sensitive) at every nesting
//! level, including objects nested inside arrays. Array order and leaf
//! values are never touched, so the output differs from the input only in
//! the order in which object entries are stored and serialised.
//!
//! Entries are sorted explicitly: `serde_json::Map` iteration order depends
//! on whether the `preserve_order` feature is enabled in the build.
//!
//! Both walks keep their own work stack instead of recursing, so nesting
//! depth is bounded by heap, not by the calling thread's stack.

use std::cmp::Ordering;
use std::vec;

use serde_json::{Map, Value};

/// Key ordering used for every object: byte-wise lexicographic.
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// A container being rebuilt: children already normalized, plus the ones
/// still to visit.
enum Frame {
    Array {
        done: Vec<Value>,
        rest: vec::IntoIter<Value>,
    },
    Object {
        done: Map<String, Value>,
        key: String,
        rest: vec::IntoIter<(String, Value)>,
    },
}

enum Node {
    Leaf(Value),
    Container(Frame),
}

impl Frame {
    fn open(value: Value) -> Node {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<(String, Value)> = map.into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
                Node::Container(Frame::Object {
                    done: Map::new(),
                    key: String::new(),
                    rest: entries.into_iter(),
                })
            }
            Value::Array(items) => Node::Container(Frame::Array {
                done: Vec::with_capacity(items.len()),
                rest: items.into_iter(),
            }),
            leaf @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => {
                Node::Leaf(leaf)
            }
        }
    }

    fn next_child(&mut self) -> Option<Value> {
        match self {
            Frame::Array { rest, .. } => rest.next(),
            Frame::Object { key, rest, .. } => rest.next().map(|(k, v)| {
                *key = k;
                v
            }),
        }
    }

    /// Store the normalized form of the child last returned by `next_child`.
    fn attach(&mut self, child: Value) {
        match self {
            Frame::Array { done, .. } => done.push(child),
            Frame::Object { done, key, .. } => {
                done.insert(std::mem::take(key), child);
            }
        }
    }

    fn close(self) -> Value {
        match self {
            Frame::Array { done, .. } => Value::Array(done),
            Frame::Object { done, .. } => Value::Object(done),
        }
    }
}

/// Return `value` with every object's entries in [`compare_keys`] order.
///
/// Total and pure.
pub fn normalize(value: Value) -> Value {
    let mut stack: Vec<Frame> = Vec::new();
    let mut pending = value;

    loop {
        // Descend to the first leaf or empty container.
        let mut finished = loop {
            match Frame::open(pending) {
                Node::Leaf(leaf) => break leaf,
                Node::Container(mut frame) => match frame.next_child() {
                    Some(child) => {
                        stack.push(frame);
                        pending = child;
                    }
                    None => break frame.close(),
                },
            }
        };

        // Hand finished values up until some parent still has children left.
        loop {
            let Some(mut parent) = stack.pop() else {
                return finished;
            };
            parent.attach(finished);
            match parent.next_child() {
                Some(child) => {
                    stack.push(parent);
                    pending = child;
                    break;
                }
                None => finished = parent.close(),
            }
        }
    }
}

/// Whether every object inside `value` already iterates in strictly
/// ascending key order.
pub fn is_normalized(value: &Value) -> bool {
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        match value {
            Value::Object(map) => {
                let keys: Vec<&String> = map.keys().collect();
                if !keys
                    .windows(2)
                    .all(|w| compare_keys(w[0], w[1]) == Ordering::Less)
                {
                    return false;
                }
                pending.extend(map.values());
            }
            Value::Array(items) => pending.extend(items),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }
    true
}
