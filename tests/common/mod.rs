#![allow(dead_code)] // each integration test binary uses a subset of these helpers

use std::collections::HashMap;
use subvar::{Node, Value};

/// Enables log output for a test run when `RUST_LOG` is set.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a document tree from a `serde_json::Value` fixture. Integers map to
/// int scalars, other numbers to float scalars; object key order is preserved.
pub fn node_from_json(json: &serde_json::Value) -> Node {
    match json {
        serde_json::Value::Null => Node::null(),
        serde_json::Value::Bool(b) => Node::bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Node::int(i),
            None => Node::float(n.as_f64().unwrap_or_default()),
        },
        serde_json::Value::String(s) => Node::string(s),
        serde_json::Value::Array(items) => {
            Node::sequence(items.iter().map(node_from_json).collect())
        }
        serde_json::Value::Object(map) => Node::mapping(
            map.iter()
                .map(|(k, v)| (Node::string(k), node_from_json(v)))
                .collect(),
        ),
    }
}

/// A replacement map shared by the integration scenarios.
pub fn sample_vars() -> HashMap<String, Value> {
    HashMap::from([
        ("NAME".to_string(), Value::from("frontend")),
        ("PORT".to_string(), Value::Int(7)),
        ("VERBOSE".to_string(), Value::Bool(true)),
        ("WEIGHT".to_string(), Value::Float(0.5)),
    ])
}

/// Follows a chain of mapping keys and returns the scalar at the end.
pub fn scalar_at<'a>(root: &'a Node, path: &[&str]) -> &'a subvar::ScalarNode {
    let mut node = root;
    for key in path {
        let Node::Mapping(map) = node else {
            panic!("expected mapping at '{key}'")
        };
        node = map
            .value_of(key)
            .unwrap_or_else(|| panic!("missing key '{key}'"));
    }
    node.as_scalar()
        .unwrap_or_else(|| panic!("expected scalar at {path:?}"))
}
