//! `$(NAME)` reference expansion with typed results.
//!
//! [`expand`] scans a raw string for `$(NAME)` references and resolves each
//! one through a caller-supplied lookup function. When the whole input is a
//! single reference the looked-up [`Value`] is returned as-is, preserving its
//! type; a reference embedded in surrounding text is rendered to its string
//! form and spliced in place. Names the lookup does not know are preserved
//! verbatim, so unexpanded references survive round trips.
//!
//! Expansion is single-pass: substituted output is never re-scanned for
//! further references.

use std::collections::HashMap;
use std::fmt;

/// A resolved replacement value.
///
/// The closed set of types a reference may resolve to. `Display` renders the
/// exact literal form used when a value is written back into a document:
/// base-10 for integers, `true`/`false` for booleans, the shortest
/// round-trippable decimal (never exponent notation) for floats, and the
/// string verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// Wraps a variable name in reference syntax.
fn wrap(name: &str) -> String {
    format!("$({name})")
}

/// A lookup function over one replacement map.
///
/// Names absent from the map resolve to `None`, which [`expand`] preserves
/// verbatim.
pub fn lookup_from(vars: &HashMap<String, Value>) -> impl Fn(&str) -> Option<Value> + '_ {
    move |name| vars.get(name).cloned()
}

/// Expands `$(NAME)` references in `input` using `lookup`.
///
/// Scanning rules:
/// - `$(NAME)` resolves through `lookup`; an unknown name is preserved
///   verbatim;
/// - an input that is exactly one reference returns the looked-up value
///   as-is, keeping its type;
/// - `$$` is an escaped `$`;
/// - `$(` with no closing `)` is literal text, as is a `$` followed by
///   anything else.
pub fn expand<F>(input: &str, lookup: F) -> Value
where
    F: Fn(&str) -> Option<Value>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        if let Some(after_escape) = after.strip_prefix('$') {
            out.push('$');
            rest = after_escape;
        } else if let Some(after_opener) = after.strip_prefix('(') {
            match after_opener.find(')') {
                Some(close) => {
                    let name = &after_opener[..close];
                    let resolved = lookup(name).unwrap_or_else(|| Value::Str(wrap(name)));
                    if input == wrap(name) {
                        // The whole input is one reference; preserve the
                        // resolved value's type.
                        return resolved;
                    }
                    out.push_str(&resolved.to_string());
                    rest = &after_opener[close + 1..];
                }
                None => {
                    // Incomplete reference; keep it literally.
                    out.push_str("$(");
                    rest = after_opener;
                }
            }
        } else {
            // An operator that does not begin a reference.
            out.push('$');
            rest = after;
        }
    }
    out.push_str(rest);
    Value::Str(out)
}
