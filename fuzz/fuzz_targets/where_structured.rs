//! Fuzz target for structured where-condition trees.
//!
//! Generates arbitrary condition trees, including operator keys, to find
//! panics or unbounded recursion in the where compiler.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_where_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use aql_filter_query::{ConditionMap, Value, WhereClause};
use libfuzzer_sys::fuzz_target;

/// A fuzzable value.
#[derive(Debug, Arbitrary, Clone)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<FuzzValue>),
    Map(Vec<(FuzzKey, FuzzValue)>),
}

/// Keys biased towards the operator keywords.
#[derive(Debug, Arbitrary, Clone)]
enum FuzzKey {
    And,
    Or,
    Not,
    Like,
    Eq,
    Gt,
    Text,
    Search,
    CaseInsensitive,
    Field(String),
}

impl FuzzKey {
    fn as_str(&self) -> &str {
        match self {
            FuzzKey::And => "and",
            FuzzKey::Or => "OR",
            FuzzKey::Not => "nOt",
            FuzzKey::Like => "like",
            FuzzKey::Eq => "eq",
            FuzzKey::Gt => "gt",
            FuzzKey::Text => "text",
            FuzzKey::Search => "search",
            FuzzKey::CaseInsensitive => "case_insensitive",
            FuzzKey::Field(name) => name,
        }
    }
}

impl FuzzValue {
    fn into_value(self, depth: usize) -> Value {
        // Limit recursion depth to prevent stack overflow in the generator
        if depth > 48 {
            return Value::Null;
        }

        match self {
            FuzzValue::Null => Value::Null,
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Int(i) => Value::Int(i),
            FuzzValue::Float(f) => Value::Float(f),
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::List(items) => Value::List(
                items
                    .into_iter()
                    .take(16)
                    .map(|v| v.into_value(depth + 1))
                    .collect(),
            ),
            FuzzValue::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .take(16)
                    .map(|(k, v)| (k.as_str().to_string(), v.into_value(depth + 1)))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    max_depth: u8,
    conditions: Vec<Vec<(FuzzKey, FuzzValue)>>,
}

fuzz_target!(|input: FuzzInput| {
    let conditions: Vec<ConditionMap> = input
        .conditions
        .into_iter()
        .take(8)
        .map(|entries| {
            entries
                .into_iter()
                .map(|(k, v)| (k.as_str().to_string(), v.into_value(0)))
                .collect()
        })
        .collect();

    // These operations should never panic
    if let Ok(clause) = WhereClause::parse(&conditions, input.max_depth as usize) {
        let aql = clause.to_aql("var");
        assert_eq!(clause.is_empty(), aql.is_empty());
    }
});
