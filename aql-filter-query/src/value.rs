//! Decoded condition values and their AQL literal rendering.
//!
//! A [`Value`] is what the where compiler walks: a tagged union mirroring the
//! JSON data model. Decoding JSON never produces [`Value::Int`]; every JSON
//! number becomes a [`Value::Float`]. `Int` exists so that values built in
//! code can express integers, which the compiler rejects as comparison
//! operands.
//!
//! ```rust
//! use aql_filter_query::Value;
//!
//! assert_eq!(Value::from(22.0).to_aql().unwrap(), "22");
//! assert_eq!(Value::from("O'Hare").to_aql().unwrap(), r"'O\'Hare'");
//! assert_eq!(Value::from(vec![15.5, 13.24]).to_aql().unwrap(), "[15.5, 13.24]");
//! assert!(Value::from(1i64).to_aql().is_err());
//! ```

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::fmt::{self, Write};

use crate::error::{ErrorCode, QueryError, QueryResult};

/// A condition map: field or operator keys mapped to values.
pub type ConditionMap = IndexMap<String, Value>;

/// A decoded JSON-shaped value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value. Only produced by code, never by decoding.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Mapping from key to value, in document order.
    Map(ConditionMap),
}

impl Value {
    /// Build a map value from key/value pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "number",
            Self::Text(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Check if this is a boolean, number or string.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Text(_)
        )
    }

    /// Borrow the map, if this is one.
    pub fn as_map(&self) -> Option<&ConditionMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the list, if this is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Borrow the text, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render this value as an AQL literal.
    pub fn to_aql(&self) -> QueryResult<String> {
        let mut out = String::new();
        self.write_aql(&mut out)?;
        Ok(out)
    }

    /// Write this value as an AQL literal directly to a buffer.
    ///
    /// Lists render as `[a, b]` and may only hold scalars.
    pub fn write_aql(&self, buffer: &mut String) -> QueryResult<()> {
        match self {
            Self::List(items) => {
                buffer.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        buffer.push_str(", ");
                    }
                    if !item.is_scalar() {
                        return Err(shape_error(format!(
                            "list elements must be scalars, found {}",
                            item.kind()
                        )));
                    }
                    item.write_scalar(buffer)?;
                }
                buffer.push(']');
                Ok(())
            }
            _ => self.write_scalar(buffer),
        }
    }

    fn write_scalar(&self, buffer: &mut String) -> QueryResult<()> {
        match self {
            Self::Bool(b) => {
                buffer.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Self::Float(f) if f.is_finite() => {
                let _ = write!(buffer, "{}", f);
                Ok(())
            }
            Self::Float(f) => Err(type_error(format!("number {} is not finite", f))),
            Self::Int(i) => Err(type_error(format!(
                "integer operand {}, expected a floating-point number",
                i
            ))),
            Self::Text(s) => {
                buffer.push('\'');
                buffer.push_str(&escape(s));
                buffer.push('\'');
                Ok(())
            }
            other => Err(shape_error(format!(
                "cannot render a {} as a literal",
                other.kind()
            ))),
        }
    }
}

fn shape_error(message: String) -> QueryError {
    QueryError::new(ErrorCode::InvalidWhereShape, message)
}

fn type_error(message: String) -> QueryError {
    QueryError::new(ErrorCode::InvalidWhereType, message)
}

/// Escape a string for use inside a single-quoted AQL literal.
///
/// Only single quotes are touched; every `'` becomes `\'`.
pub fn escape(text: &str) -> String {
    text.replace('\'', "\\'")
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<ConditionMap> for Value {
    fn from(v: ConditionMap) -> Self {
        Self::Map(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    // JSON numbers are always decoded as floating-point.
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Float(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Float(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = ConditionMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}
