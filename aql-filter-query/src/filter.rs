//! Where-condition compiler.
//!
//! A filter spec's `where` list holds condition maps. Compilation happens in
//! two steps:
//!
//! 1. [`WhereClause::parse`] walks the maps, validates every key and value
//!    and builds a [`Condition`] tree. All errors surface here.
//! 2. [`WhereClause::to_aql`] renders the tree into a single boolean
//!    expression. Rendering cannot fail.
//!
//! # Grammar
//!
//! | key           | value                      | output                             |
//! |---------------|----------------------------|------------------------------------|
//! | `and`         | list of condition maps     | `(a && b)`                         |
//! | `or`          | list of condition maps     | `(a \|\| b)`                       |
//! | `not`         | condition map              | `!(a)`                             |
//! | `like`        | `{text, search, case_insensitive?}` | `LIKE(var.f, 'p%'[, true])` |
//! | field         | `{eq\|neq\|gt\|gte\|lt\|lte: scalar}` | `var.f > 1`              |
//! | field         | list of scalars            | `var.f IN [1, 2]`                  |
//! | field         | scalar                     | `var.f == 'x'`                     |
//!
//! Operator keywords match case-insensitively. Keys within one map, and maps
//! within the top-level list, are joined with ` && `.
//!
//! ```rust
//! use aql_filter_query::{ConditionMap, Value, WhereClause};
//!
//! let mut condition = ConditionMap::new();
//! condition.insert(
//!     "or".to_string(),
//!     Value::from(vec![
//!         Value::map([("age", Value::map([("gt", 23.0)]))]),
//!         Value::map([("age", Value::map([("lt", 26.0)]))]),
//!     ]),
//! );
//! let conditions = vec![condition];
//!
//! let clause = WhereClause::parse(&conditions, 32).unwrap();
//! assert_eq!(clause.to_aql("var"), "(var.age > 23 || var.age < 26)");
//! ```

use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::identifier::validate_identifier;
use crate::value::{ConditionMap, Value, escape};

/// Default maximum nesting of `and` / `or` / `not`.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Comparison operators usable under a field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `eq` → `==`
    Eq,
    /// `neq` → `!=`
    Neq,
    /// `gt` → `>`
    Gt,
    /// `gte` → `>=`
    Gte,
    /// `lt` → `<`
    Lt,
    /// `lte` → `<=`
    Lte,
}

impl CompareOp {
    /// All operators, in key order.
    pub const ALL: [CompareOp; 6] = [
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
    ];

    /// The key used in a filter spec.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }

    /// The AQL operator symbol.
    pub fn as_aql(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    /// Look up an operator by key, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_aql())
    }
}

/// A validated condition ready for rendering.
///
/// Literals are stored pre-rendered, so rendering is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `var.field <op> literal`
    Compare {
        /// Field name.
        field: String,
        /// Operator.
        op: CompareOp,
        /// Rendered operand.
        literal: String,
    },
    /// `var.field IN [..]`
    In {
        /// Field name.
        field: String,
        /// Rendered list literal, brackets included.
        list: String,
    },
    /// `LIKE(var.field, 'pattern'[, true])`
    Like {
        /// Field name.
        field: String,
        /// Unescaped search pattern.
        search: String,
        /// Whether matching ignores case.
        case_insensitive: bool,
    },
    /// Parenthesised conjunction from an `and` key.
    And(Vec<Condition>),
    /// Parenthesised disjunction from an `or` key.
    Or(Vec<Condition>),
    /// Negation from a `not` key.
    Not(Box<Condition>),
    /// Keys of one condition map, joined without parentheses.
    All(Vec<Condition>),
}

impl Condition {
    /// Render this condition against `variable`.
    pub fn to_aql(&self, variable: &str) -> String {
        let mut out = String::new();
        self.write_aql(variable, &mut out);
        out
    }

    /// Write this condition directly to a buffer.
    pub fn write_aql(&self, variable: &str, buffer: &mut String) {
        match self {
            Self::Compare { field, op, literal } => {
                write_field(variable, field, buffer);
                buffer.push(' ');
                buffer.push_str(op.as_aql());
                buffer.push(' ');
                buffer.push_str(literal);
            }
            Self::In { field, list } => {
                write_field(variable, field, buffer);
                buffer.push_str(" IN ");
                buffer.push_str(list);
            }
            Self::Like {
                field,
                search,
                case_insensitive,
            } => {
                buffer.push_str("LIKE(");
                write_field(variable, field, buffer);
                buffer.push_str(", '");
                buffer.push_str(&escape(search));
                buffer.push('\'');
                if *case_insensitive {
                    buffer.push_str(", true");
                }
                buffer.push(')');
            }
            Self::And(parts) => {
                buffer.push('(');
                write_joined(parts, " && ", variable, buffer);
                buffer.push(')');
            }
            Self::Or(parts) => {
                buffer.push('(');
                write_joined(parts, " || ", variable, buffer);
                buffer.push(')');
            }
            Self::Not(inner) => {
                buffer.push_str("!(");
                inner.write_aql(variable, buffer);
                buffer.push(')');
            }
            Self::All(parts) => write_joined(parts, " && ", variable, buffer),
        }
    }
}

fn write_field(variable: &str, field: &str, buffer: &mut String) {
    buffer.push_str(variable);
    buffer.push('.');
    buffer.push_str(field);
}

fn write_joined(parts: &[Condition], separator: &str, variable: &str, buffer: &mut String) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            buffer.push_str(separator);
        }
        part.write_aql(variable, buffer);
    }
}

/// The compiled `where` list: one entry per non-empty condition map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    conditions: Vec<Condition>,
}

impl WhereClause {
    /// Parse and validate a list of condition maps.
    ///
    /// `max_depth` bounds the nesting of `and`, `or` and `not`.
    pub fn parse(conditions: &[ConditionMap], max_depth: usize) -> QueryResult<Self> {
        let parser = Parser { max_depth };
        let mut parsed = Vec::with_capacity(conditions.len());
        for (i, map) in conditions.iter().enumerate() {
            if let Some(condition) = parser.parse_map(map, &format!("where[{}]", i), 0)? {
                parsed.push(condition);
            }
        }
        Ok(Self { conditions: parsed })
    }

    /// The parsed conditions.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Check if there is nothing to filter on.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the whole clause, joining conditions with ` && `.
    pub fn to_aql(&self, variable: &str) -> String {
        let mut out = String::new();
        write_joined(&self.conditions, " && ", variable, &mut out);
        out
    }
}

/// Compile a list of condition maps straight to a fragment.
pub fn compile_where(
    conditions: &[ConditionMap],
    variable: &str,
    max_depth: usize,
) -> QueryResult<String> {
    Ok(WhereClause::parse(conditions, max_depth)?.to_aql(variable))
}

#[derive(Debug, Clone, Copy)]
enum Logical {
    And,
    Or,
}

impl Logical {
    fn key(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

struct Parser {
    max_depth: usize,
}

impl Parser {
    /// Returns `None` for an empty map.
    fn parse_map(
        &self,
        map: &ConditionMap,
        path: &str,
        depth: usize,
    ) -> QueryResult<Option<Condition>> {
        let mut parts = Vec::with_capacity(map.len());
        for (key, value) in map {
            parts.push(self.parse_entry(key, value, path, depth)?);
        }

        Ok(match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(Condition::All(parts)),
        })
    }

    fn parse_entry(
        &self,
        key: &str,
        value: &Value,
        path: &str,
        depth: usize,
    ) -> QueryResult<Condition> {
        let path = format!("{}.{}", path, key);

        if key.eq_ignore_ascii_case("and") {
            self.parse_logical(Logical::And, value, &path, depth + 1)
        } else if key.eq_ignore_ascii_case("or") {
            self.parse_logical(Logical::Or, value, &path, depth + 1)
        } else if key.eq_ignore_ascii_case("not") {
            self.parse_not(value, &path, depth + 1)
        } else if key.eq_ignore_ascii_case("like") {
            parse_like(value, &path)
        } else {
            parse_field(key, value, &path)
        }
    }

    fn check_depth(&self, path: &str, depth: usize) -> QueryResult<()> {
        if depth > self.max_depth {
            return Err(QueryError::too_deep(path, self.max_depth));
        }
        Ok(())
    }

    fn parse_logical(
        &self,
        op: Logical,
        value: &Value,
        path: &str,
        depth: usize,
    ) -> QueryResult<Condition> {
        self.check_depth(path, depth)?;

        let items = value.as_list().ok_or_else(|| {
            QueryError::where_shape(
                path,
                format!(
                    "'{}' expects a list of condition maps, found {}",
                    op.key(),
                    value.kind()
                ),
            )
        })?;
        if items.is_empty() {
            return Err(QueryError::where_shape(
                path,
                format!("'{}' needs at least one condition", op.key()),
            ));
        }

        let mut parts = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{}[{}]", path, i);
            parts.push(self.parse_nested(item, &item_path, depth)?);
        }

        Ok(match op {
            Logical::And => Condition::And(parts),
            Logical::Or => Condition::Or(parts),
        })
    }

    fn parse_not(&self, value: &Value, path: &str, depth: usize) -> QueryResult<Condition> {
        self.check_depth(path, depth)?;
        let inner = self.parse_nested(value, path, depth)?;
        Ok(Condition::Not(Box::new(inner)))
    }

    /// Parse a value that must be a non-empty condition map.
    fn parse_nested(&self, value: &Value, path: &str, depth: usize) -> QueryResult<Condition> {
        let map = value.as_map().ok_or_else(|| {
            QueryError::where_shape(
                path,
                format!("expected a condition map, found {}", value.kind()),
            )
        })?;
        self.parse_map(map, path, depth)?
            .ok_or_else(|| QueryError::where_shape(path, "condition map must not be empty"))
    }
}

fn parse_like(value: &Value, path: &str) -> QueryResult<Condition> {
    let map = value.as_map().ok_or_else(|| {
        QueryError::where_shape(
            path,
            format!("'like' expects a map, found {}", value.kind()),
        )
        .with_example_suggestion(
            "Pass the field, the pattern and optionally case_insensitive",
            r#"{"like": {"text": "name", "search": "jo%", "case_insensitive": true}}"#,
        )
    })?;

    let mut text = None;
    let mut search = None;
    let mut case_insensitive = false;

    for (key, entry) in map {
        match key.as_str() {
            "text" => {
                let field = entry.as_str().ok_or_else(|| {
                    QueryError::where_shape(
                        format!("{}.text", path),
                        format!("'text' must be a field name string, found {}", entry.kind()),
                    )
                })?;
                text = Some(field);
            }
            "search" => {
                let pattern = entry.as_str().ok_or_else(|| {
                    QueryError::where_shape(
                        format!("{}.search", path),
                        format!("'search' must be a string, found {}", entry.kind()),
                    )
                })?;
                search = Some(pattern);
            }
            "case_insensitive" => match entry {
                Value::Bool(flag) => case_insensitive = *flag,
                other => {
                    return Err(QueryError::where_shape(
                        format!("{}.case_insensitive", path),
                        format!("'case_insensitive' must be a boolean, found {}", other.kind()),
                    ));
                }
            },
            other => {
                return Err(QueryError::where_shape(
                    path,
                    format!("unknown 'like' option '{}'", other),
                ));
            }
        }
    }

    let field = text
        .ok_or_else(|| QueryError::where_shape(path, "'like' requires a 'text' field name"))?;
    let search =
        search.ok_or_else(|| QueryError::where_shape(path, "'like' requires a 'search' pattern"))?;
    validate_identifier(field).map_err(|e| e.at(format!("{}.text", path)))?;

    Ok(Condition::Like {
        field: field.to_string(),
        search: search.to_string(),
        case_insensitive,
    })
}

fn parse_field(field: &str, value: &Value, path: &str) -> QueryResult<Condition> {
    validate_identifier(field).map_err(|e| e.at(path))?;

    match value {
        Value::Map(map) => parse_comparison(field, map, path),
        Value::List(_) => {
            let list = value.to_aql().map_err(|e| e.at(path))?;
            Ok(Condition::In {
                field: field.to_string(),
                list,
            })
        }
        Value::Null => Err(QueryError::where_shape(
            path,
            format!("unsupported value for '{}': null", field),
        )),
        scalar => Ok(Condition::Compare {
            field: field.to_string(),
            op: CompareOp::Eq,
            literal: scalar.to_aql().map_err(|e| e.at(path))?,
        }),
    }
}

fn parse_comparison(field: &str, map: &ConditionMap, path: &str) -> QueryResult<Condition> {
    let mut entries = map.iter();
    let (key, operand) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(QueryError::where_shape(
                path,
                format!(
                    "'{}' expects a map with exactly one comparison operator, found {} keys",
                    field,
                    map.len()
                ),
            )
            .with_example_suggestion(
                "Combine several comparisons with 'and'",
                r#"{"and": [{"age": {"gte": 18}}, {"age": {"lt": 65}}]}"#,
            ));
        }
    };

    let op = CompareOp::from_key(key).ok_or_else(|| {
        QueryError::where_shape(
            path,
            format!(
                "unknown comparison operator '{}', expected one of eq, neq, gt, gte, lt, lte",
                key
            ),
        )
    })?;

    let path = format!("{}.{}", path, key);
    if !operand.is_scalar() {
        return Err(QueryError::where_type(
            &path,
            format!(
                "'{}' operand must be a number, string or boolean, found {}",
                op.key(),
                operand.kind()
            ),
        ));
    }
    let literal = operand.to_aql().map_err(|e| e.at(&path))?;

    Ok(Condition::Compare {
        field: field.to_string(),
        op,
        literal,
    })
}
