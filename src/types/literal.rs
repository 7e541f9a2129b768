use std::fmt;

use super::Value;

/// The right-hand side of an operand condition.
///
/// The parser only produces the scalar kinds. `Range` and `Set` come out of
/// the combiner when two conditions on the same field are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Literal {
    Number(i64),
    Text(String),
    Bool(bool),
    Range(Range),
    Set(Vec<String>),
}

/// Inclusive numeric interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub lower: i64,
    pub upper: i64,
}

impl Range {
    /// Smallest range covering both bounds, whichever order they come in.
    #[must_use]
    pub fn spanning(a: i64, b: i64) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    #[must_use]
    pub fn contains(&self, v: i64) -> bool {
        self.lower <= v && v <= self.upper
    }
}

impl Literal {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Number(_) => "number",
            Literal::Text(_) => "string",
            Literal::Bool(_) => "boolean",
            Literal::Range(_) => "range",
            Literal::Set(_) => "set",
        }
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Number(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Number(i64::from(v))
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::Text(v.to_owned())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::Text(v)
    }
}

impl From<Range> for Literal {
    fn from(r: Range) -> Self {
        Literal::Range(r)
    }
}

impl From<Value> for Literal {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => Literal::Number(n),
            Value::Text(s) => Literal::Text(s),
            Value::Bool(b) => Literal::Bool(b),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Literal {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Literal::Set(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(v) => write!(f, "{v}"),
            Literal::Text(v) => write!(f, "'{v}'"),
            Literal::Bool(v) => write!(f, "{v}"),
            Literal::Range(r) => write!(f, "{}..={}", r.lower, r.upper),
            Literal::Set(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{item}'")?;
                }
                f.write_str(")")
            }
        }
    }
}
