//! Value types stored in a parse result

use serde::Serialize;
use std::fmt;

/// A value committed for one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// `SetTrue` / `SetFalse` flags
    Bool(bool),
    /// `Count` flags such as `-vvv`
    Count(u8),
    /// A single value
    Str(String),
    /// Several values from one occurrence, or every occurrence of an
    /// appending argument
    List(Vec<String>),
}

impl Value {
    /// Whether this value satisfies a dependency.
    ///
    /// `false`, zero, empty strings and empty lists are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Count(n) => *n > 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(v) => !v.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::List(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Count(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(v) => write!(f, "{}", v.join(" ")),
        }
    }
}
