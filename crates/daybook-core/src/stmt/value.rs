use crate::Result;

use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// A runtime value: a column's content or a bound statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Date and time, UTC without an offset
    DateTime(NaiveDateTime),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    /// Returns the null value
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(crate::err!("cannot convert value to bool")),
        }
    }

    pub fn to_i32(self) -> Result<i32> {
        match self {
            Self::I32(v) => Ok(v),
            _ => Err(crate::err!("cannot convert value to i32")),
        }
    }

    /// Converts to `i64`, widening a 32-bit value.
    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I32(v) => Ok(v.into()),
            Self::I64(v) => Ok(v),
            _ => Err(crate::err!("cannot convert value to i64")),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

// Ordered comparison is only defined between values of the same family.
// Integers of different widths compare by widening; everything else,
// including NULL, is unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(lhs), Value::Bool(rhs)) => lhs.partial_cmp(rhs),
            (Value::DateTime(lhs), Value::DateTime(rhs)) => lhs.partial_cmp(rhs),
            (Value::I32(lhs), Value::I32(rhs)) => lhs.partial_cmp(rhs),
            (Value::I64(lhs), Value::I64(rhs)) => lhs.partial_cmp(rhs),
            (Value::I32(lhs), Value::I64(rhs)) => i64::from(*lhs).partial_cmp(rhs),
            (Value::I64(lhs), Value::I32(rhs)) => lhs.partial_cmp(&i64::from(*rhs)),
            (Value::String(lhs), Value::String(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
