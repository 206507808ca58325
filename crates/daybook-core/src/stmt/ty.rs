use super::Value;

/// A column's storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// TINYINT(1), read and written as a boolean
    Bool,

    /// DATETIME
    DateTime,

    /// INT
    Int,

    /// TEXT
    Text,

    /// TIMESTAMP
    Timestamp,

    /// VARCHAR with a maximum length
    Varchar(u16),
}

impl Type {
    /// Returns `true` if a value of this runtime shape can be stored in a
    /// column of this type. NULL is governed by the column's nullable flag,
    /// not here.
    pub fn casts_from(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Bool, Value::Bool(_))
                | (Self::DateTime | Self::Timestamp, Value::DateTime(_))
                | (Self::Int, Value::I32(_) | Value::I64(_))
                | (Self::Text | Self::Varchar(_), Value::String(_))
        )
    }

    pub fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::Varchar(_))
    }
}
