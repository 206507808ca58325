use super::*;
use crate::schema::ColumnId;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a catalog column
    Column(ExprColumn),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// OR a set of expressions
    Or(ExprOr),

    /// Checks if an expression matches a pattern.
    Pattern(ExprPattern),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    /// Returns true if the expression is the constant NULL.
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a compound AND / OR.
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::And(..) | Self::Or(..))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<NaiveDateTime> for Expr {
    fn from(value: NaiveDateTime) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<ColumnId> for Expr {
    fn from(value: ColumnId) -> Self {
        Self::Column(value.into())
    }
}
