use super::{Expr, Input};
use crate::Result;

/// A conditional over rows, usable both in memory and as a SQL WHERE clause.
///
/// The empty filter is the identity for [`and`](Filter::and) and
/// [`or`](Filter::or) in either operand position: combining with it returns
/// the other side unchanged. An empty filter renders no SQL text, binds no
/// parameters, and matches every row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter(Option<Expr>);

impl Filter {
    /// The filter that matches everything.
    pub const fn empty() -> Filter {
        Filter(None)
    }

    pub fn new(expr: impl Into<Expr>) -> Filter {
        Filter(Some(expr.into()))
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The underlying expression, if any.
    pub fn expr(&self) -> Option<&Expr> {
        self.0.as_ref()
    }

    pub fn into_expr(self) -> Option<Expr> {
        self.0
    }

    /// Combines two filters with AND.
    pub fn and(self, other: impl Into<Filter>) -> Filter {
        match (self.0, other.into().0) {
            (None, rhs) => Filter(rhs),
            (lhs, None) => Filter(lhs),
            (Some(lhs), Some(rhs)) => Filter(Some(Expr::and(lhs, rhs))),
        }
    }

    /// Combines two filters with OR.
    pub fn or(self, other: impl Into<Filter>) -> Filter {
        match (self.0, other.into().0) {
            (None, rhs) => Filter(rhs),
            (lhs, None) => Filter(lhs),
            (Some(lhs), Some(rhs)) => Filter(Some(Expr::or(lhs, rhs))),
        }
    }

    /// Tests a row against the filter. The empty filter matches everything.
    pub fn test(&self, input: &impl Input) -> Result<bool> {
        match &self.0 {
            Some(expr) => expr.eval_bool(input),
            None => Ok(true),
        }
    }
}

impl From<Expr> for Filter {
    fn from(value: Expr) -> Self {
        Filter(Some(value))
    }
}
