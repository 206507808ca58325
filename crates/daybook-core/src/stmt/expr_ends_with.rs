use super::{Expr, ExprPattern};

/// Tests whether a string expression ends with a literal needle.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEndsWith {
    /// The expression to test.
    pub expr: Box<Expr>,

    /// The literal needle, before any wildcard escaping.
    pub pattern: String,

    /// Character used to escape `%` and `_` when rendering.
    pub escape: char,
}

impl Expr {
    pub fn ends_with(expr: impl Into<Expr>, pattern: impl Into<String>, escape: char) -> Expr {
        ExprEndsWith {
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
            escape,
        }
        .into()
    }
}

impl From<ExprEndsWith> for Expr {
    fn from(value: ExprEndsWith) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<ExprEndsWith> for ExprPattern {
    fn from(value: ExprEndsWith) -> Self {
        Self::EndsWith(value)
    }
}
