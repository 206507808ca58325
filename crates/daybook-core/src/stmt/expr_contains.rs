use super::{Expr, ExprPattern};

/// Tests whether a string expression contains a literal needle.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprContains {
    /// The expression to test.
    pub expr: Box<Expr>,

    /// The literal needle, before any wildcard escaping.
    pub pattern: String,

    /// Character used to escape `%` and `_` when rendering.
    pub escape: char,
}

impl Expr {
    pub fn contains(expr: impl Into<Expr>, pattern: impl Into<String>, escape: char) -> Expr {
        ExprContains {
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
            escape,
        }
        .into()
    }
}

impl From<ExprContains> for Expr {
    fn from(value: ExprContains) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<ExprContains> for ExprPattern {
    fn from(value: ExprContains) -> Self {
        Self::Contains(value)
    }
}
