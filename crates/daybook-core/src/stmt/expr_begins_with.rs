use super::{Expr, ExprPattern};

/// Tests whether a string expression starts with a literal needle.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBeginsWith {
    /// The expression to test.
    pub expr: Box<Expr>,

    /// The literal needle, before any wildcard escaping.
    pub pattern: String,

    /// Character used to escape `%` and `_` when rendering.
    pub escape: char,
}

impl Expr {
    pub fn begins_with(expr: impl Into<Expr>, pattern: impl Into<String>, escape: char) -> Expr {
        ExprBeginsWith {
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
            escape,
        }
        .into()
    }
}

impl From<ExprBeginsWith> for Expr {
    fn from(value: ExprBeginsWith) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<ExprBeginsWith> for ExprPattern {
    fn from(value: ExprBeginsWith) -> Self {
        Self::BeginsWith(value)
    }
}
