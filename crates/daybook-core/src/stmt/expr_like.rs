use super::{Expr, ExprPattern};

/// Tests a string expression against a caller-built LIKE pattern.
///
/// Unlike the substring forms, the pattern is taken verbatim: the caller
/// already placed the wildcards and escaped any literal `%` / `_` with the
/// escape character.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    /// The expression to test.
    pub expr: Box<Expr>,

    /// The full LIKE pattern, wildcards included.
    pub pattern: String,

    /// Character that escapes a literal wildcard within the pattern.
    pub escape: char,
}

impl Expr {
    pub fn like(expr: impl Into<Expr>, pattern: impl Into<String>, escape: char) -> Expr {
        ExprLike {
            expr: Box::new(expr.into()),
            pattern: pattern.into(),
            escape,
        }
        .into()
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Self::Pattern(value.into())
    }
}

impl From<ExprLike> for ExprPattern {
    fn from(value: ExprLike) -> Self {
        Self::Like(value)
    }
}
