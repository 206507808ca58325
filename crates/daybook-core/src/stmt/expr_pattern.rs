use super::*;

/// A string pattern test over an expression.
///
/// The three substring forms carry the raw needle; wildcard wrapping and
/// escaping happen when the pattern is rendered to SQL. `Like` carries a
/// pattern the caller built, wildcards included. All four render as
/// `LIKE ?`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprPattern {
    /// The value starts with the needle
    BeginsWith(ExprBeginsWith),

    /// The value contains the needle
    Contains(ExprContains),

    /// The value ends with the needle
    EndsWith(ExprEndsWith),

    /// The value matches a caller-built LIKE pattern
    Like(ExprLike),
}

impl ExprPattern {
    /// The expression the pattern applies to.
    pub fn expr(&self) -> &Expr {
        match self {
            Self::BeginsWith(e) => &e.expr,
            Self::Contains(e) => &e.expr,
            Self::EndsWith(e) => &e.expr,
            Self::Like(e) => &e.expr,
        }
    }

    /// The raw needle (or full LIKE pattern for [`ExprPattern::Like`]).
    pub fn pattern(&self) -> &str {
        match self {
            Self::BeginsWith(e) => &e.pattern,
            Self::Contains(e) => &e.pattern,
            Self::EndsWith(e) => &e.pattern,
            Self::Like(e) => &e.pattern,
        }
    }

    /// The escape character used when rendering wildcards.
    pub fn escape(&self) -> char {
        match self {
            Self::BeginsWith(e) => e.escape,
            Self::Contains(e) => e.escape,
            Self::EndsWith(e) => e.escape,
            Self::Like(e) => e.escape,
        }
    }
}

impl From<ExprPattern> for Expr {
    fn from(value: ExprPattern) -> Self {
        Self::Pattern(value)
    }
}
