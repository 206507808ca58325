use super::Expr;
use crate::schema::ColumnId;

/// A reference to a catalog column.
///
/// Filters reference columns by schema identifier and render the bare
/// backticked column name, unqualified by any table alias. WHERE clauses in
/// the scheduling queries always target result-set column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprColumn {
    pub column: ColumnId,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ColumnId> for ExprColumn {
    fn from(value: ColumnId) -> Self {
        ExprColumn { column: value }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
