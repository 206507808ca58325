/// A single ORDER BY term: a result-set column name and a direction.
///
/// Terms with a blank name are skipped during rendering; a list that is all
/// blanks renders no ORDER BY clause at all.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByColumn {
    pub column: String,
    pub descending: bool,
}

impl OrderByColumn {
    /// Ascending order on `column`.
    pub fn asc(column: impl Into<String>) -> OrderByColumn {
        OrderByColumn {
            column: column.into(),
            descending: false,
        }
    }

    /// Descending order on `column`.
    pub fn desc(column: impl Into<String>) -> OrderByColumn {
        OrderByColumn {
            column: column.into(),
            descending: true,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.column.trim().is_empty()
    }

    /// Returns `order_by` unless every term is blank, in which case
    /// `default` is used instead. Callers use this to fall back to a
    /// table's natural sort.
    pub fn or_default(
        order_by: Vec<OrderByColumn>,
        default: Vec<OrderByColumn>,
    ) -> Vec<OrderByColumn> {
        if order_by.iter().all(OrderByColumn::is_blank) {
            default
        } else {
            order_by
        }
    }
}
