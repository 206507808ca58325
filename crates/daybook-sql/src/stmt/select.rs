use super::{Filter, OrderByColumn, SelectTable, Statement};

/// A SELECT over a table set.
#[derive(Debug, Clone)]
pub struct Select {
    /// The root table and everything joined to it
    pub tables: SelectTable,

    /// WHERE clause predicate
    pub filter: Filter,

    /// ORDER BY terms, rendered in order
    pub order_by: Vec<OrderByColumn>,
}

impl Select {
    pub fn new(tables: SelectTable) -> Select {
        Select {
            tables,
            filter: Filter::empty(),
            order_by: vec![],
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
