use super::{Filter, Statement};

use daybook_core::schema::TableId;

/// A SELECT COUNT over a single table.
#[derive(Debug, Clone)]
pub struct Count {
    pub table: TableId,

    /// WHERE clause predicate
    pub filter: Filter,
}

impl Count {
    pub fn new(table: TableId) -> Count {
        Count {
            table,
            filter: Filter::empty(),
        }
    }
}

impl From<Count> for Statement {
    fn from(value: Count) -> Self {
        Statement::Count(value)
    }
}
