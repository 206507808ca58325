use super::{Filter, Statement};

use daybook_core::schema::TableId;

/// A DELETE of the rows matching a filter.
#[derive(Debug, Clone)]
pub struct Delete {
    pub table: TableId,

    /// WHERE clause predicate
    pub filter: Filter,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
