use super::{Filter, Statement, Value};

use daybook_core::schema::{ColumnId, TableId};

/// An UPDATE of the rows matching a filter.
#[derive(Debug, Clone)]
pub struct Update {
    pub table: TableId,

    /// Column / value pairs for the SET clause, rendered in order
    pub assignments: Vec<(ColumnId, Value)>,

    /// WHERE clause predicate
    pub filter: Filter,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
