use super::{Statement, Value};

use daybook_core::schema::{ColumnId, TableId};

/// A single-row INSERT.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableId,

    /// Column / value pairs, rendered in order
    pub assignments: Vec<(ColumnId, Value)>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
