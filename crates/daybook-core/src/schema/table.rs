use super::{Column, ColumnId};

use std::fmt;

/// A database table.
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies a table.
    pub id: TableId,

    /// Name of the table.
    pub name: String,

    /// The table's default query alias.
    pub alias: String,

    /// The table's columns: primary key first, entity data in declared
    /// order, then the four audit columns.
    pub columns: Vec<Column>,

    /// The single-column primary key.
    pub primary_key: ColumnId,

    /// `createDate`, stamped when a row is first written.
    pub create_date: ColumnId,

    /// `createdBy`, stamped when a row is first written.
    pub created_by: ColumnId,

    /// `lastUpdate`, stamped on every change.
    pub last_update: ColumnId,

    /// `lastUpdateBy`, stamped on every change.
    pub last_update_by: ColumnId,
}

/// Uniquely identifies a table.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column belongs to a different table");
        self.columns.get(id.index).expect("invalid column ID")
    }

    pub fn column_named(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_column(&self) -> &Column {
        self.column(self.primary_key)
    }

    /// Entity-data columns in table order, primary key and audit columns
    /// excluded.
    pub fn data_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.is_data())
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
