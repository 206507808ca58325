use super::TableId;
use crate::stmt;

use std::fmt;

#[derive(Debug, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The column storage type.
    pub ty: stmt::Type,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// True if the column is an integer assigned by the database on insert.
    pub auto_increment: bool,

    /// How the column participates in the data layer's bookkeeping.
    pub usage: ColumnUsage,

    /// The primary key this column points at, for foreign-key columns.
    pub references: Option<ColumnId>,
}

/// How a column participates in the data layer's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnUsage {
    /// Change-tracking column stamped by the data layer itself.
    Audit,

    /// Ordinary entity data.
    Data,

    /// References another table's primary key.
    ForeignKey,

    /// The table's primary key.
    PrimaryKey,

    /// Entity data carrying a uniqueness constraint.
    UniqueKey,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        matches!(self.usage, ColumnUsage::PrimaryKey)
    }

    pub fn is_audit(&self) -> bool {
        matches!(self.usage, ColumnUsage::Audit)
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self.usage, ColumnUsage::ForeignKey)
    }

    /// Entity data from the application's point of view: everything except
    /// the primary key and the audit stamps.
    pub fn is_data(&self) -> bool {
        !matches!(self.usage, ColumnUsage::PrimaryKey | ColumnUsage::Audit)
    }
}

impl ColumnId {
    pub(crate) fn placeholder(table: TableId) -> Self {
        Self {
            table,
            index: usize::MAX,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
