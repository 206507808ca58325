mod context;
pub use context::UserContext;

mod state;
pub use state::RowState;

use crate::{
    schema::{Column, ColumnId, Table, TableId},
    stmt::{self, Type, Value},
    Error, Result,
};

use chrono::NaiveDateTime;

/// Primary key value carried by rows that have not been inserted yet.
pub const UNSAVED_PK: i32 = i32::MIN;

/// A single table row tracked through its edit lifecycle.
///
/// The row holds one value per column of its table, in column order, plus a
/// snapshot of the last values loaded from or committed to the database.
/// Mutations go through [`Row::apply_mutation`], which enforces the state
/// machine and stamps the audit columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    table: TableId,

    state: RowState,

    /// Current values, one per column in table order
    values: Vec<Value>,

    /// Values as of the last load or accept
    original: Vec<Value>,
}

/// Describes a single applied mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChange {
    pub column: ColumnId,
    pub old: Value,
    pub new: Value,
}

impl Row {
    /// Creates an unsaved row with defaulted values and fresh audit stamps.
    ///
    /// The primary key and any foreign key columns start at [`UNSAVED_PK`];
    /// saving fails until the foreign keys are assigned.
    pub fn new(table: &Table, ctx: &UserContext) -> Row {
        let now = now();
        let values: Vec<Value> = table
            .columns
            .iter()
            .map(|column| {
                if column.is_primary_key() || column.is_foreign_key() {
                    Value::I32(UNSAVED_PK)
                } else if column.id == table.create_date || column.id == table.last_update {
                    now.into()
                } else if column.id == table.created_by || column.id == table.last_update_by {
                    ctx.user_name().into()
                } else {
                    zero_value(column.ty, now)
                }
            })
            .collect();

        Row {
            table: table.id,
            state: RowState::New,
            original: values.clone(),
            values,
        }
    }

    /// Wraps values loaded from the database as an unmodified row.
    pub fn from_values(table: &Table, values: Vec<Value>) -> Result<Row> {
        check_values(table, &values)?;

        Ok(Row {
            table: table.id,
            state: RowState::Unmodified,
            original: values.clone(),
            values,
        })
    }

    pub fn table(&self) -> TableId {
        self.table
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    /// Returns true when the row carries changes a save would write.
    pub fn is_modified(&self) -> bool {
        matches!(self.state, RowState::Modified | RowState::New)
    }

    pub fn value(&self, column: ColumnId) -> &Value {
        assert_eq!(column.table, self.table, "column belongs to another table");
        &self.values[column.index]
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// # Panics
    ///
    /// Panics when the primary key slot does not hold an integer.
    pub fn primary_key(&self, table: &Table) -> i32 {
        assert_eq!(table.id, self.table);

        match &self.values[table.primary_key.index] {
            Value::I32(pk) => *pk,
            value => panic!("primary key is not an integer; value={value:?}"),
        }
    }

    pub fn create_date(&self, table: &Table) -> NaiveDateTime {
        assert_eq!(table.id, self.table);
        self.date_time_at(table.create_date)
    }

    pub fn created_by(&self, table: &Table) -> &str {
        assert_eq!(table.id, self.table);
        self.text_at(table.created_by)
    }

    pub fn last_update(&self, table: &Table) -> NaiveDateTime {
        assert_eq!(table.id, self.table);
        self.date_time_at(table.last_update)
    }

    pub fn last_update_by(&self, table: &Table) -> &str {
        assert_eq!(table.id, self.table);
        self.text_at(table.last_update_by)
    }

    /// Applies a single mutation, returning the change when one took place.
    ///
    /// Applying a value equal to the current one is a no-op and returns
    /// `None`. Anything else replaces the value, stamps the update audit
    /// columns, and moves an unmodified row to [`RowState::Modified`].
    pub fn apply_mutation(
        &mut self,
        table: &Table,
        ctx: &UserContext,
        column: ColumnId,
        value: Value,
    ) -> Result<Option<PropertyChange>> {
        assert_eq!(table.id, self.table);

        if self.state == RowState::Deleted {
            return Err(Error::invalid_row_state("deleted row cannot be modified"));
        }

        if column.table != self.table {
            return Err(crate::err!(
                "column {:?} does not belong to table `{}`",
                column,
                table.name
            ));
        }

        let descriptor = table.column(column);

        if descriptor.is_primary_key() {
            crate::bail!("column `{}` is assigned by the database", descriptor.name);
        }

        if descriptor.is_audit() {
            crate::bail!("column `{}` is maintained automatically", descriptor.name);
        }

        if value.is_null() {
            crate::bail!("column `{}` is not nullable", descriptor.name);
        }

        if !descriptor.ty.casts_from(&value) {
            crate::bail!(
                "value {:?} does not fit column `{}` of type {:?}",
                value,
                descriptor.name,
                descriptor.ty
            );
        }

        if self.values[column.index] == value {
            return Ok(None);
        }

        let old = std::mem::replace(&mut self.values[column.index], value.clone());
        self.stamp_update(table, ctx);

        if self.state == RowState::Unmodified {
            self.state = RowState::Modified;
        }

        Ok(Some(PropertyChange {
            column,
            old,
            new: value,
        }))
    }

    /// Moves the row to [`RowState::Deleted`]. Terminal for unsaved rows.
    pub fn mark_deleted(&mut self) -> Result<()> {
        if self.state == RowState::Deleted {
            return Err(Error::invalid_row_state("row has already been deleted"));
        }

        self.state = RowState::Deleted;
        Ok(())
    }

    /// Makes the current values the new baseline.
    pub fn accept_changes(&mut self) {
        self.original = self.values.clone();

        if self.state == RowState::Modified {
            self.state = RowState::Unmodified;
        }
    }

    /// Discards unsaved changes, restoring the baseline values.
    pub fn reject_changes(&mut self) {
        self.values = self.original.clone();

        if self.state == RowState::Modified {
            self.state = RowState::Unmodified;
        }
    }

    /// Revives a deleted row as a new one with a fresh identity.
    pub fn reset_row_state(&mut self, table: &Table, ctx: &UserContext) -> Result<()> {
        assert_eq!(table.id, self.table);

        if self.state != RowState::Deleted {
            return Err(Error::invalid_row_state("only a deleted row can be reset"));
        }

        self.state = RowState::New;
        self.values[table.primary_key.index] = Value::I32(UNSAVED_PK);
        self.stamp_update(table, ctx);
        self.original = self.values.clone();
        Ok(())
    }

    /// Records the database-assigned primary key after an insert.
    pub fn assign_primary_key(&mut self, table: &Table, pk: i32) -> Result<()> {
        assert_eq!(table.id, self.table);

        if self.state != RowState::New {
            return Err(Error::invalid_row_state(
                "primary key can only be assigned to a new row",
            ));
        }

        self.values[table.primary_key.index] = Value::I32(pk);
        Ok(())
    }

    /// Replaces the row contents with freshly loaded values.
    pub fn refresh_from(&mut self, table: &Table, values: Vec<Value>) -> Result<()> {
        assert_eq!(table.id, self.table);

        if self.state == RowState::Deleted {
            return Err(Error::invalid_row_state("deleted row cannot be refreshed"));
        }

        check_values(table, &values)?;

        self.original = values.clone();
        self.values = values;
        self.state = RowState::Unmodified;
        Ok(())
    }

    /// Returns the first foreign key column still holding [`UNSAVED_PK`].
    pub fn unassigned_foreign_key<'a>(&self, table: &'a Table) -> Option<&'a Column> {
        assert_eq!(table.id, self.table);

        table.columns.iter().find(|column| {
            column.is_foreign_key() && self.values[column.id.index] == Value::I32(UNSAVED_PK)
        })
    }

    fn stamp_update(&mut self, table: &Table, ctx: &UserContext) {
        let now = now();
        self.values[table.last_update.index] = now.into();
        self.values[table.last_update_by.index] = ctx.user_name().into();

        if self.state == RowState::New {
            self.values[table.create_date.index] = now.into();
            self.values[table.created_by.index] = ctx.user_name().into();
        }
    }

    fn date_time_at(&self, column: ColumnId) -> NaiveDateTime {
        match &self.values[column.index] {
            Value::DateTime(ts) => *ts,
            value => panic!("audit column is not a date-time; value={value:?}"),
        }
    }

    fn text_at(&self, column: ColumnId) -> &str {
        self.values[column.index]
            .as_str()
            .expect("audit column is not text")
    }
}

impl stmt::Input for Row {
    fn resolve(&self, column: ColumnId) -> Option<&Value> {
        if column.table != self.table {
            return None;
        }

        self.values.get(column.index)
    }
}

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn zero_value(ty: Type, now: NaiveDateTime) -> Value {
    match ty {
        Type::Bool => Value::Bool(false),
        Type::Int => Value::I32(0),
        Type::DateTime | Type::Timestamp => Value::DateTime(now),
        Type::Text | Type::Varchar(_) => Value::String(String::new()),
    }
}

fn check_values(table: &Table, values: &[Value]) -> Result<()> {
    if values.len() != table.columns.len() {
        crate::bail!(
            "table `{}` has {} columns, got {} values",
            table.name,
            table.columns.len(),
            values.len()
        );
    }

    for (column, value) in table.columns.iter().zip(values) {
        if value.is_null() {
            crate::bail!("column `{}` is not nullable", column.name);
        }

        if !column.ty.casts_from(value) {
            crate::bail!(
                "value {:?} does not fit column `{}` of type {:?}",
                value,
                column.name,
                column.ty
            );
        }
    }

    Ok(())
}
