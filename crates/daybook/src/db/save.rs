use crate::Db;

use daybook_core::{
    row::{RowState, UserContext},
    schema::Table,
    stmt::{Expr, Filter, Value},
    Error, Result, Row,
};
use daybook_sql::stmt::{Delete, Insert, Update};

use chrono::Utc;

impl Db {
    /// Persists `row`, inserting or updating as its state demands, then
    /// refreshes it from the database. The row ends UNMODIFIED.
    pub async fn save(&mut self, row: &mut Row, ctx: &UserContext) -> Result<()> {
        let schema = self.schema.clone();
        let table = schema.table(row.table());

        if row.state() == RowState::Deleted {
            return Err(Error::invalid_row_state("deleted row cannot be saved"));
        }
        if let Some(column) = row.unassigned_foreign_key(table) {
            return Err(Error::invalid_row_state(format!(
                "foreign key `{}` is unassigned; save the referenced row first",
                column.name
            )));
        }

        match row.state() {
            RowState::New => self.insert_row(table, row).await?,
            _ => self.update_row(table, row, ctx).await?,
        }

        self.reload(table, row).await
    }

    /// Deletes `row` from the database and marks it DELETED.
    ///
    /// A NEW row was never saved, so it is dropped without touching the
    /// database. Deleting twice is an error.
    pub async fn delete(&mut self, row: &mut Row) -> Result<()> {
        match row.state() {
            RowState::New | RowState::Deleted => return row.mark_deleted(),
            _ => {}
        }

        let schema = self.schema.clone();
        let table = schema.table(row.table());
        let pk = row.primary_key(table);

        let delete = Delete {
            table: table.id,
            filter: pk_filter(table, pk),
        };
        let statement = delete.into();
        let response = self.exec_statement(&statement).await?;
        if response.rows_affected == 0 {
            daybook_core::bail!("no row was deleted; table={}; pk={pk}", table.name);
        }

        row.mark_deleted()
    }

    // The database assigns every primary key, so the insert column list
    // skips the key and the row picks it up from the driver response.
    async fn insert_row(&mut self, table: &Table, row: &mut Row) -> Result<()> {
        let mut assignments = vec![];
        for column in &table.columns {
            if column.is_primary_key() {
                continue;
            }
            assignments.push((column.id, row.value(column.id).clone()));
        }

        let insert = Insert {
            table: table.id,
            assignments,
        };
        let statement = insert.into();
        let response = self.exec_statement(&statement).await?;

        let Some(id) = response.last_insert_id else {
            daybook_core::bail!("insert did not return a generated key; table={}", table.name);
        };
        let pk = i32::try_from(id)
            .map_err(|_| daybook_core::err!("generated key {id} overflows the key type"))?;
        row.assign_primary_key(table, pk)
    }

    async fn update_row(&mut self, table: &Table, row: &Row, ctx: &UserContext) -> Result<()> {
        let now = Utc::now().naive_utc();

        let mut assignments = vec![];
        for column in &table.columns {
            if column.is_data() {
                assignments.push((column.id, row.value(column.id).clone()));
            }
        }
        assignments.push((table.last_update, Value::DateTime(now)));
        assignments.push((
            table.last_update_by,
            Value::String(ctx.user_name().to_string()),
        ));

        let update = Update {
            table: table.id,
            assignments,
            filter: pk_filter(table, row.primary_key(table)),
        };
        let statement = update.into();
        self.exec_statement(&statement).await?;
        Ok(())
    }

    /// Re-selects `row` by primary key and resets it to the database state.
    async fn reload(&mut self, table: &Table, row: &mut Row) -> Result<()> {
        let pk = row.primary_key(table);
        let rows = self.select_values(table, pk_filter(table, pk), vec![]).await?;

        let Some(values) = rows.into_iter().next() else {
            daybook_core::bail!("row was not found after save; table={}; pk={pk}", table.name);
        };
        row.refresh_from(table, values)
    }
}

fn pk_filter(table: &Table, pk: i32) -> Filter {
    Filter::new(Expr::eq(table.primary_key, pk))
}
