use crate::Db;

use daybook_core::{
    schema::{Table, TableId},
    stmt::{Expr, Filter, OrderByColumn, Type, Value},
    Result, Row,
};
use daybook_sql::stmt::{Count, Select, SelectTable, Statement};

impl Db {
    /// Loads every row of `table` matching `filter`, ordered by `order_by`.
    pub async fn load(
        &mut self,
        table: TableId,
        filter: Filter,
        order_by: Vec<OrderByColumn>,
    ) -> Result<Vec<Row>> {
        let schema = self.schema.clone();
        let table = schema.table(table);

        let rows = self.select_values(table, filter, order_by).await?;
        rows.into_iter()
            .map(|values| Row::from_values(table, values))
            .collect()
    }

    /// Loads the first row of `table` matching `filter`, if any.
    pub async fn load_first(
        &mut self,
        table: TableId,
        filter: Filter,
        order_by: Vec<OrderByColumn>,
    ) -> Result<Option<Row>> {
        let rows = self.load(table, filter, order_by).await?;
        Ok(rows.into_iter().next())
    }

    /// Loads the row of `table` keyed by `pk`, if it exists.
    pub async fn load_by_primary_key(&mut self, table: TableId, pk: i32) -> Result<Option<Row>> {
        let schema = self.schema.clone();
        let table = schema.table(table);

        let filter = Filter::new(Expr::eq(table.primary_key, pk));
        let rows = self.select_values(table, filter, vec![]).await?;

        match rows.into_iter().next() {
            Some(values) => Ok(Some(Row::from_values(table, values)?)),
            None => Ok(None),
        }
    }

    /// Counts the rows of `table` matching `filter`.
    pub async fn count(&mut self, table: TableId, filter: Filter) -> Result<u64> {
        let mut count = Count::new(table);
        count.filter = filter;

        let statement = count.into();
        let rows = self.query_statement(&statement, &[]).await?;

        match rows.first().and_then(|row| row.first()) {
            Some(Value::I64(n)) => {
                u64::try_from(*n).map_err(|_| daybook_core::err!("count query returned {n}"))
            }
            other => Err(daybook_core::err!("count query returned {other:?}")),
        }
    }

    /// Runs a SELECT over a join graph, returning raw result rows in
    /// select-list order.
    pub async fn query(&mut self, select: &Select) -> Result<Vec<Vec<Value>>> {
        let types: Vec<Type> = select
            .tables
            .select_columns()
            .iter()
            .map(|select_column| self.schema.column(select_column.column).ty)
            .collect();

        let statement = Statement::Select(select.clone());
        self.query_statement(&statement, &types).await
    }

    /// Selects all columns of `table` and returns the raw value rows.
    pub(crate) async fn select_values(
        &mut self,
        table: &Table,
        filter: Filter,
        order_by: Vec<OrderByColumn>,
    ) -> Result<Vec<Vec<Value>>> {
        let tables = SelectTable::new(&self.schema, table.id, &table.alias)?;
        let mut select = Select::new(tables);
        select.filter = filter;
        select.order_by = order_by;

        let types: Vec<Type> = table.columns.iter().map(|column| column.ty).collect();

        let statement = select.into();
        self.query_statement(&statement, &types).await
    }
}
