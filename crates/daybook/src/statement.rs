use crate::Db;

use daybook_core::{
    driver::ExecResponse,
    stmt::{Filter, OrderByColumn, Value},
    Error, Result,
};
use daybook_sql::Serializer;

use chrono::NaiveDateTime;

/// Accumulates raw SQL text for one statement, then locks it and binds
/// positional parameters.
///
/// The builder borrows its [`Db`] for its whole lifetime; running the
/// statement consumes the builder.
#[derive(Debug)]
pub struct StatementBuilder<'a> {
    db: &'a mut Db,
    sql: String,
    binder: Option<ParameterBinder>,
}

/// Collects values for the `?` placeholders of a finalized statement, in
/// placeholder order.
#[derive(Debug)]
pub struct ParameterBinder {
    values: Vec<Value>,
    expected: usize,
}

impl<'a> StatementBuilder<'a> {
    pub(crate) fn new(db: &'a mut Db) -> StatementBuilder<'a> {
        StatementBuilder {
            db,
            sql: String::new(),
            binder: None,
        }
    }

    /// Appends a fragment to the statement text.
    ///
    /// Fails with [`Error::statement_finalized`] once the statement has been
    /// finalized.
    pub fn append_sql(&mut self, sql: &str) -> Result<&mut Self> {
        if self.binder.is_some() {
            return Err(Error::statement_finalized());
        }
        self.sql.push_str(sql);
        Ok(self)
    }

    /// The statement text accumulated so far.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Locks the statement text and returns the binder for its placeholders.
    ///
    /// Calling this again returns the same binder.
    pub fn finalize_sql(&mut self) -> &mut ParameterBinder {
        let expected = self.sql.matches('?').count();
        self.binder
            .get_or_insert_with(|| ParameterBinder::new(expected))
    }

    /// Runs the statement and returns its result rows.
    ///
    /// Finalizes first if needed. Every placeholder must have a bound value.
    pub async fn query(mut self) -> Result<Vec<Vec<Value>>> {
        let (sql, params) = self.finish()?;
        log::debug!("executing query; sql={sql}");
        self.db.connection.query(&sql, params, &[]).await
    }

    /// Runs the statement and returns the driver's execution summary.
    ///
    /// Finalizes first if needed. Every placeholder must have a bound value.
    pub async fn execute(mut self) -> Result<ExecResponse> {
        let (sql, params) = self.finish()?;
        log::debug!("executing statement; sql={sql}");
        self.db.connection.exec(&sql, params).await
    }

    fn finish(&mut self) -> Result<(String, Vec<Value>)> {
        let binder = self.finalize_sql();
        if binder.values.len() != binder.expected {
            return Err(Error::parameter_count_mismatch(
                binder.expected,
                binder.values.len(),
            ));
        }
        let values = std::mem::take(&mut binder.values);
        Ok((std::mem::take(&mut self.sql), values))
    }
}

impl ParameterBinder {
    fn new(expected: usize) -> ParameterBinder {
        ParameterBinder {
            values: Vec::with_capacity(expected),
            expected,
        }
    }

    /// Number of placeholders in the finalized statement.
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Values bound so far, in placeholder order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn set_bool(&mut self, value: bool) -> Result<&mut Self> {
        self.set_value(value.into())
    }

    pub fn set_date_time(&mut self, value: NaiveDateTime) -> Result<&mut Self> {
        self.set_value(value.into())
    }

    pub fn set_int(&mut self, value: i32) -> Result<&mut Self> {
        self.set_value(value.into())
    }

    pub fn set_string(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        self.set_value(Value::String(value.into()))
    }

    /// Binds `value` to the next placeholder position.
    ///
    /// Binding more values than the statement has placeholders fails with
    /// [`Error::parameter_count_mismatch`].
    pub fn set_value(&mut self, value: Value) -> Result<&mut Self> {
        if self.values.len() == self.expected {
            return Err(Error::parameter_count_mismatch(
                self.expected,
                self.values.len() + 1,
            ));
        }
        self.values.push(value);
        Ok(self)
    }
}

/// Assembles a complete statement onto `builder`: the base SQL, a WHERE
/// clause when `filter` is non-empty, and an ORDER BY clause when any term
/// names a column. Statement-level `params` are bound first, then the
/// filter's own parameters in render order.
pub fn build_statement(
    builder: &mut StatementBuilder<'_>,
    base_sql: &str,
    params: Vec<Value>,
    filter: &Filter,
    order_by: &[OrderByColumn],
) -> Result<()> {
    builder.append_sql(base_sql)?;

    let mut filter_params = vec![];
    let (where_body, order_body) = {
        let serializer = Serializer::new(&builder.db.schema);
        (
            serializer.where_clause(filter, &mut filter_params),
            serializer.order_by_clause(order_by),
        )
    };

    if let Some(body) = where_body {
        builder.append_sql(" WHERE ")?;
        builder.append_sql(&body)?;
    }
    if let Some(body) = order_body {
        builder.append_sql(" ORDER BY ")?;
        builder.append_sql(&body)?;
    }

    let binder = builder.finalize_sql();
    for value in params {
        binder.set_value(value)?;
    }
    for value in filter_params {
        binder.set_value(value)?;
    }
    Ok(())
}
