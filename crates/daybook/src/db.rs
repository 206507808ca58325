mod connect;
mod load;
mod save;

use crate::statement::StatementBuilder;

use daybook_core::{
    catalog,
    driver::{Connection, ExecResponse},
    stmt::{Type, Value},
    Result, Schema,
};
use daybook_sql::{Serializer, Statement};

use std::sync::Arc;

/// A handle to the scheduling database: the fixed schema plus one driver
/// connection.
pub struct Db {
    pub(crate) schema: Arc<Schema>,
    pub(crate) connection: Box<dyn Connection>,
}

impl Db {
    /// Connects to the database at `url` and builds a handle over the
    /// standard catalog.
    pub async fn connect(url: &str) -> Result<Db> {
        let connection = connect::connect(url).await?;
        Ok(Db::new(catalog::schema(), connection))
    }

    /// Builds a handle over an already established connection.
    pub fn new(schema: Schema, connection: Box<dyn Connection>) -> Db {
        Db {
            schema: Arc::new(schema),
            connection,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Starts a raw SQL statement against this database.
    pub fn statement(&mut self) -> StatementBuilder<'_> {
        StatementBuilder::new(self)
    }

    pub(crate) async fn query_statement(
        &mut self,
        statement: &Statement,
        types: &[Type],
    ) -> Result<Vec<Vec<Value>>> {
        let mut params = vec![];
        let sql = Serializer::new(&self.schema).serialize(statement, &mut params);
        log::debug!("executing query; sql={sql}");
        self.connection.query(&sql, params, types).await
    }

    pub(crate) async fn exec_statement(&mut self, statement: &Statement) -> Result<ExecResponse> {
        let mut params = vec![];
        let sql = Serializer::new(&self.schema).serialize(statement, &mut params);
        log::debug!("executing statement; sql={sql}");
        self.connection.exec(&sql, params).await
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("connection", &self.connection)
            .finish()
    }
}
