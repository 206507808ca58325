mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool,
};
use url::Url;

use daybook_core::{
    async_trait,
    driver::ExecResponse,
    stmt::{self, Type},
    Error, Result,
};

#[derive(Debug)]
pub struct MySQL {
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "mysql" {
            daybook_core::bail!("connection url does not have a `mysql` scheme; url={url}");
        }

        if url.host_str().is_none() {
            daybook_core::bail!("missing host in connection URL; url={url}");
        }

        if url.path().is_empty() {
            daybook_core::bail!("no database specified - missing path in connection URL; url={url}");
        }

        let opts = mysql_async::Opts::from_url(url.as_ref()).map_err(Error::driver)?;
        let opts = mysql_async::OptsBuilder::from_opts(opts).client_found_rows(true);

        let pool = Pool::new(opts);
        Ok(Self { pool })
    }

    pub async fn connect(&self) -> Result<Connection> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Connection::new(conn))
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl daybook_core::driver::Connection for Connection {
    async fn query(
        &mut self,
        sql: &str,
        params: Vec<stmt::Value>,
        types: &[Type],
    ) -> Result<Vec<Vec<stmt::Value>>> {
        let args = positional(params);
        let statement = self.conn.prep(sql).await.map_err(Error::driver)?;

        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(&statement, args)
            .await
            .map_err(Error::driver)?;

        let mut results = Vec::with_capacity(rows.len());

        for row in rows {
            let raw = row.unwrap();

            if !types.is_empty() && raw.len() != types.len() {
                daybook_core::bail!(
                    "driver returned {} columns, expected {}; sql={sql}",
                    raw.len(),
                    types.len()
                );
            }

            let mut values = Vec::with_capacity(raw.len());

            for (i, cell) in raw.into_iter().enumerate() {
                values.push(Value::from_sql(cell, types.get(i))?.into_inner());
            }

            results.push(values);
        }

        Ok(results)
    }

    async fn exec(&mut self, sql: &str, params: Vec<stmt::Value>) -> Result<ExecResponse> {
        let args = positional(params);
        let statement = self.conn.prep(sql).await.map_err(Error::driver)?;

        let result = self
            .conn
            .exec_iter(&statement, args)
            .await
            .map_err(Error::driver)?;

        Ok(ExecResponse {
            rows_affected: result.affected_rows(),
            last_insert_id: result.last_insert_id(),
        })
    }
}

fn positional(params: Vec<stmt::Value>) -> mysql_async::Params {
    let args = params
        .into_iter()
        .map(|param| Value::from(param).to_value())
        .collect::<Vec<_>>();

    mysql_async::Params::Positional(args)
}
