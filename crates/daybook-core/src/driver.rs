use crate::{
    async_trait,
    stmt::{Type, Value},
    Result,
};

use std::fmt::Debug;

/// A live database connection capable of running finalized SQL.
///
/// Statements arrive fully rendered with `?` placeholders and a matching
/// parameter vector. Implementations bind the parameters positionally.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Runs a SELECT, returning one vector of values per row.
    ///
    /// `types` carries the expected type of each result column and drives
    /// decoding. An empty slice means decode by wire type alone.
    async fn query(
        &mut self,
        sql: &str,
        params: Vec<Value>,
        types: &[Type],
    ) -> Result<Vec<Vec<Value>>>;

    /// Runs a statement that does not return rows.
    async fn exec(&mut self, sql: &str, params: Vec<Value>) -> Result<ExecResponse>;
}

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResponse {
    pub rows_affected: u64,

    /// Key generated for an auto-increment insert, when the driver has one.
    pub last_insert_id: Option<u64>,
}
