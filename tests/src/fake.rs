use daybook_core::{
    driver::{Connection, ExecResponse},
    stmt::{Type, Value},
    Result,
};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One statement captured by a [`FakeConnection`], with its bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Scripted reply for one statement.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    Rows(Vec<Vec<Value>>),
    Exec(ExecResponse),
}

#[derive(Debug, Default)]
struct State {
    log: Vec<ExecutedStatement>,
    responses: VecDeque<ScriptedResponse>,
}

/// An in-memory connection for facade tests.
///
/// Records every statement it receives and replays scripted responses in
/// queue order. Clones share the script and the log, so a test can keep one
/// clone while the database owns the other.
#[derive(Debug, Clone, Default)]
pub struct FakeConnection {
    state: Arc<Mutex<State>>,
}

impl FakeConnection {
    pub fn new() -> FakeConnection {
        FakeConnection::default()
    }

    /// Queues `rows` as the reply to the next query.
    pub fn push_rows(&self, rows: Vec<Vec<Value>>) {
        self.lock().responses.push_back(ScriptedResponse::Rows(rows));
    }

    /// Queues an execution summary as the reply to the next statement.
    pub fn push_exec(&self, rows_affected: u64, last_insert_id: Option<u64>) {
        self.lock().responses.push_back(ScriptedResponse::Exec(ExecResponse {
            rows_affected,
            last_insert_id,
        }));
    }

    /// Every statement executed so far, in execution order.
    pub fn executed(&self) -> Vec<ExecutedStatement> {
        self.lock().log.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    fn pop(&self, sql: &str, params: Vec<Value>) -> Result<ScriptedResponse> {
        let mut state = self.lock();
        state.log.push(ExecutedStatement {
            sql: sql.to_string(),
            params,
        });
        state
            .responses
            .pop_front()
            .ok_or_else(|| daybook_core::err!("no scripted response left; sql={sql}"))
    }
}

#[async_trait::async_trait]
impl Connection for FakeConnection {
    async fn query(
        &mut self,
        sql: &str,
        params: Vec<Value>,
        _types: &[Type],
    ) -> Result<Vec<Vec<Value>>> {
        match self.pop(sql, params)? {
            ScriptedResponse::Rows(rows) => Ok(rows),
            ScriptedResponse::Exec(_) => {
                Err(daybook_core::err!("scripted an exec reply for a query; sql={sql}"))
            }
        }
    }

    async fn exec(&mut self, sql: &str, params: Vec<Value>) -> Result<ExecResponse> {
        match self.pop(sql, params)? {
            ScriptedResponse::Exec(response) => Ok(response),
            ScriptedResponse::Rows(_) => {
                Err(daybook_core::err!("scripted a rows reply for an exec; sql={sql}"))
            }
        }
    }
}
