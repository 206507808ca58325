pub mod db;
pub use db::Db;

mod statement;
pub use statement::{build_statement, ParameterBinder, StatementBuilder};

pub use daybook_core::{catalog, driver, schema, stmt, Error, Result};
pub use daybook_core::row::{Row, RowState, UserContext, UNSAVED_PK};

pub use daybook_sql::{stmt::Select, Statement};
