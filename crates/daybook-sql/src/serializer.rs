#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::stmt::Statement;

use daybook_core::{
    schema::{ColumnId, Schema, Table, TableId},
    stmt::{Filter, OrderByColumn},
};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is serialized
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Renders a filter as the body of a WHERE clause, pushing its parameters
    /// in placeholder order.
    ///
    /// Returns `None` when the filter is empty.
    pub fn where_clause(&self, filter: &Filter, params: &mut impl Params) -> Option<String> {
        let expr = filter.expr()?;

        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        expr.to_sql(&mut fmt);

        Some(ret)
    }

    /// Renders order terms as the body of an ORDER BY clause, skipping terms
    /// with blank column names.
    ///
    /// Returns `None` when nothing is left to render.
    pub fn order_by_clause(&self, order_by: &[OrderByColumn]) -> Option<String> {
        use std::fmt::Write;

        let mut ret = String::new();

        for term in order_by.iter().filter(|term| !term.is_blank()) {
            if !ret.is_empty() {
                ret.push_str(", ");
            }

            write!(ret, "{}", Ident(&term.column)).unwrap();

            if term.descending {
                ret.push_str(" DESC");
            }
        }

        (!ret.is_empty()).then_some(ret)
    }

    fn table(&self, id: TableId) -> &'a Table {
        self.schema.table(id)
    }

    fn table_name(&self, id: TableId) -> Ident<&str> {
        let table = self.schema.table(id);
        Ident(&table.name)
    }

    fn column_name(&self, id: ColumnId) -> Ident<&str> {
        let column = self.schema.column(id);
        Ident(&column.name)
    }
}
