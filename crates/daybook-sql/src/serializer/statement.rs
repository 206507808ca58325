use super::{Comma, Ident, Params, ToSql};

use crate::stmt::{self, NodeId, SelectColumn, SelectTable, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::Count(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "SELECT " SelectList(&self.tables) " " FromClause(&self.tables));

        if let Some(expr) = self.filter.expr() {
            fmt!(f, " WHERE " expr);
        }

        if let Some(order_by) = f.serializer.order_by_clause(&self.order_by) {
            fmt!(f, " ORDER BY " order_by.as_str());
        }
    }
}

impl ToSql for &stmt::Count {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = f.serializer.table(self.table);
        let table_name = Ident(&table.name);
        let pk = f.serializer.column_name(table.primary_key);

        fmt!(f, "SELECT COUNT(" pk ") FROM " table_name);

        if let Some(expr) = self.filter.expr() {
            fmt!(f, " WHERE " expr);
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        debug_assert!(!self.assignments.is_empty());

        let table_name = f.serializer.table_name(self.table);
        let columns: Vec<_> = self
            .assignments
            .iter()
            .map(|(column, _)| f.serializer.column_name(*column))
            .collect();
        let values = Comma(self.assignments.iter().map(|(_, value)| value));

        fmt!(f, "INSERT INTO " table_name " (" Comma(columns) ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        debug_assert!(!self.assignments.is_empty());

        let table_name = f.serializer.table_name(self.table);

        fmt!(f, "UPDATE " table_name " SET ");

        let mut s = "";
        for (column, value) in &self.assignments {
            let column_name = f.serializer.column_name(*column);
            fmt!(f, s column_name " = " value);
            s = ", ";
        }

        if let Some(expr) = self.filter.expr() {
            fmt!(f, " WHERE " expr);
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table_name = f.serializer.table_name(self.table);

        fmt!(f, "DELETE FROM " table_name);

        if let Some(expr) = self.filter.expr() {
            fmt!(f, " WHERE " expr);
        }
    }
}

/// The projected column list of a SELECT, in depth-first join order.
struct SelectList<'a>(&'a SelectTable);

impl ToSql for SelectList<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if self.0.has_joins() {
            let mut columns = vec![];
            self.collect(NodeId::ROOT, &mut columns);
            fmt!(f, Comma(columns));
        } else {
            fmt!(f, Comma(self.0.root().columns.iter().map(UnqualifiedColumn)));
        }
    }
}

impl<'a> SelectList<'a> {
    fn collect(&self, id: NodeId, out: &mut Vec<QualifiedColumn<'a>>) {
        let node = self.0.node(id);

        out.extend(node.columns.iter().map(|column| QualifiedColumn {
            alias: node.alias.as_str(),
            column,
        }));

        for join in &node.joins {
            self.collect(join.node, out);
        }
    }
}

/// One `alias.`column` AS `label`` entry of a joined select list.
struct QualifiedColumn<'a> {
    alias: &'a str,
    column: &'a SelectColumn,
}

impl ToSql for QualifiedColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column_name = f.serializer.column_name(self.column.column);
        fmt!(f, self.alias "." column_name " AS " Ident(&self.column.label));
    }
}

/// One single-table select list entry. The label is rendered only when it
/// differs from the column name.
struct UnqualifiedColumn<'a>(&'a SelectColumn);

impl ToSql for UnqualifiedColumn<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &f.serializer.schema.column(self.0.column).name;

        if *name == self.0.label {
            fmt!(f, Ident(name.as_str()));
        } else {
            fmt!(f, Ident(name.as_str()) " AS " Ident(&self.0.label));
        }
    }
}

/// The FROM clause, including every JOIN in depth-first order.
///
/// With joins present the root table is aliased (unless the alias matches
/// the table name) and each join renders as
/// `<kind> JOIN `table` alias ON parentAlias.`parentCol`=childAlias.`childCol``.
/// Without joins the table stands alone, unaliased.
struct FromClause<'a>(&'a SelectTable);

impl ToSql for FromClause<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let root = self.0.root();
        let table = f.serializer.table(root.table);
        let table_name = Ident(&table.name);

        if !self.0.has_joins() {
            fmt!(f, "FROM " table_name);
            return;
        }

        if root.alias == table.name {
            fmt!(f, "FROM " table_name);
        } else {
            fmt!(f, "FROM " table_name " " root.alias.as_str());
        }

        self.push_joins(NodeId::ROOT, f);
    }
}

impl FromClause<'_> {
    fn push_joins<P: Params>(&self, id: NodeId, f: &mut super::Formatter<'_, P>) {
        let parent = self.0.node(id);

        for join in &parent.joins {
            let child = self.0.node(join.node);
            let child_table = f.serializer.table_name(child.table);
            let parent_column = f.serializer.column_name(join.parent_column);
            let child_column = f.serializer.column_name(join.child_column);

            fmt!(
                f, " " join.kind.as_str() " " child_table " " child.alias.as_str() " ON "
                parent.alias.as_str() "." parent_column "=" child.alias.as_str() "." child_column
            );

            self.push_joins(join.node, f);
        }
    }
}
