use crate::{
    schema::{ColumnId, Schema, TableId},
    Error, Result,
};

use indexmap::IndexSet;

/// A tree of joined tables, rendered as the FROM / JOIN clause of a SELECT.
///
/// Nodes live in an arena owned by the set and the first node is always the
/// root. Join edges point from parent to child, so rendering starts at the
/// root by construction; a joined node cannot be rendered on its own.
///
/// Each node projects its table's columns under result-set labels. Labels
/// are unique across the whole set: the first projection of a label wins and
/// later columns with the same label are silently dropped, which is how the
/// bookkeeping columns shared by every table collapse onto the root's.
#[derive(Debug, Clone)]
pub struct SelectTable {
    nodes: Vec<JoinNode>,
    labels: IndexSet<String>,
}

/// Identifies a node within a [`SelectTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node of any table set.
    pub const ROOT: NodeId = NodeId(0);
}

/// One joined table: its alias, projected columns, and child joins.
#[derive(Debug, Clone)]
pub struct JoinNode {
    pub table: TableId,
    pub alias: String,
    pub columns: Vec<SelectColumn>,
    pub joins: Vec<Join>,
}

/// A projected column and the label it carries in the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    pub column: ColumnId,
    pub label: String,
}

/// An edge from a parent node to a joined child node.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,

    /// Join column on the parent's side, rendered first in the ON clause.
    pub parent_column: ColumnId,

    /// Join column on the child's side.
    pub child_column: ColumnId,

    pub node: NodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Full,
    Inner,
    Left,
    Right,
}

impl JoinKind {
    /// The SQL keyword sequence for this join type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
        }
    }
}

impl SelectTable {
    /// Creates a table set rooted at `table`, projecting all of its columns.
    pub fn new(schema: &Schema, table: TableId, alias: impl Into<String>) -> Result<SelectTable> {
        let alias = alias.into();
        if alias.trim().is_empty() {
            return Err(Error::invalid_join_spec("alias must not be blank"));
        }
        let mut set = SelectTable {
            nodes: vec![],
            labels: IndexSet::new(),
        };
        set.push_node(schema, table, alias);
        Ok(set)
    }

    /// Joins `child_table` under the `parent` node.
    ///
    /// Validation happens before any mutation: a failed join leaves the set
    /// exactly as it was.
    #[allow(clippy::too_many_arguments)]
    pub fn join(
        &mut self,
        schema: &Schema,
        parent: NodeId,
        kind: JoinKind,
        parent_column: ColumnId,
        child_table: TableId,
        child_alias: impl Into<String>,
        child_column: ColumnId,
    ) -> Result<NodeId> {
        let child_alias = child_alias.into();
        let Some(parent_node) = self.nodes.get(parent.0) else {
            return Err(Error::invalid_join_spec(format!(
                "parent node {} does not exist",
                parent.0
            )));
        };
        if child_alias.trim().is_empty() {
            return Err(Error::invalid_join_spec("alias must not be blank"));
        }
        if self.alias_exists(schema, &child_alias) {
            return Err(Error::alias_conflict(child_alias));
        }
        if parent_column.table != parent_node.table {
            return Err(Error::invalid_join_spec(format!(
                "column `{}` does not belong to the parent table `{}`",
                schema.column(parent_column).name,
                schema.table(parent_node.table).name
            )));
        }
        if child_column.table != child_table {
            return Err(Error::invalid_join_spec(format!(
                "column `{}` does not belong to the joined table `{}`",
                schema.column(child_column).name,
                schema.table(child_table).name
            )));
        }

        let node = self.push_node(schema, child_table, child_alias);
        self.nodes[parent.0].joins.push(Join {
            kind,
            parent_column,
            child_column,
            node,
        });
        Ok(node)
    }

    /// Joins the table referenced by a foreign-key column, keyed on the
    /// referenced primary key.
    pub fn join_fk(
        &mut self,
        schema: &Schema,
        parent: NodeId,
        kind: JoinKind,
        fk_column: ColumnId,
        child_alias: impl Into<String>,
    ) -> Result<NodeId> {
        let Some(child_column) = schema.column(fk_column).references else {
            return Err(Error::invalid_join_spec(format!(
                "column `{}` does not reference another table",
                schema.column(fk_column).name
            )));
        };
        self.join(
            schema,
            parent,
            kind,
            fk_column,
            child_column.table,
            child_alias,
            child_column,
        )
    }

    /// Case-insensitive alias lookup across every node in the set.
    ///
    /// Table names count as taken too: within a rendered statement a bare
    /// table name occupies the same namespace as an alias.
    pub fn alias_exists(&self, schema: &Schema, name: &str) -> bool {
        self.nodes.iter().any(|node| {
            node.alias.eq_ignore_ascii_case(name)
                || schema.table(node.table).name.eq_ignore_ascii_case(name)
        })
    }

    pub fn root(&self) -> &JoinNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> &JoinNode {
        self.nodes.get(id.0).expect("invalid node ID")
    }

    pub fn nodes(&self) -> &[JoinNode] {
        &self.nodes
    }

    pub fn has_joins(&self) -> bool {
        self.nodes.len() > 1
    }

    /// Projected columns of every node in depth-first join order, which is
    /// also result-set order.
    pub fn select_columns(&self) -> Vec<&SelectColumn> {
        let mut out = vec![];
        self.collect_columns(NodeId::ROOT, &mut out);
        out
    }

    fn collect_columns<'a>(&'a self, id: NodeId, out: &mut Vec<&'a SelectColumn>) {
        let node = &self.nodes[id.0];
        out.extend(node.columns.iter());
        for join in &node.joins {
            self.collect_columns(join.node, out);
        }
    }

    fn push_node(&mut self, schema: &Schema, table: TableId, alias: String) -> NodeId {
        let mut columns = vec![];
        for column in &schema.table(table).columns {
            if self.labels.insert(column.name.to_lowercase()) {
                columns.push(SelectColumn {
                    column: column.id,
                    label: column.name.clone(),
                });
            }
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(JoinNode {
            table,
            alias,
            columns,
            joins: vec![],
        });
        id
    }
}
