mod eval;
pub use eval::Input;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_begins_with;
pub use expr_begins_with::ExprBeginsWith;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_contains;
pub use expr_contains::ExprContains;

mod expr_ends_with;
pub use expr_ends_with::ExprEndsWith;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_like;
pub use expr_like::ExprLike;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_pattern;
pub use expr_pattern::ExprPattern;

mod filter;
pub use filter::Filter;

mod like;
pub use like::escape_pattern;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderByColumn;

mod select;
pub use select::{Join, JoinKind, JoinNode, NodeId, SelectColumn, SelectTable};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
