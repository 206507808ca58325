use super::{Delimited, Params, ToSql};

use crate::stmt;

/// An AND / OR operand: compound children are parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if self.0.is_compound() {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
    }
}

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " AND "));
            }
            BinaryOp(expr) => {
                assert!(!expr.lhs.is_value_null());
                assert!(!expr.rhs.is_value_null());

                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => {
                let column_name = f.serializer.column_name(expr.column);
                fmt!(f, column_name);
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " OR "));
            }
            Pattern(stmt::ExprPattern::BeginsWith(expr)) => {
                let pattern = format!("{}%", stmt::escape_pattern(&expr.pattern, expr.escape));
                let placeholder = f.params.push(&pattern.into());
                fmt!(f, expr.expr " LIKE " placeholder);
            }
            Pattern(stmt::ExprPattern::Contains(expr)) => {
                let pattern = format!("%{}%", stmt::escape_pattern(&expr.pattern, expr.escape));
                let placeholder = f.params.push(&pattern.into());
                fmt!(f, expr.expr " LIKE " placeholder);
            }
            Pattern(stmt::ExprPattern::EndsWith(expr)) => {
                let pattern = format!("%{}", stmt::escape_pattern(&expr.pattern, expr.escape));
                let placeholder = f.params.push(&pattern.into());
                fmt!(f, expr.expr " LIKE " placeholder);
            }
            Pattern(stmt::ExprPattern::Like(expr)) => {
                let placeholder = f.params.push(&expr.pattern.clone().into());
                fmt!(f, expr.expr " LIKE " placeholder);
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use std::fmt::Write;

        write!(f.dst, "{self}").unwrap();
    }
}
