use super::{like, BinaryOp, Expr, ExprPattern, Value};
use crate::{schema::ColumnId, Result};

use std::cmp::Ordering;

/// Resolves column references during in-memory expression evaluation.
///
/// [`Row`](crate::Row) implements this, so a filter can test a row without
/// any round trip to the database.
pub trait Input {
    fn resolve(&self, column: ColumnId) -> Option<&Value>;
}

impl Expr {
    /// Evaluates the expression against a single row of input.
    pub fn eval(&self, input: &impl Input) -> Result<Value> {
        match self {
            Expr::And(expr_and) => {
                debug_assert!(!expr_and.operands.is_empty());
                for operand in expr_and {
                    if !operand.eval_bool(input)? {
                        return Ok(false.into());
                    }
                }
                Ok(true.into())
            }
            Expr::Or(expr_or) => {
                debug_assert!(!expr_or.operands.is_empty());
                for operand in expr_or {
                    if operand.eval_bool(input)? {
                        return Ok(true.into());
                    }
                }
                Ok(false.into())
            }
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval(input)?;
                let rhs = expr_binary_op.rhs.eval(input)?;

                match expr_binary_op.op {
                    BinaryOp::Eq => Ok((lhs == rhs).into()),
                    BinaryOp::Ne => Ok((lhs != rhs).into()),
                    BinaryOp::Ge => Ok((cmp_ordered(&lhs, &rhs)? != Ordering::Less).into()),
                    BinaryOp::Gt => Ok((cmp_ordered(&lhs, &rhs)? == Ordering::Greater).into()),
                    BinaryOp::Le => Ok((cmp_ordered(&lhs, &rhs)? != Ordering::Greater).into()),
                    BinaryOp::Lt => Ok((cmp_ordered(&lhs, &rhs)? == Ordering::Less).into()),
                }
            }
            Expr::Column(expr_column) => match input.resolve(expr_column.column) {
                Some(value) => Ok(value.clone()),
                None => Err(crate::Error::expression_evaluation_failed(format!(
                    "unresolved column reference {:?}",
                    expr_column.column
                ))),
            },
            Expr::IsNull(expr_is_null) => {
                let value = expr_is_null.expr.eval(input)?;
                Ok((value.is_null() != expr_is_null.negate).into())
            }
            Expr::Pattern(expr_pattern) => {
                let value = expr_pattern.expr().eval(input)?;
                let Value::String(ref haystack) = value else {
                    return Err(crate::Error::expression_evaluation_failed(format!(
                        "pattern applied to non-string value {value:?}"
                    )));
                };

                // Substring tests are case-insensitive, matching the
                // database collation the rendered LIKE runs under.
                let haystack = haystack.to_lowercase();
                let ret = match expr_pattern {
                    ExprPattern::BeginsWith(e) => {
                        haystack.starts_with(&e.pattern.to_lowercase())
                    }
                    ExprPattern::Contains(e) => haystack.contains(&e.pattern.to_lowercase()),
                    ExprPattern::EndsWith(e) => haystack.ends_with(&e.pattern.to_lowercase()),
                    ExprPattern::Like(e) => like::like_matches(&e.pattern, &haystack, e.escape),
                };
                Ok(ret.into())
            }
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    /// Evaluates the expression, requiring a boolean result.
    pub fn eval_bool(&self, input: &impl Input) -> Result<bool> {
        match self.eval(input)? {
            Value::Bool(ret) => Ok(ret),
            value => Err(crate::Error::expression_evaluation_failed(format!(
                "expected boolean result, got {value:?}"
            ))),
        }
    }
}

fn cmp_ordered(lhs: &Value, rhs: &Value) -> Result<Ordering> {
    if lhs.is_null() || rhs.is_null() {
        return Err(crate::Error::expression_evaluation_failed(
            "ordered comparison with NULL is undefined",
        ));
    }
    lhs.partial_cmp(rhs).ok_or_else(|| {
        crate::Error::expression_evaluation_failed("ordered comparison between incompatible types")
    })
}
