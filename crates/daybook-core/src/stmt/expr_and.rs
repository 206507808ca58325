use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Combines two expressions with AND.
    ///
    /// AND operands on either side are flattened into a single operand list
    /// rather than nested, and an operand structurally equal to one already
    /// present is dropped, keeping the first occurrence.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::And(lhs_and), Self::And(rhs_and)) => {
                for operand in rhs_and.operands {
                    lhs_and.push_unique(operand);
                }
                lhs
            }
            (Self::And(lhs_and), rhs) => {
                lhs_and.push_unique(rhs);
                lhs
            }
            (_, Self::And(rhs_and)) => {
                let mut and = ExprAnd {
                    operands: vec![lhs],
                };
                for operand in rhs_and.operands {
                    and.push_unique(operand);
                }
                and.into()
            }
            (_, rhs) => {
                if lhs == rhs {
                    lhs
                } else {
                    ExprAnd {
                        operands: vec![lhs, rhs],
                    }
                    .into()
                }
            }
        }
    }
}

impl ExprAnd {
    pub(crate) fn push_unique(&mut self, operand: Expr) {
        if !self.operands.contains(&operand) {
            self.operands.push(operand);
        }
    }
}

impl ops::Deref for ExprAnd {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprAnd {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
