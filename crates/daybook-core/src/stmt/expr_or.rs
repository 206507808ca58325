use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Combines two expressions with OR.
    ///
    /// OR operands on either side are flattened into a single operand list
    /// rather than nested, and an operand structurally equal to one already
    /// present is dropped, keeping the first occurrence.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::Or(lhs_or), Self::Or(rhs_or)) => {
                for operand in rhs_or.operands {
                    lhs_or.push_unique(operand);
                }
                lhs
            }
            (Self::Or(lhs_or), rhs) => {
                lhs_or.push_unique(rhs);
                lhs
            }
            (_, Self::Or(rhs_or)) => {
                let mut or = ExprOr {
                    operands: vec![lhs],
                };
                for operand in rhs_or.operands {
                    or.push_unique(operand);
                }
                or.into()
            }
            (_, rhs) => {
                if lhs == rhs {
                    lhs
                } else {
                    ExprOr {
                        operands: vec![lhs, rhs],
                    }
                    .into()
                }
            }
        }
    }
}

impl ExprOr {
    pub(crate) fn push_unique(&mut self, operand: Expr) {
        if !self.operands.contains(&operand) {
            self.operands.push(operand);
        }
    }
}

impl ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ExprOr {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
