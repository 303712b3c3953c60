use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Fully parenthesized infix with no whitespace, e.g. `(A*(2-(3+4)))`.
/// Operands print as their card token.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Operand(token) => write!(f, "{}", token),
            Expression::Binary(op, l, r) => write!(f, "({}{}{})", l, op, r),
        }
    }
}
