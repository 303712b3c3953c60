use log::debug;
use num_rational::Rational64;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;
use crate::utils::card_value;

#[inline]
fn is_zero(value: Rational64) -> bool {
    *value.numer() == 0
}

impl Operator {
    /// Apply the operator with exact rational arithmetic.
    ///
    /// Division by zero yields zero instead of failing.
    pub fn apply(self, left: Rational64, right: Rational64) -> Rational64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => {
                if is_zero(right) {
                    Rational64::from_integer(0)
                } else {
                    left / right
                }
            }
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns `InvalidOperand` when a leaf holds a token that is not a card
    /// rank. Division by zero is not an error: the dividing node evaluates to 0.
    pub fn evaluate(&self) -> Result<Rational64, ExpressionError> {
        let result = self.exact_value();

        match &result {
            Ok(value) => debug!("Expression {} evaluated to: {}", self, value),
            Err(e) => debug!("Expression {} evaluation failed: {}", self, e),
        }

        result
    }

    fn exact_value(&self) -> Result<Rational64, ExpressionError> {
        match self {
            Expression::Operand(token) => card_value(token)
                .map(Rational64::from_integer)
                .map_err(|_| ExpressionError::InvalidOperand(token.clone())),
            Expression::Binary(op, l, r) => {
                let left = l.exact_value()?;
                let right = r.exact_value()?;
                Ok(op.apply(left, right))
            }
        }
    }
}
