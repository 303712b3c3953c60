use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),
}
