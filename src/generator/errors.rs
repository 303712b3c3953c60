use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error(
        "Need exactly one more operand than operators, got {operands} operands and {operators} operators"
    )]
    InvalidInput { operands: usize, operators: usize },
}
