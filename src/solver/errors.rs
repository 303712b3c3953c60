use thiserror::Error;

use crate::expression::ExpressionError;
use crate::generator::GeneratorError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Tree generation error: {0}")]
    GeneratorError(#[from] GeneratorError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
