//! Expression module split into submodules for clarity

mod ast;
mod display;
mod errors;
mod eval;
mod postfix;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use postfix::{build_from_postfix, tokenize_postfix};
