pub mod constants;
mod core;
mod errors;

pub use self::core::{ExpressionSolver, SolverConfig};
pub use errors::SolverError;

#[cfg(test)]
mod tests;
