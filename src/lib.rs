//! Twentyfour - enumerate expression trees over a hand of four playing cards
//!
//! This library builds every distinct arithmetic expression tree that four
//! cards (`A`, `2`-`10`, `J`, `Q`, `K`) and the operators `+ - * /` can form,
//! evaluates them with exact rational arithmetic and reports the ones equal
//! to 24.

pub mod expression;
pub mod generator;
pub mod solver;
pub mod utils;

use std::collections::HashSet;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, build_from_postfix};
pub use generator::{GeneratorError, TreeGenerator, generate_trees};
pub use solver::{ExpressionSolver, SolverConfig, SolverError};
pub use utils::{UtilsError, card_value, validate_hand};

/// Build every distinct expression tree the hand can form
///
/// This is a convenience function that runs a default solver.
///
/// # Arguments
///
/// * `cards` - Exactly four rank tokens
///
/// # Errors
///
/// This function will return an error if:
/// * The hand does not hold exactly four cards
/// * A card is not one of `A 2 3 4 5 6 7 8 9 10 J Q K`
///
/// # Examples
///
/// ```
/// use twentyfour::create_trees;
///
/// let trees = create_trees(&["A", "2", "3", "4"]).unwrap_or_default();
/// assert_eq!(trees.len(), 7680);
/// ```
pub fn create_trees<S: AsRef<str>>(cards: &[S]) -> Result<HashSet<Expression>, SolverError> {
    ExpressionSolver::new().create_trees(cards)
}

/// Find every distinct expression tree over the hand that equals exactly 24
///
/// # Arguments
///
/// * `cards` - Exactly four rank tokens
///
/// # Errors
///
/// Same conditions as [`create_trees`].
///
/// # Examples
///
/// ```
/// use twentyfour::find_solutions;
///
/// match find_solutions(&["A", "2", "3", "Q"]) {
///     Ok(solutions) => {
///         for expr in &solutions {
///             println!("{}", expr);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solutions<S: AsRef<str>>(cards: &[S]) -> Result<HashSet<Expression>, SolverError> {
    ExpressionSolver::new().find_solutions(cards)
}
