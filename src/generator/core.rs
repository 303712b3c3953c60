use log::debug;

use crate::expression::{Expression, Operator};
use crate::generator::errors::GeneratorError;

pub struct TreeGenerator;

impl TreeGenerator {
    /// Every full binary tree with `operands` at the leaves in the given order
    /// and `operators` on the internal nodes.
    ///
    /// Operator `i` is the root of the trees that split the operands after
    /// position `i`; the operators before it go to the left subtree and the
    /// ones after it to the right. The result holds Catalan(n) trees for `n`
    /// operators, without deduplication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless there is exactly one more operand than
    /// operators.
    pub fn generate_trees<S: AsRef<str>>(
        operands: &[S],
        operators: &[Operator],
    ) -> Result<Vec<Expression>, GeneratorError> {
        if operands.len() != operators.len() + 1 {
            return Err(GeneratorError::InvalidInput {
                operands: operands.len(),
                operators: operators.len(),
            });
        }

        let trees = Self::shapes(operands, operators);
        debug!(
            "Generated {} trees over {} operands",
            trees.len(),
            operands.len()
        );
        Ok(trees)
    }

    // Callers guarantee operands.len() == operators.len() + 1
    fn shapes<S: AsRef<str>>(operands: &[S], operators: &[Operator]) -> Vec<Expression> {
        let Some((first, _)) = operands.split_first() else {
            return Vec::new();
        };
        if operators.is_empty() {
            return vec![Expression::operand(first.as_ref())];
        }

        let mut trees = Vec::new();
        for (i, &op) in operators.iter().enumerate() {
            let (left_operands, right_operands) = operands.split_at(i + 1);
            let left_trees = Self::shapes(left_operands, &operators[..i]);
            let right_trees = Self::shapes(right_operands, &operators[i + 1..]);

            for left in &left_trees {
                for right in &right_trees {
                    trees.push(Expression::binary(op, left.clone(), right.clone()));
                }
            }
        }
        trees
    }
}

/// Shorthand for [`TreeGenerator::generate_trees`].
///
/// # Errors
///
/// Returns `InvalidInput` unless there is exactly one more operand than
/// operators.
pub fn generate_trees<S: AsRef<str>>(
    operands: &[S],
    operators: &[Operator],
) -> Result<Vec<Expression>, GeneratorError> {
    TreeGenerator::generate_trees(operands, operators)
}
