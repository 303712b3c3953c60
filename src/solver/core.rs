use std::collections::HashSet;

use log::{debug, info};
use num_rational::Rational64;
use rayon::prelude::*;

use crate::expression::{Expression, ExpressionError, Operator};
use crate::generator::generate_trees;
use crate::solver::constants::{HAND_SIZE, OPERATOR_SLOTS, TARGET};
use crate::solver::errors::SolverError;
use crate::utils::{operator_combinations, permutations, validate_hand};

/// Configuration for the search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Value a tree must evaluate to exactly
    pub target: Rational64,
    /// Spread the search over the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: Rational64::from_integer(TARGET),
            parallel: true,
        }
    }
}

/// Operator assignments and card orderings the search walks through
struct SearchSpace<'a> {
    combinations: Vec<Vec<Operator>>,
    orderings: Vec<Vec<&'a str>>,
}

/// Brute-force search over every expression tree a hand can form
pub struct ExpressionSolver {
    config: SolverConfig,
}

impl ExpressionSolver {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn search_space<'a, S: AsRef<str>>(
        cards: &'a [S],
    ) -> Result<SearchSpace<'a>, SolverError> {
        validate_hand(cards, HAND_SIZE)?;

        let hand: Vec<&str> = cards.iter().map(AsRef::as_ref).collect();
        let space = SearchSpace {
            combinations: operator_combinations(&Operator::ALL, OPERATOR_SLOTS),
            orderings: permutations(&hand),
        };

        debug!(
            "Search space for {:?}: {} operator combinations x {} orderings",
            hand,
            space.combinations.len(),
            space.orderings.len()
        );
        Ok(space)
    }

    /// `Some` with the tree when it hits the target, `Some(Err)` when it
    /// cannot be evaluated, `None` otherwise.
    fn keep_if_target(
        tree: Expression,
        target: Rational64,
    ) -> Option<Result<Expression, ExpressionError>> {
        tree.evaluate()
            .map(|value| (value == target).then_some(tree))
            .transpose()
    }

    /// Every distinct tree over the hand: all operator combinations crossed
    /// with all card orderings and all tree shapes, deduplicated by structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not exactly four valid card ranks.
    pub fn create_trees<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Result<HashSet<Expression>, SolverError> {
        let space = Self::search_space(cards)?;
        let SearchSpace {
            combinations,
            orderings,
        } = &space;

        let batches: Vec<Vec<Expression>> = if self.config.parallel {
            combinations
                .par_iter()
                .flat_map_iter(|ops| {
                    orderings
                        .iter()
                        .map(move |hand| generate_trees(hand, ops))
                })
                .collect::<Result<_, _>>()?
        } else {
            combinations
                .iter()
                .flat_map(|ops| {
                    orderings
                        .iter()
                        .map(move |hand| generate_trees(hand, ops))
                })
                .collect::<Result<_, _>>()?
        };

        let generated: usize = batches.iter().map(Vec::len).sum();
        let trees: HashSet<Expression> = batches.into_iter().flatten().collect();

        info!(
            "Generated {} trees, {} distinct after deduplication",
            generated,
            trees.len()
        );
        Ok(trees)
    }

    /// Every distinct tree over the hand that evaluates exactly to the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not exactly four valid card ranks.
    pub fn find_solutions<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Result<HashSet<Expression>, SolverError> {
        let trees = self.create_trees(cards)?;
        let target = self.config.target;

        info!("Evaluating {} trees against target {}", trees.len(), target);

        let solutions: HashSet<Expression> = if self.config.parallel {
            trees
                .into_par_iter()
                .filter_map(|tree| Self::keep_if_target(tree, target))
                .collect::<Result<_, _>>()?
        } else {
            trees
                .into_iter()
                .filter_map(|tree| Self::keep_if_target(tree, target))
                .collect::<Result<_, _>>()?
        };

        info!("Found {} solutions", solutions.len());
        Ok(solutions)
    }

    /// Stop at the first tree that hits the target. With a parallel config
    /// any hit may come back; sequentially it is the first in search order.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not exactly four valid card ranks.
    pub fn find_any_solution<S: AsRef<str>>(
        &self,
        cards: &[S],
    ) -> Result<Option<Expression>, SolverError> {
        let space = Self::search_space(cards)?;
        let target = self.config.target;

        let first_hit = |ops: &Vec<Operator>, hand: &Vec<&str>| {
            let trees = match generate_trees(hand, ops) {
                Ok(trees) => trees,
                Err(e) => return Some(Err(SolverError::from(e))),
            };
            trees
                .into_iter()
                .find_map(|tree| Self::keep_if_target(tree, target))
                .map(|hit| hit.map_err(SolverError::from))
        };

        let found = if self.config.parallel {
            space
                .combinations
                .par_iter()
                .flat_map_iter(|ops| space.orderings.iter().map(move |hand| (ops, hand)))
                .find_map_any(|(ops, hand)| first_hit(ops, hand))
        } else {
            space
                .combinations
                .iter()
                .flat_map(|ops| space.orderings.iter().map(move |hand| (ops, hand)))
                .find_map(|(ops, hand)| first_hit(ops, hand))
        };

        match &found {
            Some(Ok(expr)) => info!("Found exact match: {}", expr),
            Some(Err(e)) => info!("Search aborted: {}", e),
            None => info!("No exact match found"),
        }

        found.transpose()
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
