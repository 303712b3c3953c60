use std::collections::HashSet;

use num_rational::Rational64;

use crate::expression::Expression;
use crate::solver::{ExpressionSolver, SolverConfig, SolverError};
use crate::utils::UtilsError;

fn sequential() -> ExpressionSolver {
    ExpressionSolver::with_config(SolverConfig {
        parallel: false,
        ..SolverConfig::default()
    })
}

fn rendered(trees: &HashSet<Expression>) -> HashSet<String> {
    trees.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_default_config() {
    let solver = ExpressionSolver::default();
    assert_eq!(solver.config().target, Rational64::from_integer(24));
    assert!(solver.config().parallel);
}

#[test]
fn test_create_trees_distinct_hands() {
    let solver = ExpressionSolver::new();

    let result = solver.create_trees(&["A", "2", "3", "4"]);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        assert_eq!(trees.len(), 7680);
    }

    let result = solver.create_trees(&["2", "5", "K", "9"]);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        assert_eq!(trees.len(), 7680);
    }
}

#[test]
fn test_create_trees_repeated_rank_halves_count() {
    let result = ExpressionSolver::new().create_trees(&["2", "2", "Q", "6"]);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        assert_eq!(trees.len(), 7680 / 2);
    }
}

#[test]
fn test_create_trees_all_equal_ranks() {
    let result = ExpressionSolver::new().create_trees(&["A", "A", "A", "A"]);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        // 64 operator combinations x 5 shapes, orderings all collapse
        assert_eq!(trees.len(), 320);
    }
}

#[test]
fn test_create_trees_sequential_matches_parallel() {
    let cards = ["3", "3", "8", "8"];
    let parallel = ExpressionSolver::new().create_trees(&cards);
    let serial = sequential().create_trees(&cards);
    assert!(parallel.is_ok());
    assert_eq!(parallel, serial);
}

#[test]
fn test_every_tree_uses_the_whole_hand() {
    let result = sequential().create_trees(&["10", "J", "Q", "K"]);
    assert!(result.is_ok());
    if let Ok(trees) = result {
        for tree in &trees {
            let mut leaves = tree.leaves();
            leaves.sort_unstable();
            assert_eq!(leaves, vec!["10", "J", "K", "Q"]);
            assert_eq!(tree.operator_count(), 3);
        }
    }
}

#[test]
fn test_find_solutions_none_for_four_aces() {
    let result = ExpressionSolver::new().find_solutions(&["A", "A", "A", "A"]);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(solutions.is_empty());
    }
}

#[test]
fn test_find_solutions_a23q() {
    let result = ExpressionSolver::new().find_solutions(&["A", "2", "3", "Q"]);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(solutions.len(), 33);
        for tree in &solutions {
            assert_eq!(tree.evaluate(), Ok(Rational64::from_integer(24)));
        }
        let strings = rendered(&solutions);
        assert!(strings.contains("(Q*((A+3)/2))"));
        assert!(strings.contains("(Q/((3/2)-A))"));
        assert!(strings.contains("(((A-2)+3)*Q)"));
    }
}

#[test]
fn test_find_solutions_sequential_matches_parallel() {
    let cards = ["A", "2", "3", "4"];
    let parallel = ExpressionSolver::new().find_solutions(&cards);
    let serial = sequential().find_solutions(&cards);
    assert!(serial.is_ok());
    assert_eq!(parallel, serial);
    if let Ok(solutions) = serial {
        assert_eq!(solutions.len(), 242);
    }
}

#[test]
fn test_find_solutions_needs_exact_fractions() {
    // The only way to 24 is 8 / (3 - 8 / 3)
    let result = ExpressionSolver::new().find_solutions(&["3", "3", "8", "8"]);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert_eq!(rendered(&solutions), HashSet::from(["(8/(3-(8/3)))".to_string()]));
    }
}

#[test]
fn test_find_solutions_custom_target() {
    let solver = ExpressionSolver::with_config(SolverConfig {
        target: Rational64::from_integer(4),
        parallel: false,
    });
    let result = solver.find_solutions(&["A", "A", "A", "A"]);
    assert!(result.is_ok());
    if let Ok(solutions) = result {
        assert!(rendered(&solutions).contains("(((A+A)+A)+A)"));
        for tree in &solutions {
            assert_eq!(tree.evaluate(), Ok(Rational64::from_integer(4)));
        }
    }
}

#[test]
fn test_find_any_solution() {
    for solver in [ExpressionSolver::new(), sequential()] {
        let result = solver.find_any_solution(&["A", "2", "3", "Q"]);
        assert!(result.is_ok());
        if let Ok(found) = result {
            assert!(found.is_some());
            if let Some(expr) = found {
                assert_eq!(expr.evaluate(), Ok(Rational64::from_integer(24)));
            }
        }

        let result = solver.find_any_solution(&["A", "A", "A", "A"]);
        assert_eq!(result, Ok(None));
    }
}

#[test]
fn test_invalid_hand_size() {
    let result = ExpressionSolver::new().create_trees(&["A", "2", "3"]);
    assert_eq!(
        result,
        Err(SolverError::UtilsError(UtilsError::InvalidHandSize {
            expected: 4,
            actual: 3
        }))
    );

    let result = ExpressionSolver::new().find_any_solution(&["A", "2", "3", "4", "5"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_card() {
    let result = ExpressionSolver::new().find_solutions(&["A", "2", "3", "Z"]);
    assert_eq!(
        result,
        Err(SolverError::UtilsError(UtilsError::InvalidCard(
            "Z".to_string()
        )))
    );
}
