use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("A hand must hold exactly {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },
    #[error("Not a card rank: {0}")]
    InvalidCard(String),
}
