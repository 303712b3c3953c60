use log::debug;

use crate::utils::errors::UtilsError;

/// Card ranks in ascending order, paired with their numeric value.
pub const RANKS: [(&str, i64); 13] = [
    ("A", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
    ("10", 10),
    ("J", 11),
    ("Q", 12),
    ("K", 13),
];

/// # Errors
///
/// Returns an error if the token is not one of `A 2 3 4 5 6 7 8 9 10 J Q K`.
pub fn card_value(token: &str) -> Result<i64, UtilsError> {
    let value = RANKS
        .iter()
        .find(|(rank, _)| *rank == token)
        .map(|&(_, value)| value)
        .ok_or_else(|| UtilsError::InvalidCard(token.to_string()))?;
    debug!("Card '{}' has value {}", token, value);
    Ok(value)
}

pub fn is_card(token: &str) -> bool {
    RANKS.iter().any(|(rank, _)| *rank == token)
}
