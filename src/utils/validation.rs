use log::{debug, warn};

use crate::utils::cards::is_card;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the hand does not hold exactly `size` cards or if any
/// card is outside the rank domain.
pub fn validate_hand<S: AsRef<str>>(cards: &[S], size: usize) -> Result<(), UtilsError> {
    debug!("Validating hand of {} cards", cards.len());

    if cards.len() != size {
        warn!("Hand holds {} cards, expected {}", cards.len(), size);
        return Err(UtilsError::InvalidHandSize {
            expected: size,
            actual: cards.len(),
        });
    }

    if let Some(bad) = cards.iter().map(|card| card.as_ref()).find(|card| !is_card(card)) {
        warn!("Hand contains an unknown card: '{}'", bad);
        return Err(UtilsError::InvalidCard(bad.to_string()));
    }

    debug!("Hand validation successful");
    Ok(())
}
