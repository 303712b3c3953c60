//! Utils module split into submodules

mod cards;
mod combinations;
mod errors;
mod validation;

pub use cards::{RANKS, card_value, is_card};
pub use combinations::{operator_combinations, permutations};
pub use errors::UtilsError;
pub use validation::validate_hand;
