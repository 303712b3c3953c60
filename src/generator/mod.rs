mod core;
mod errors;

pub use self::core::{TreeGenerator, generate_trees};
pub use errors::GeneratorError;
