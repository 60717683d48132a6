pub mod describe;
pub mod dice;
pub mod error;
mod evaluator;
mod parser;
pub mod roll;
pub mod solver;

#[cfg(test)]
mod roll_test_strategies;

pub use describe::{describe, describe_short};
pub use dice::{End, Mode, RollInput, RollSpec, Selection, MAX_DICE};
pub use error::{Error, Result};
pub use roll::{Result as RollResult, Source};
pub use solver::{execute, execute_with, execute_with_source, parse};
