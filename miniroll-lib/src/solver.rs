use crate::dice::{RollInput, RollSpec};
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Parse dice notation into a roll specification
pub fn parse(notation: &str) -> Result<RollSpec> {
    parser::Parser::parse_notation(notation)
}

/// Execute a roll using the default Rng source
pub fn execute<I: RollInput + ?Sized>(input: &I) -> Result<roll::Result> {
    execute_with(input, &mut rand::thread_rng())
}

/// Execute a roll using the provided Rng source
pub fn execute_with<I: RollInput + ?Sized, R: Rng>(
    input: &I,
    generator: &mut R,
) -> Result<roll::Result> {
    execute_with_source(input, &mut RandomSource { generator })
}

/// Execute a roll using the provided source
pub fn execute_with_source<I: RollInput + ?Sized, S: roll::Source>(
    input: &I,
    source: &mut S,
) -> Result<roll::Result> {
    let spec = input.resolve()?;
    let result = Evaluator::eval(&spec, input.notation().into_owned(), source);
    tracing::debug!(
        source = result.get_source(),
        total = result.get_total(),
        dropped = result.get_dropped().len(),
        "executed roll"
    );
    Ok(result)
}
