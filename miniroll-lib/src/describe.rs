use crate::dice::{RollInput, RollSpec};
use crate::error::Result;

/// Describe a roll in plain words, e.g. `roll 4 6-sided dice and keep the highest 3`
pub fn describe<I: RollInput + ?Sized>(input: &I) -> Result<String> {
    Ok(long(&*input.resolve()?))
}

/// Describe a roll in canonical dice notation, e.g. `4d6kH3`
///
/// The output is always accepted by [`crate::parse`], percentile dice come back as `d100`.
pub fn describe_short<I: RollInput + ?Sized>(input: &I) -> Result<String> {
    Ok(input.resolve()?.to_string())
}

fn long(spec: &RollSpec) -> String {
    let dice = if spec.count() == 1 { "die" } else { "dice" };
    let base = format!("roll {} {}-sided {dice}", spec.count(), spec.sides());
    match spec.selection() {
        None => base,
        Some(selection) if selection.count() == 1 => format!(
            "{base} and {} the {}",
            selection.mode().as_str(),
            selection.end().as_str()
        ),
        Some(selection) => format!(
            "{base} and {} the {} {}",
            selection.mode().as_str(),
            selection.end().as_str(),
            selection.count()
        ),
    }
}
