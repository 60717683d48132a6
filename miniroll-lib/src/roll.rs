use crate::dice::RollSpec;
use itertools::Itertools;

/// Keep the outcome of one executed roll
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Result {
    total: u64,
    kept: Vec<u64>,
    dropped: Vec<u64>,
    source: String,
    spec: RollSpec,
}

impl Result {
    pub(crate) fn new(kept: Vec<u64>, dropped: Vec<u64>, source: String, spec: RollSpec) -> Self {
        Result {
            total: kept.iter().sum(),
            kept,
            dropped,
            source,
            spec,
        }
    }

    /// Sum of the kept dice
    pub fn get_total(&self) -> u64 {
        self.total
    }

    /// Dice counted in the total, in roll order
    pub fn get_kept(&self) -> &[u64] {
        &self.kept
    }

    /// Dice left out of the total, in roll order
    pub fn get_dropped(&self) -> &[u64] {
        &self.dropped
    }

    /// Notation that produced this roll
    pub fn get_source(&self) -> &str {
        &self.source
    }

    pub fn get_spec(&self) -> &RollSpec {
        &self.spec
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` [{}]", self.source.trim(), self.kept.iter().format(", "))?;
        if !self.dropped.is_empty() {
            write!(f, " ~~[{}]~~", self.dropped.iter().format(", "))?;
        }
        write!(f, " **{}**", self.total)
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Return a value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}
