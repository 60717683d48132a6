pub mod selection;

use crate::error::Result;
use crate::parser::Parser;
pub use selection::{End, Mode, Selection};
use std::borrow::Cow;

/// Sides of the percentile die `%`
pub const PERCENTILE_SIDES: u64 = 100;

/// Most dice a single roll may throw
pub const MAX_DICE: u64 = 10_000;

/// `count * sides` must fit in a `u64` so a total can never overflow
pub(crate) fn total_fits(count: u64, sides: u64) -> bool {
    count.checked_mul(sides).is_some()
}

/// Immutable description of a single dice group with an optional selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollSpec {
    count: u64,
    sides: u64,
    selection: Option<Selection>,
}

impl RollSpec {
    /// Fails when `count` is zero or above [`MAX_DICE`], when `sides` is lower than 2,
    /// or when the highest possible total does not fit in a `u64`
    pub fn new(count: u64, sides: u64) -> Result<Self> {
        if count == 0 {
            return Err("can't roll zero dice".into());
        }
        if count > MAX_DICE {
            return Err(format!("exceeded max allowed amount of dice `{MAX_DICE}`").into());
        }
        if sides < 2 {
            return Err(format!("a die needs at least 2 sides, got `{sides}`").into());
        }
        if !total_fits(count, sides) {
            return Err(format!("`{count}d{sides}` can total more than `{}`", u64::MAX).into());
        }
        Ok(RollSpec {
            count,
            sides,
            selection: None,
        })
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sides(&self) -> u64 {
        self.sides
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }
}

/// Canonical short notation, always accepted back by the parser
impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(selection) = &self.selection {
            write!(f, "{selection}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RollSpec {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Parser::parse_notation(s)
    }
}

/// Anything a roll can be made from: dice notation or an already built [`RollSpec`]
pub trait RollInput {
    /// Get the roll specification, parsing notation if needed
    fn resolve(&self) -> Result<Cow<'_, RollSpec>>;

    /// Notation reported as the source of a roll
    fn notation(&self) -> Cow<'_, str>;
}

impl RollInput for str {
    fn resolve(&self) -> Result<Cow<'_, RollSpec>> {
        Parser::parse_notation(self).map(Cow::Owned)
    }

    fn notation(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl RollInput for String {
    fn resolve(&self) -> Result<Cow<'_, RollSpec>> {
        self.as_str().resolve()
    }

    fn notation(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl RollInput for RollSpec {
    fn resolve(&self) -> Result<Cow<'_, RollSpec>> {
        Ok(Cow::Borrowed(self))
    }

    fn notation(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
