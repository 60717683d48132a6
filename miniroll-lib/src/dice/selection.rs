use crate::error::Result;

/// What happens to the selected dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Drop,
    Keep,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Drop => "drop",
            Mode::Keep => "keep",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Drop => write!(f, "d"),
            Mode::Keep => write!(f, "k"),
        }
    }
}

/// Which end of the sorted rolls the selection is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum End {
    Lowest,
    Highest,
}

impl End {
    pub fn as_str(&self) -> &'static str {
        match self {
            End::Lowest => "lowest",
            End::Highest => "highest",
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            End::Lowest => write!(f, "L"),
            End::Highest => write!(f, "H"),
        }
    }
}

/// Keep or drop modifier with the amount of dice it selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    mode: Mode,
    end: End,
    count: u64,
}

impl Selection {
    /// Fails when `count` is zero
    pub fn new(mode: Mode, end: End, count: u64) -> Result<Self> {
        if count == 0 {
            return Err("can't select zero dice".into());
        }
        Ok(Selection { mode, end, count })
    }

    pub fn keep_highest(count: u64) -> Result<Self> {
        Self::new(Mode::Keep, End::Highest, count)
    }

    pub fn keep_lowest(count: u64) -> Result<Self> {
        Self::new(Mode::Keep, End::Lowest, count)
    }

    pub fn drop_highest(count: u64) -> Result<Self> {
        Self::new(Mode::Drop, End::Highest, count)
    }

    pub fn drop_lowest(count: u64) -> Result<Self> {
        Self::new(Mode::Drop, End::Lowest, count)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn end(&self) -> End {
        self.end
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Short notation suffix, e.g. `kH3` or `dL`
impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.mode, self.end)?;
        if self.count > 1 {
            write!(f, "{}", self.count)?;
        }
        Ok(())
    }
}
