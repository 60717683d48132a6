use crate::parser::Rule;

/// Crate Error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not valid dice notation
    #[error("failed to parse dice notation `{input}`")]
    Syntax {
        input: String,
        #[source]
        cause: Box<pest::error::Error<Rule>>,
    },
    /// A roll built by hand breaks one of the roll invariants
    #[error("invalid roll: {0}")]
    InvalidRoll(String),
}

impl Error {
    pub(crate) fn syntax(input: &str, cause: pest::error::Error<Rule>) -> Self {
        Self::Syntax {
            input: input.to_owned(),
            cause: Box::new(cause),
        }
    }

    /// The offending notation, if this is a syntax error
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Syntax { input, .. } => Some(input),
            Self::InvalidRoll(_) => None,
        }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Self::InvalidRoll(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::InvalidRoll(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
