use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AmountError {
    #[error("question amount must be at least 1")]
    Zero,
    #[error("question amount {requested} exceeds the maximum of {max}")]
    TooLarge { requested: u32, max: u32 },
    #[error("invalid question amount: {raw}")]
    Invalid { raw: String },
}

/// Number of questions to request for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuestionAmount(u32);

impl QuestionAmount {
    pub const DEFAULT: Self = Self(10);
    /// Per-request cap enforced by the provider.
    pub const MAX: u32 = 50;

    /// # Errors
    ///
    /// Returns `AmountError::Zero` for 0 and `AmountError::TooLarge` above [`Self::MAX`].
    pub fn new(value: u32) -> Result<Self, AmountError> {
        if value == 0 {
            return Err(AmountError::Zero);
        }
        if value > Self::MAX {
            return Err(AmountError::TooLarge {
                requested: value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for QuestionAmount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for QuestionAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| AmountError::Invalid {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}
