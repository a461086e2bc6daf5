//! Step parameter types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which branch of a fixture a step exercises.
///
/// Feature files spell this as a bare word: `true` selects the valid
/// fixture and any other word selects the invalid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Pick between the valid and invalid variant of a value.
    pub fn pick<T>(self, valid: T, invalid: T) -> T {
        match self {
            Self::Valid => valid,
            Self::Invalid => invalid,
        }
    }
}

impl FromStr for Validity {
    type Err = Infallible;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        Ok(if word == "true" {
            Self::Valid
        } else {
            Self::Invalid
        })
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
