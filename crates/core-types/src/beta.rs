use core::fmt;
use core::num::NonZeroU64;

use crate::Error;

/// Number of consecutive successful polls needed to finalize a decision.
///
/// Always strictly positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u64", into = "u64")
)]
pub struct Beta(NonZeroU64);

impl Beta {
    /// Create a new threshold, rejecting zero.
    pub const fn new(beta: u64) -> Result<Self, Error> {
        match NonZeroU64::new(beta) {
            Some(beta) => Ok(Self(beta)),
            None => Err(Error::InvalidBeta { value: 0 }),
        }
    }

    /// Create a new threshold from a value already known to be non-zero.
    pub const fn from_nonzero(beta: NonZeroU64) -> Self {
        Self(beta)
    }

    /// The threshold as a plain integer.
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Whether a confidence streak of the given length reaches this threshold.
    pub const fn is_reached_by(self, confidence: u64) -> bool {
        confidence >= self.get()
    }
}

impl TryFrom<u64> for Beta {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Beta {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(Error::InvalidBeta { value })
    }
}

impl From<Beta> for u64 {
    fn from(beta: Beta) -> Self {
        beta.get()
    }
}

impl fmt::Display for Beta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
