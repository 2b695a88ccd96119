use core::fmt;

use crate::Error;

/// One of the two options of a binary decision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Choice {
    /// Choice `0`.
    #[default]
    Zero,

    /// Choice `1`.
    One,
}

impl Choice {
    /// Both choices, in index order.
    pub const ALL: [Choice; 2] = [Choice::Zero, Choice::One];

    /// The opposite choice, ie. `1 - self`.
    pub const fn other(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Index of this choice into a per-choice array.
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Numeric value of this choice.
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

impl TryFrom<u8> for Choice {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Choice {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(Error::InvalidChoice { value }),
        }
    }
}

impl From<Choice> for u8 {
    fn from(choice: Choice) -> Self {
        choice.as_u8()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
