use core::fmt;

use tracing::debug;

use snowbft_core_types::{Beta, Choice, UnaryConsensus};

use crate::BinarySnowflake;

/// Unary snowflake: counts consecutive successful polls for a single option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnarySnowflake {
    beta: Beta,
    confidence: u64,
    finalized: bool,
}

impl UnarySnowflake {
    /// Finalization threshold.
    pub fn beta(&self) -> Beta {
        self.beta
    }

    /// Current streak of successful polls.
    pub fn confidence(&self) -> u64 {
        self.confidence
    }
}

impl UnaryConsensus for UnarySnowflake {
    type Binary = BinarySnowflake;

    fn new(beta: Beta) -> Self {
        Self {
            beta,
            confidence: 0,
            finalized: false,
        }
    }

    fn record_successful_poll(&mut self) {
        self.confidence += 1;

        if !self.finalized && self.beta.is_reached_by(self.confidence) {
            debug!(beta = %self.beta, "Unary snowflake finalized");
            self.finalized = true;
        }
    }

    fn record_unsuccessful_poll(&mut self) {
        self.confidence = 0;
    }

    fn finalized(&self) -> bool {
        self.finalized
    }

    /// The streak carries over onto `choice`, as does finalization.
    fn extend(&self, beta: Beta, choice: Choice) -> BinarySnowflake {
        BinarySnowflake::from_parts(beta, choice, self.confidence, self.finalized)
    }
}

impl fmt::Display for UnarySnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SF(Confidence = {}, Finalized = {})",
            self.confidence, self.finalized
        )
    }
}
