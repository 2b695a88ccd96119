use core::fmt;

use tracing::{debug, trace};

use snowbft_core_types::{Beta, BinaryConsensus, Choice};

/// Binary snowflake: finalizes on a choice once `beta` consecutive successful
/// polls have named it.
///
/// A successful poll for the other choice restarts the streak at 1 on that choice,
/// an unsuccessful poll resets it to 0. Once finalized, polls are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySnowflake {
    /// Number of consecutive successful polls required to finalize.
    beta: Beta,

    /// Choice named by the current streak of successful polls.
    preference: Choice,

    /// Length of the current streak.
    confidence: u64,

    finalized: bool,
}

impl BinarySnowflake {
    /// Build a snowflake from existing streak state, as when extending a unary decision.
    pub fn from_parts(beta: Beta, preference: Choice, confidence: u64, finalized: bool) -> Self {
        Self {
            beta,
            preference,
            confidence,
            finalized,
        }
    }

    /// Number of consecutive successful polls required to finalize.
    pub fn beta(&self) -> Beta {
        self.beta
    }

    /// Length of the current streak of successful polls for the preference.
    pub fn confidence(&self) -> u64 {
        self.confidence
    }
}

impl BinaryConsensus for BinarySnowflake {
    fn new(beta: Beta, choice: Choice) -> Self {
        Self::from_parts(beta, choice, 0, false)
    }

    fn preference(&self) -> Choice {
        self.preference
    }

    fn record_successful_poll(&mut self, choice: Choice) {
        if self.finalized {
            return;
        }

        if self.preference == choice {
            self.confidence += 1;
        } else {
            self.preference = choice;
            self.confidence = 1;
        }

        trace!(%choice, confidence = self.confidence, "Snowflake streak updated");

        self.finalized = self.beta.is_reached_by(self.confidence);

        if self.finalized {
            debug!(%choice, beta = %self.beta, "Snowflake finalized");
        }
    }

    fn record_unsuccessful_poll(&mut self) {
        self.confidence = 0;
    }

    fn finalized(&self) -> bool {
        self.finalized
    }
}

impl fmt::Display for BinarySnowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SF(Preference = {}, Confidence = {}, Finalized = {})",
            self.preference, self.confidence, self.finalized
        )
    }
}
