use core::fmt;

use snowbft_core_snowflake::UnarySnowflake;
use snowbft_core_types::{Beta, Choice, UnaryConsensus};

use crate::BinarySnowball;

/// Unary snowball instance, tracking a single option before any conflict is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnarySnowball {
    /// Total number of successful polls.
    num_successful_polls: u64,

    snowflake: UnarySnowflake,
}

impl UnarySnowball {
    /// Total number of successful polls so far.
    pub fn num_successful_polls(&self) -> u64 {
        self.num_successful_polls
    }

    /// The embedded unary snowflake.
    pub fn snowflake(&self) -> &UnarySnowflake {
        &self.snowflake
    }
}

impl UnaryConsensus for UnarySnowball {
    type Binary = BinarySnowball;

    fn new(beta: Beta) -> Self {
        Self {
            num_successful_polls: 0,
            snowflake: UnarySnowflake::new(beta),
        }
    }

    fn record_successful_poll(&mut self) {
        self.num_successful_polls += 1;
        self.snowflake.record_successful_poll();
    }

    fn record_unsuccessful_poll(&mut self) {
        self.snowflake.record_unsuccessful_poll();
    }

    fn finalized(&self) -> bool {
        self.snowflake.finalized()
    }

    /// All successful polls so far are credited to `choice`, which becomes the preference.
    fn extend(&self, beta: Beta, choice: Choice) -> BinarySnowball {
        BinarySnowball::with_confidence(choice, self.snowflake.extend(beta, choice))
            .with_num_successful_polls(choice, self.num_successful_polls)
    }
}

impl fmt::Display for UnarySnowball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SB(NumSuccessfulPolls = {}, SF = {})",
            self.num_successful_polls, self.snowflake
        )
    }
}
