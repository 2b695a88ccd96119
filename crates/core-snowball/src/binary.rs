use core::fmt;

use tracing::{debug, trace};

use snowbft_core_snowflake::BinarySnowflake;
use snowbft_core_types::{Beta, BinaryConsensus, Choice, Error};

/// Binary snowball instance.
///
/// Tracks, for each choice, how many successful polls have ever named it, and prefers
/// the choice with the strictly larger count. Ties keep the current preference.
///
/// Finalization is delegated entirely to the embedded confidence primitive `S`.
/// With low probability that primitive finalizes on a choice which differs from the
/// preference by count; once finalized, its choice is the one reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinarySnowball<S = BinarySnowflake> {
    /// Choice with the largest number of successful polls.
    preference: Choice,

    /// Total number of successful polls for each choice, indexed by [`Choice::index`].
    num_successful_polls: [u64; 2],

    /// Confidence primitive deciding finalization.
    confidence: S,
}

impl<S> BinarySnowball<S>
where
    S: BinaryConsensus,
{
    /// Create a snowball around an existing confidence primitive.
    ///
    /// The primitive is expected to have been initialized with the same
    /// initial choice, and carries its own finalization threshold.
    pub fn with_confidence(choice: Choice, confidence: S) -> Self {
        Self {
            preference: choice,
            num_successful_polls: [0; 2],
            confidence,
        }
    }

    /// Create a snowball from raw inputs, rejecting a non-positive `beta`
    /// or a `choice` outside of `{0, 1}`.
    pub fn try_new(beta: i64, choice: i64) -> Result<Self, Error> {
        let beta = Beta::try_from(beta)?;
        let choice = Choice::try_from(choice)?;

        Ok(<Self as BinaryConsensus>::new(beta, choice))
    }

    /// Number of successful polls which named `choice` so far.
    pub fn num_successful_polls(&self, choice: Choice) -> u64 {
        self.num_successful_polls[choice.index()]
    }

    /// The embedded confidence primitive.
    pub fn confidence(&self) -> &S {
        &self.confidence
    }

    /// Seed the counter of `choice`, as when extending a unary decision.
    pub(crate) fn with_num_successful_polls(mut self, choice: Choice, count: u64) -> Self {
        self.num_successful_polls[choice.index()] = count;
        self
    }
}

impl<S> BinaryConsensus for BinarySnowball<S>
where
    S: BinaryConsensus,
{
    fn new(beta: Beta, choice: Choice) -> Self {
        Self::with_confidence(choice, S::new(beta, choice))
    }

    fn preference(&self) -> Choice {
        if self.confidence.finalized() {
            return self.confidence.preference();
        }

        self.preference
    }

    fn record_successful_poll(&mut self, choice: Choice) {
        let count = &mut self.num_successful_polls[choice.index()];
        *count += 1;
        let count = *count;

        trace!(%choice, count, "Recorded successful poll");

        if count > self.num_successful_polls(choice.other()) && self.preference != choice {
            debug!(
                from = %self.preference,
                to = %choice,
                count,
                "Snowball preference changed"
            );

            self.preference = choice;
        }

        self.confidence.record_successful_poll(choice);
    }

    fn record_unsuccessful_poll(&mut self) {
        self.confidence.record_unsuccessful_poll();
    }

    fn finalized(&self) -> bool {
        self.confidence.finalized()
    }
}

impl<S> fmt::Display for BinarySnowball<S>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SB(Preference = {}, NumSuccessfulPolls[0] = {}, NumSuccessfulPolls[1] = {}, SF = {})",
            self.preference,
            self.num_successful_polls[0],
            self.num_successful_polls[1],
            self.confidence
        )
    }
}
