use core::fmt;

use snowbft_core_snowflake::BinarySnowflake;
use snowbft_core_types::{Beta, BinaryConsensus, Choice};

use crate::Poll;

/// Wraps a [`BinarySnowflake`] and records every poll forwarded to it.
#[derive(Clone, Debug)]
pub struct SpyConfidence {
    inner: BinarySnowflake,
    recorded: Vec<Poll>,
}

impl SpyConfidence {
    /// Polls forwarded so far, in order.
    pub fn recorded(&self) -> &[Poll] {
        &self.recorded
    }

    /// The wrapped snowflake.
    pub fn inner(&self) -> &BinarySnowflake {
        &self.inner
    }
}

impl BinaryConsensus for SpyConfidence {
    fn new(beta: Beta, choice: Choice) -> Self {
        Self {
            inner: BinarySnowflake::new(beta, choice),
            recorded: Vec::new(),
        }
    }

    fn preference(&self) -> Choice {
        self.inner.preference()
    }

    fn record_successful_poll(&mut self, choice: Choice) {
        self.recorded.push(Poll::Successful(choice));
        self.inner.record_successful_poll(choice);
    }

    fn record_unsuccessful_poll(&mut self) {
        self.recorded.push(Poll::Unsuccessful);
        self.inner.record_unsuccessful_poll();
    }

    fn finalized(&self) -> bool {
        self.inner.finalized()
    }
}

impl fmt::Display for SpyConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spy({}, recorded = {})", self.inner, self.recorded.len())
    }
}

/// Confidence primitive whose outcome is fixed up front: it finalizes on a
/// predetermined choice once it has seen a given number of successful polls,
/// whatever those polls named.
///
/// Until then it mirrors the last successful poll.
#[derive(Clone, Debug)]
pub struct ScriptedConfidence {
    finalize_on: Choice,
    after: u64,
    seen: u64,
    preference: Choice,
    finalized: bool,
}

impl ScriptedConfidence {
    /// Start preferring `initial`, and finalize on `finalize_on`
    /// after `after` successful polls.
    pub fn finalizing_on(initial: Choice, finalize_on: Choice, after: Beta) -> Self {
        Self {
            finalize_on,
            after: after.get(),
            seen: 0,
            preference: initial,
            finalized: false,
        }
    }
}

impl BinaryConsensus for ScriptedConfidence {
    /// Finalizes on `choice` after `beta` successful polls.
    fn new(beta: Beta, choice: Choice) -> Self {
        Self::finalizing_on(choice, choice, beta)
    }

    fn preference(&self) -> Choice {
        self.preference
    }

    fn record_successful_poll(&mut self, choice: Choice) {
        if self.finalized {
            return;
        }

        self.seen += 1;
        self.preference = choice;

        if self.seen >= self.after {
            self.preference = self.finalize_on;
            self.finalized = true;
        }
    }

    fn record_unsuccessful_poll(&mut self) {}

    fn finalized(&self) -> bool {
        self.finalized
    }
}

impl fmt::Display for ScriptedConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scripted(Preference = {}, Seen = {}/{}, Finalized = {})",
            self.preference, self.seen, self.after, self.finalized
        )
    }
}
