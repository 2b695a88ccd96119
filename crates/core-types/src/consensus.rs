use core::fmt::Display;

use crate::{Beta, Choice};

/// A binary decision driven by the outcome of network polls.
///
/// This is the contract a confidence-streak primitive (snowflake) must fulfil to be
/// embedded in a snowball instance, and which snowball instances fulfil themselves.
///
/// Instances are not internally synchronized: the owner of a decision is expected to
/// serialize calls to the mutating methods.
pub trait BinaryConsensus
where
    Self: Display,
{
    /// Create a new instance which initially prefers `choice`
    /// and finalizes after `beta` consecutive successful polls.
    fn new(beta: Beta, choice: Choice) -> Self
    where
        Self: Sized;

    /// The choice currently recommended by this instance.
    fn preference(&self) -> Choice;

    /// Record a poll in which a sufficient majority of the sample named `choice`.
    fn record_successful_poll(&mut self, choice: Choice);

    /// Record a poll which did not reach a sufficient majority for either choice.
    fn record_unsuccessful_poll(&mut self);

    /// Whether this instance has finalized.
    ///
    /// Once this returns `true`, it returns `true` forever.
    fn finalized(&self) -> bool;
}

/// A decision over a single, so far uncontested, option.
///
/// Once a conflicting option shows up, the accumulated state is carried over
/// into a [`BinaryConsensus`] instance via [`UnaryConsensus::extend`].
pub trait UnaryConsensus
where
    Self: Display,
{
    /// The binary instance this unary instance extends into.
    type Binary: BinaryConsensus;

    /// Create a new instance which finalizes after `beta` consecutive successful polls.
    fn new(beta: Beta) -> Self
    where
        Self: Sized;

    /// Record a poll in which a sufficient majority of the sample named the option.
    fn record_successful_poll(&mut self);

    /// Record a poll which did not reach a sufficient majority.
    fn record_unsuccessful_poll(&mut self);

    /// Whether this instance has finalized.
    fn finalized(&self) -> bool;

    /// Convert this instance into a binary one, where the option tracked so far
    /// is identified by `choice` and finalization now requires `beta` consecutive polls.
    fn extend(&self, beta: Beta, choice: Choice) -> Self::Binary;
}
