use thiserror::Error;

/// Precondition violations detected at the boundary of a binary decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A choice outside of `{0, 1}` was supplied.
    #[error("Invalid choice {value}, expected 0 or 1")]
    InvalidChoice {
        /// The rejected raw value.
        value: i64,
    },

    /// A finalization threshold that is not strictly positive was supplied.
    #[error("Invalid beta {value}, must be strictly positive")]
    InvalidBeta {
        /// The rejected raw value.
        value: i64,
    },
}
