//! Core data types and abstractions shared by the snowball family of binary decisions.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![deny(trivial_casts, trivial_numeric_casts)]
#![warn(
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    variant_size_differences
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::panic))]

mod beta;
pub use beta::Beta;

mod choice;
pub use choice::Choice;

mod consensus;
pub use consensus::{BinaryConsensus, UnaryConsensus};

mod error;
pub use error::Error;
