//! Snowball binary decisions: a plurality accumulator over successful polls,
//! paired with an embedded confidence-streak primitive deciding finalization.

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

mod binary;
pub use binary::BinarySnowball;

mod unary;
pub use unary::UnarySnowball;

pub use snowbft_core_snowflake::{BinarySnowflake, UnarySnowflake};
pub use snowbft_core_types::{Beta, BinaryConsensus, Choice, Error, UnaryConsensus};
