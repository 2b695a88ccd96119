//! Confidence-streak primitives: a decision finalizes once `beta` consecutive
//! successful polls have been observed.

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
pub use binary::BinarySnowflake;

mod unary;
pub use unary::UnarySnowflake;
