//! Foundation types for MerkleDAG ingestion.
//!
//! Every other `mdag` crate depends on `mdag-types` for the [`Digest`] that
//! names stored objects.
//!
//! # Key Types
//!
//! - [`Digest`] — Content digest produced by an injected hash primitive
//! - [`TypeError`] — Parse failures for digests

pub mod digest;
pub mod error;

pub use digest::Digest;
pub use error::TypeError;
