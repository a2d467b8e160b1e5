//! Hash primitives for MerkleDAG ingestion.
//!
//! The DAG builder never picks a hash algorithm. It is handed an
//! [`Accumulator`] and drives it through a [`ContentHasher`], which isolates
//! every digest computation from the ones before it.
//!
//! Hashing is delegated to the `blake3` crate.

pub mod hasher;

pub use hasher::{Accumulator, Blake3Accumulator, ContentHasher};
