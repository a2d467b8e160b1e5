//! Key-value storage for MerkleDAG objects.
//!
//! The DAG builder persists serialized objects under their content digest
//! through the narrow [`KvStore`] interface: an existence check and a write.
//! The store never interprets values; it is a pure digest-keyed byte store.
//!
//! # Storage Backends
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests and embedding
//! - [`FsKvStore`] -- loose-object directory, one file per digest
//!
//! # Design Rules
//!
//! 1. Values are immutable once written (content-addressing guarantees this).
//! 2. The store is append-only; nothing here deletes.
//! 3. Backends are safe to share between threads.
//! 4. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::FsKvStore;
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
