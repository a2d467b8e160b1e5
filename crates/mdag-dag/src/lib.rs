//! MerkleDAG construction for content-addressed file trees.
//!
//! Walks a file-or-directory tree, turns it into hash-linked [`Object`]s and
//! persists each distinct object once through a [`KvStore`]. Large files are
//! split into fixed-size chunks; directories become tree objects whose links
//! carry the child name, root digest and logical size.
//!
//! The builder is generic over both seams it consumes: the store
//! ([`KvStore`]) and the hash primitive ([`Accumulator`]).
//!
//! ```
//! use mdag_crypto::Blake3Accumulator;
//! use mdag_dag::{add, MemNode};
//! use mdag_store::InMemoryKvStore;
//!
//! let tree = MemNode::dir("root", vec![
//!     MemNode::file("a.txt", b"hi".to_vec()),
//!     MemNode::dir("b", vec![]),
//! ]);
//! let store = InMemoryKvStore::new();
//! let root = add(&store, &tree, Blake3Accumulator::new()).unwrap();
//! assert_eq!(store.len(), 3);
//! assert!(!root.is_empty());
//! ```
//!
//! [`KvStore`]: mdag_store::KvStore
//! [`Accumulator`]: mdag_crypto::Accumulator

pub mod builder;
pub mod config;
pub mod error;
pub mod memory;
pub mod node;
pub mod object;

pub use builder::{add, AddStats, DagBuilder};
pub use config::{BuilderConfig, DEFAULT_CHUNK_SIZE};
pub use error::{DagError, DagResult};
pub use memory::{MemDir, MemFile, MemNode};
pub use node::{DirNode, FileNode, Node, NodeKind};
pub use object::{Link, LinkKind, Object};
