//! Tree encoding: chunking, tree building and deduplicated persistence.
//!
//! [`DagBuilder`] walks a [`Node`] tree depth-first and produces objects
//! bottom-up: file chunks before the file composite, children before the
//! directory that links them. Each object is encoded, hashed and offered to
//! the store as soon as it is built; only its digest is kept by the parent.
//!
//! # Invariants
//!
//! - Every object goes through [`DagBuilder::write_object`], the single
//!   hash-then-write path. It checks `exists` before `put`, so an object
//!   already in the store is never written again.
//! - Links appear in production order: byte offset for chunks, iteration
//!   order for directory entries.
//! - A failure anywhere aborts the whole add. Objects written before the
//!   failure stay in the store.

use mdag_crypto::{Accumulator, ContentHasher};
use mdag_store::KvStore;
use mdag_types::Digest;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BuilderConfig;
use crate::error::{DagError, DagResult};
use crate::node::{DirNode, Node, NodeKind};
use crate::object::{Link, LinkKind, Object};

/// Counters kept by the object writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AddStats {
    /// Objects that were absent and got written.
    pub objects_written: u64,
    /// Objects skipped because the store already had them.
    pub objects_deduplicated: u64,
    /// Encoded bytes handed to the store.
    pub bytes_written: u64,
}

impl AddStats {
    /// Every object offered to the store, written or skipped.
    pub fn objects_seen(&self) -> u64 {
        self.objects_written + self.objects_deduplicated
    }

    /// Counters accumulated since `earlier` was taken.
    pub fn since(&self, earlier: &AddStats) -> AddStats {
        AddStats {
            objects_written: self.objects_written - earlier.objects_written,
            objects_deduplicated: self.objects_deduplicated - earlier.objects_deduplicated,
            bytes_written: self.bytes_written - earlier.bytes_written,
        }
    }
}

/// Encodes trees into a key-value store.
///
/// Generic over the store `S` and the hash primitive `A`. The accumulator is
/// wrapped in a [`ContentHasher`], so every object is hashed from a reset
/// state no matter what the accumulator held when it was handed over.
pub struct DagBuilder<S, A> {
    store: S,
    hasher: ContentHasher<A>,
    config: BuilderConfig,
    stats: AddStats,
}

impl<S: KvStore, A: Accumulator> DagBuilder<S, A> {
    /// Builder with the default 256 KiB chunk size.
    pub fn new(store: S, accumulator: A) -> Self {
        Self {
            store,
            hasher: ContentHasher::new(accumulator),
            config: BuilderConfig::default(),
            stats: AddStats::default(),
        }
    }

    /// Builder with explicit configuration.
    pub fn with_config(store: S, accumulator: A, config: BuilderConfig) -> DagResult<Self> {
        config.validate()?;
        Ok(Self {
            store,
            hasher: ContentHasher::new(accumulator),
            config,
            stats: AddStats::default(),
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Counters since the builder was created.
    pub fn stats(&self) -> AddStats {
        self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Encode a file or directory and return its root digest.
    pub fn add(&mut self, node: &dyn Node) -> DagResult<Digest> {
        let before = self.stats;
        let (root, _) = self.encode_node(node)?;
        let delta = self.stats.since(&before);
        info!(
            root = %root.short_hex(),
            name = node.name(),
            kind = %node.kind(),
            written = delta.objects_written,
            deduplicated = delta.objects_deduplicated,
            bytes = delta.bytes_written,
            "add complete"
        );
        Ok(root)
    }

    fn encode_node(&mut self, node: &dyn Node) -> DagResult<(Digest, LinkKind)> {
        match node.kind() {
            NodeKind::File => {
                let file = node.as_file().ok_or_else(|| invalid_kind(node))?;
                Ok((self.add_file(file.content())?, LinkKind::File))
            }
            NodeKind::Directory => {
                let dir = node.as_dir().ok_or_else(|| invalid_kind(node))?;
                Ok((self.add_dir(dir)?, LinkKind::Tree))
            }
        }
    }

    /// Encode file content.
    ///
    /// Content that fits in one chunk becomes a single blob and the blob's
    /// digest is the file's root. Longer content is split into chunk-size
    /// windows, each stored as a blob, and linked in order from a composite
    /// whose digest is the root.
    pub fn add_file(&mut self, content: &[u8]) -> DagResult<Digest> {
        let chunk_size = self.config.chunk_size;
        if content.len() <= chunk_size {
            return self.write_object(&Object::blob(content));
        }

        let mut file = Object::composite();
        for chunk in content.chunks(chunk_size) {
            let hash = self.write_object(&Object::blob(chunk))?;
            file.push_link(LinkKind::Blob, Link::chunk(hash, chunk.len() as u64));
        }
        debug!(chunks = file.links.len(), len = content.len(), "file split");
        self.write_object(&file)
    }

    /// Encode a directory: every child first, then the tree linking them.
    pub fn add_dir(&mut self, dir: &dyn DirNode) -> DagResult<Digest> {
        let mut tree = Object::composite();
        for child in dir.children() {
            let (hash, kind) = self.encode_node(child)?;
            tree.push_link(kind, Link::named(child.name(), hash, child.size()));
        }
        self.write_object(&tree)
    }

    /// Encode, hash and store one object unless the store already has it.
    ///
    /// Idempotent: offering the same object twice writes it once and
    /// returns the same digest both times.
    pub fn write_object(&mut self, object: &Object) -> DagResult<Digest> {
        let bytes = object.encode()?;
        let hash = self.hasher.digest(&bytes);

        if self.store.exists(&hash)? {
            self.stats.objects_deduplicated += 1;
            debug!(hash = %hash.short_hex(), "object already stored");
            return Ok(hash);
        }

        self.store.put(&hash, &bytes)?;
        self.stats.objects_written += 1;
        self.stats.bytes_written += bytes.len() as u64;
        debug!(
            hash = %hash.short_hex(),
            len = bytes.len(),
            links = object.links.len(),
            "object written"
        );
        Ok(hash)
    }
}

fn invalid_kind(node: &dyn Node) -> DagError {
    DagError::InvalidNodeKind {
        name: node.name().to_string(),
        declared: node.kind(),
    }
}

/// Encode `node` into `store` with a fresh default builder.
pub fn add<S: KvStore, A: Accumulator>(
    store: S,
    node: &dyn Node,
    accumulator: A,
) -> DagResult<Digest> {
    DagBuilder::new(store, accumulator).add(node)
}
