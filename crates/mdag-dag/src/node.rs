//! The tree source consumed by the builder.
//!
//! A tree source is anything that can present files and directories. Each
//! [`Node`] reports its declared [`NodeKind`] and hands out the matching
//! capability through [`Node::as_file`] or [`Node::as_dir`]. The builder
//! trusts the capability, not the declaration: a node whose declared kind
//! has no matching capability is rejected with
//! [`DagError::InvalidNodeKind`](crate::DagError::InvalidNodeKind).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared kind of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Directory,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// A node in a file/directory tree.
pub trait Node {
    /// The kind this node claims to be.
    fn kind(&self) -> NodeKind;

    /// Entry name within the parent directory.
    fn name(&self) -> &str;

    /// Logical size in bytes, as reported to the parent's link.
    fn size(&self) -> u64;

    /// File capability, if this node can be read as a file.
    fn as_file(&self) -> Option<&dyn FileNode>;

    /// Directory capability, if this node can be listed as a directory.
    fn as_dir(&self) -> Option<&dyn DirNode>;
}

/// Byte content of a file node.
pub trait FileNode {
    /// The file's complete content.
    fn content(&self) -> &[u8];
}

/// Child listing of a directory node.
pub trait DirNode {
    /// A fresh forward iterator over the children.
    ///
    /// Every call starts from the first child and yields each child once, in
    /// the same order for a given directory. That order is hashed into the
    /// directory's tree object.
    fn children(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_>;
}
