//! The persisted object model and its canonical encoding.
//!
//! There is exactly one stored shape, [`Object`]: ordered [`Link`]s plus raw
//! data. A blob has no links and carries chunk bytes. A composite (a
//! multi-chunk file or a directory) has ordered links and carries one
//! 4-byte ASCII tag per link in `data`, naming what each link points at.
//!
//! Objects are encoded with bincode's default configuration: fixed-width
//! little-endian integers and `u64` length prefixes, fields in declaration
//! order. The same logical object therefore always encodes to the same
//! bytes, and the object's digest is taken over those bytes.

use std::fmt;

use mdag_types::Digest;
use serde::{Deserialize, Serialize};

use crate::error::{DagError, DagResult};

/// What a composite's link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// A raw chunk of a multi-chunk file.
    Blob,
    /// A file entry of a directory.
    File,
    /// A subdirectory entry of a directory.
    Tree,
}

impl LinkKind {
    /// Width of every tag in a composite's `data`.
    pub const TAG_LEN: usize = 4;

    /// The tag written into a composite's `data` for this kind.
    pub const fn tag(&self) -> &'static [u8; 4] {
        match self {
            Self::Blob => b"blob",
            Self::File => b"link",
            Self::Tree => b"tree",
        }
    }

    /// Parse a tag back into a kind.
    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"blob" => Some(Self::Blob),
            b"link" => Some(Self::File),
            b"tree" => Some(Self::Tree),
            _ => None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::File => write!(f, "link"),
            Self::Tree => write!(f, "tree"),
        }
    }
}

/// Pointer from one object to another.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Entry name; `None` for file chunks.
    pub name: Option<String>,
    /// Digest of the referenced object.
    pub hash: Digest,
    /// Chunk length, or the child's logical size for directory entries.
    pub size: u64,
}

impl Link {
    /// Unnamed link to a file chunk.
    pub fn chunk(hash: Digest, size: u64) -> Self {
        Self {
            name: None,
            hash,
            size,
        }
    }

    /// Named link to a directory entry.
    pub fn named(name: impl Into<String>, hash: Digest, size: u64) -> Self {
        Self {
            name: Some(name.into()),
            hash,
            size,
        }
    }
}

/// The unit of storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub links: Vec<Link>,
    pub data: Vec<u8>,
}

impl Object {
    /// Leaf object holding raw bytes.
    pub fn blob(data: impl Into<Vec<u8>>) -> Self {
        Self {
            links: Vec::new(),
            data: data.into(),
        }
    }

    /// Composite with no links yet. Also the shape of an empty directory.
    pub fn composite() -> Self {
        Self::default()
    }

    /// Append a link and its kind tag.
    pub fn push_link(&mut self, kind: LinkKind, link: Link) {
        self.links.push(link);
        self.data.extend_from_slice(kind.tag());
    }

    /// Returns `true` if the object has no links.
    pub fn is_leaf(&self) -> bool {
        self.links.is_empty()
    }

    /// Kinds of the links, read from the tag sequence in `data`.
    ///
    /// Returns `None` for leaves and for objects whose data is not exactly
    /// one known tag per link.
    pub fn link_kinds(&self) -> Option<Vec<LinkKind>> {
        if self.is_leaf() || self.data.len() != self.links.len() * LinkKind::TAG_LEN {
            return None;
        }
        self.data
            .chunks(LinkKind::TAG_LEN)
            .map(LinkKind::from_tag)
            .collect()
    }

    /// Sum of the link sizes.
    pub fn links_size(&self) -> u64 {
        self.links.iter().map(|l| l.size).sum()
    }

    /// Canonical byte encoding.
    pub fn encode(&self) -> DagResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DagError::Serialization(e.to_string()))
    }

    /// Decode canonical bytes.
    pub fn decode(bytes: &[u8]) -> DagResult<Self> {
        bincode::deserialize(bytes).map_err(|e| DagError::Serialization(e.to_string()))
    }
}
