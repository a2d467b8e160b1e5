//! In-memory tree source.

use crate::node::{DirNode, FileNode, Node, NodeKind};

/// A file or directory held entirely in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemNode {
    File(MemFile),
    Directory(MemDir),
}

impl MemNode {
    /// Build a file node.
    pub fn file(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::File(MemFile::new(name, content))
    }

    /// Build a directory node with children in the given order.
    pub fn dir(name: impl Into<String>, children: Vec<MemNode>) -> Self {
        Self::Directory(MemDir::new(name, children))
    }

    fn inner(&self) -> &dyn Node {
        match self {
            Self::File(file) => file as &dyn Node,
            Self::Directory(dir) => dir as &dyn Node,
        }
    }
}

impl Node for MemNode {
    fn kind(&self) -> NodeKind {
        self.inner().kind()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn size(&self) -> u64 {
        self.inner().size()
    }

    fn as_file(&self) -> Option<&dyn FileNode> {
        self.inner().as_file()
    }

    fn as_dir(&self) -> Option<&dyn DirNode> {
        self.inner().as_dir()
    }
}

/// In-memory file: a name and its bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemFile {
    name: String,
    content: Vec<u8>,
}

impl MemFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl Node for MemFile {
    fn kind(&self) -> NodeKind {
        NodeKind::File
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.content.len() as u64
    }

    fn as_file(&self) -> Option<&dyn FileNode> {
        Some(self)
    }

    fn as_dir(&self) -> Option<&dyn DirNode> {
        None
    }
}

impl FileNode for MemFile {
    fn content(&self) -> &[u8] {
        &self.content
    }
}

/// In-memory directory with ordered children.
///
/// The logical size is the sum of the children's logical sizes, so an empty
/// directory reports 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemDir {
    name: String,
    children: Vec<MemNode>,
}

impl MemDir {
    pub fn new(name: impl Into<String>, children: Vec<MemNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Append a child after the existing ones.
    pub fn push(&mut self, child: MemNode) {
        self.children.push(child);
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the directory has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node for MemDir {
    fn kind(&self) -> NodeKind {
        NodeKind::Directory
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(Node::size).sum()
    }

    fn as_file(&self) -> Option<&dyn FileNode> {
        None
    }

    fn as_dir(&self) -> Option<&dyn DirNode> {
        Some(self)
    }
}

impl DirNode for MemDir {
    fn children(&self) -> Box<dyn Iterator<Item = &dyn Node> + '_> {
        Box::new(self.children.iter().map(|child| child as &dyn Node))
    }
}
