use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdag_types::Digest;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// Loose-object store on the local filesystem.
///
/// Each value lives in its own file named by the hex digest, fanned out by
/// the first byte:
///
/// ```text
/// <root>/ab/cdef0123...   (digest abcdef0123...)
/// ```
///
/// Writes go to a temporary file in the fan-out directory and are renamed
/// into place, so a reader never observes a partially written value.
#[derive(Debug)]
pub struct FsKvStore {
    root: PathBuf,
    fsync: bool,
}

impl FsKvStore {
    /// Open (or create) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root, fsync: false })
    }

    /// `fsync` every value before it is renamed into place.
    pub fn with_fsync(mut self, fsync: bool) -> Self {
        self.fsync = fsync;
        self
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds (or would hold) `key`.
    pub fn path_for(&self, key: &Digest) -> PathBuf {
        let hex = key.to_hex();
        if hex.len() <= 2 {
            return self.root.join(hex);
        }
        let (fanout, rest) = hex.split_at(2);
        self.root.join(fanout).join(rest)
    }

    /// Read the value stored under `key`. Returns `Ok(None)` if absent.
    pub fn get(&self, key: &Digest) -> StoreResult<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl KvStore for FsKvStore {
    fn exists(&self, key: &Digest) -> StoreResult<bool> {
        if key.is_empty() {
            return Ok(false);
        }
        Ok(self.path_for(key).try_exists()?)
    }

    fn put(&self, key: &Digest, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let path = self.path_for(key);
        if path.try_exists()? {
            return Ok(());
        }
        let dir = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(value)?;
        if self.fsync {
            tmp.as_file().sync_all()?;
        }
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        debug!(key = %key.short_hex(), len = value.len(), "loose object written");
        Ok(())
    }
}
