//! Reads a filesystem path into an in-memory tree.
//!
//! Directory entries are ordered by file name so the same directory always
//! yields the same tree. Only regular files and directories are loaded;
//! symlinks and special files are skipped with a warning.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use mdag_dag::MemNode;
use tracing::warn;
use walkdir::WalkDir;

pub fn load(path: &Path) -> anyhow::Result<MemNode> {
    let meta = fs::metadata(path).with_context(|| format!("reading {}", path.display()))?;
    let name = entry_name(path);
    if meta.is_file() {
        read_file(path, name)
    } else if meta.is_dir() {
        load_dir(path, name)
    } else {
        bail!("{} is neither a regular file nor a directory", path.display())
    }
}

fn load_dir(path: &Path, name: String) -> anyhow::Result<MemNode> {
    let mut children = Vec::new();
    let entries = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", path.display()))?;
        let child_name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type();
        if file_type.is_file() {
            children.push(read_file(entry.path(), child_name)?);
        } else if file_type.is_dir() {
            children.push(load_dir(entry.path(), child_name)?);
        } else {
            warn!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }
    Ok(MemNode::dir(name, children))
}

fn read_file(path: &Path, name: String) -> anyhow::Result<MemNode> {
    let content = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(MemNode::file(name, content))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
