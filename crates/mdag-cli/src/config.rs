use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use mdag_dag::BuilderConfig;
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "mdag.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MdagConfig {
    pub store: StoreConfig,
    pub builder: BuilderConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root of the loose-object directory.
    pub path: PathBuf,
    /// `fsync` each object before it becomes visible.
    pub fsync: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".mdag/objects"),
            fsync: false,
        }
    }
}

impl MdagConfig {
    /// Load `explicit` if given, else `./mdag.toml` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Command-line flags win over file values.
    pub fn apply_overrides(&mut self, store: Option<PathBuf>, chunk_size: Option<usize>) {
        if let Some(path) = store {
            self.store.path = path;
        }
        if let Some(size) = chunk_size {
            self.builder.chunk_size = size;
        }
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }
}
