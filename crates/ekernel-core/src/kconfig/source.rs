//! Config text source
//!
//! The parser only needs one capability from its surroundings: reading the
//! full text of a file. `ConfigSource` is that seam; `FsConfigSource` is the
//! production implementation and tests substitute in-memory sources.

use crate::errors::{KconfigError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Reads the full text of a config file
pub trait ConfigSource {
    /// Read `path` completely.
    ///
    /// # Errors
    /// Returns `KconfigError::Read` when the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

/// Reads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsConfigSource;

impl ConfigSource for FsConfigSource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| KconfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Serves fixed contents keyed by path
///
/// # Example
/// ```
/// use ekernel_core::kconfig::source::{ConfigSource, MemoryConfigSource};
/// use std::path::Path;
///
/// let source = MemoryConfigSource::new().with_file("/tmp/.config", "CONFIG_A=y\n");
/// assert_eq!(source.read_to_string(Path::new("/tmp/.config")).unwrap(), "CONFIG_A=y\n");
/// assert!(source.read_to_string(Path::new("/missing")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigSource {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl ConfigSource for MemoryConfigSource {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| KconfigError::Read {
                path: path.to_path_buf(),
                message: "No such file".to_string(),
            })
    }
}
