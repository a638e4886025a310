//! In-memory store for tests and embedding.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::source::SourceStore;

/// [`SourceStore`] backed by a `BTreeMap`; paths are used verbatim as keys.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    files: BTreeMap<PathBuf, String>,
}

impl MemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing any previous content at `path`.
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Current content of `path`, if present.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl SourceStore for MemStore {
    fn read(&self, path: &Path) -> Result<String> {
        match self.files.get(path) {
            Some(content) => Ok(content.clone()),
            None => bail!("No such file: {}", path.display()),
        }
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file_errors() {
        let store = MemStore::new();
        assert!(store.read(Path::new("nope.java")).is_err());
    }

    #[test]
    fn test_write_then_read() {
        let mut store = MemStore::new();
        store.write(Path::new("A.java"), "class A {}").unwrap();
        assert_eq!(store.read(Path::new("A.java")).unwrap(), "class A {}");
        assert_eq!(store.get(Path::new("A.java")), Some("class A {}"));
    }
}
