//! Source-file access: discovery plus an injected read/write capability.
//!
//! The conversion drivers operate against the [`SourceStore`] trait so the
//! rewrite logic can be exercised over an in-memory file set. [`fs::DiskStore`]
//! is the production implementation; [`mem::MemStore`] backs tests and
//! embedding scenarios.

pub mod fs;
pub mod mem;

use std::path::Path;

use anyhow::Result;

/// Whole-file read/write capability over source files.
pub trait SourceStore {
    /// Read the full content of `path` as UTF-8 text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the content of `path` in place. Destructive: no backup is kept.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}
