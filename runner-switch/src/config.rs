//! Scan configuration.

use std::path::PathBuf;

/// Options controlling directory discovery.
///
/// `root` is required; the remaining fields carry conservative defaults that
/// match how generated-test trees are laid out.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Root of the subtree to scan. Must exist and be a directory.
    pub root: PathBuf,
    /// Exclude patterns (glob format), matched against full paths and file names.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`**: following symlinks allows escaping the test
    /// tree and rewriting files outside it.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum size of a single source file in bytes (default: 10 MB).
    pub max_file_size: u64,
}

impl ScanConfig {
    /// Config rooted at `root` with default limits.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
            max_file_size: 10_485_760,
        }
    }
}
