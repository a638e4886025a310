//! Filesystem discovery and the on-disk store.
//!
//! Discovery properties:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Bounded streaming reads prevent memory exhaustion on oversized files
//! - Any traversal error aborts the scan; there is no per-file isolation

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::source::SourceStore;

/// Directories never descended into during discovery.
pub const SKIP_DIRS: &[&str] = &[".git", "target"];

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Find all files under `config.root` whose file name matches `name_pattern`,
/// sorted for deterministic processing order.
///
/// # Errors
/// Returns an error if an exclude pattern is malformed or if the traversal
/// fails (permission denied, filesystem loop); the scan is not resumed.
pub fn find_test_files(config: &ScanConfig, name_pattern: &Regex) -> Result<Vec<PathBuf>> {
    let mut exclude_patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        let pat = Pattern::new(pat_str)
            .with_context(|| format!("Invalid exclude glob pattern '{pat_str}'"))?;
        exclude_patterns.push(pat);
    }

    let mut files = Vec::new();
    for entry_result in WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = entry_result.with_context(|| {
            format!("Directory traversal failed under {}", config.root.display())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name_pattern.is_match(name) {
            continue;
        }
        if matches_exclude(entry.path(), &exclude_patterns) {
            tracing::debug!(path = %entry.path().display(), "excluded by pattern");
            continue;
        }

        files.push(entry.path().to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// On-disk store. Reads are bounded by the configured maximum file size.
#[derive(Debug, Clone)]
pub struct DiskStore {
    max_file_size: u64,
}

impl DiskStore {
    #[must_use]
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl SourceStore for DiskStore {
    /// Bounded streaming read: the size check and the read are one operation,
    /// so an oversized file is detected without buffering it whole.
    fn read(&self, path: &Path) -> Result<String> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        // Read at most max_file_size + 1 bytes to detect oversized files
        let mut buffer = Vec::new();
        file.take(self.max_file_size + 1)
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if buffer.len() as u64 > self.max_file_size {
            bail!(
                "{} exceeds the maximum file size of {} bytes",
                path.display(),
                self.max_file_size
            );
        }

        String::from_utf8(buffer)
            .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8", path.display()))
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}
