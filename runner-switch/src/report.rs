//! Conversion run reports.

use std::path::PathBuf;

use serde::Serialize;

/// Result of one conversion or flag-edit run.
///
/// `updated` and `unchanged` are in processing order. The conversion
/// directions rewrite every matched file and record it as updated;
/// `unchanged` is populated only by the flag editor. There is no further
/// success signal: a file absent from both lists did not match the active
/// naming pattern.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ConvertReport {
    /// Tag identifying which operation ran (e.g. "EvoSuite Runner").
    pub label: &'static str,
    /// Files rewritten in place.
    pub updated: Vec<PathBuf>,
    /// Files that matched the naming pattern but needed no rewrite.
    pub unchanged: Vec<PathBuf>,
}

impl ConvertReport {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            updated: Vec::new(),
            unchanged: Vec::new(),
        }
    }

    /// Total number of files that matched the active naming pattern.
    #[must_use]
    pub fn files_matched(&self) -> usize {
        self.updated.len() + self.unchanged.len()
    }
}
