//! Conversion passes between the Randoop and EvoSuite runner conventions.
//!
//! All matching is line-local: an annotation or class declaration split across
//! physical lines is not recognized, and such a file is left partially
//! converted without a diagnostic. The passes are pure content transforms so
//! they can be tested without touching a real directory tree.

pub mod classloader;
pub mod evosuite;
pub mod randoop;

use std::sync::LazyLock;

use regex::Regex;

/// Conversion direction between the two runner conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add EvoSuite runner annotations to Randoop-generated suites.
    RandoopToEvosuite,
    /// Strip EvoSuite runner annotations down to plain JUnit.
    EvosuiteToRandoop,
}

impl Direction {
    /// Tag identifying this conversion in per-file output lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RandoopToEvosuite => "EvoSuite Runner",
            Self::EvosuiteToRandoop => "Randoop Runner",
        }
    }

    /// File-name pattern selecting the source files this direction rewrites.
    ///
    /// Each direction selects files named by its *source* convention; files
    /// not matching the active pattern are never touched.
    #[must_use]
    pub fn source_file_pattern(self) -> &'static Regex {
        match self {
            Self::RandoopToEvosuite => &*RANDOOP_TEST_FILE,
            Self::EvosuiteToRandoop => &*EVOSUITE_TEST_FILE,
        }
    }
}

/// Randoop regression suites use a numeric suffix naming scheme.
pub static RANDOOP_TEST_FILE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^RegressionTest\d+\.java$"));

/// EvoSuite suites use a fixed `_ESTest` suffix; scaffolding files do not match.
pub static EVOSUITE_TEST_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"_ESTest\.java$"));

/// Any generated test file, regardless of convention (flag editor scope).
pub static GENERATED_TEST_FILE: LazyLock<Regex> = LazyLock::new(|| pattern(r"Test\.java$"));

/// Outcome of a content rewrite: the new content plus whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten file content.
    pub content: String,
    /// Whether the content differs semantically from the input.
    pub changed: bool,
}

/// Compile a fixed pattern literal, panicking on invalid syntax. Every call
/// site is a string constant evaluated once at first use.
pub(crate) fn pattern(re: &str) -> Regex {
    match Regex::new(re) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid pattern {re:?}: {err}"),
    }
}

/// A source file as ordered lines, remembering whether the original content
/// ended with a newline so a rewrite preserves it.
#[derive(Debug, Clone)]
pub(crate) struct Lines {
    pub lines: Vec<String>,
    pub trailing_newline: bool,
}

impl Lines {
    pub fn parse(content: &str) -> Self {
        let trailing_newline = content.ends_with('\n');
        let mut lines: Vec<String> = content.split('\n').map(str::to_owned).collect();
        if trailing_newline {
            lines.pop();
        }
        Self {
            lines,
            trailing_newline,
        }
    }

    pub fn render(self) -> String {
        let mut content = self.lines.join("\n");
        if self.trailing_newline {
            content.push('\n');
        }
        content
    }
}
