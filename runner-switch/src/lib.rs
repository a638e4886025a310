//! # runner-switch
//!
//! Rewrites directory trees of generated JUnit test sources in place,
//! switching the declared test-execution harness between the Randoop and
//! EvoSuite conventions.
//!
//! Certain subject programs require specific runner configurations for
//! correct execution and accurate mutation analysis: some Randoop-generated
//! suites yield no mutant coverage unless run with EvoSuite's runner, while
//! some EvoSuite-generated suites fail to load classes correctly unless
//! executed under a plain JUnit (Randoop-style) runner. The passes here
//! rewrite the harness annotations and class structure in both directions so
//! generated suites can be paired with whichever runner a subject needs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use runner_switch::{Direction, ScanConfig, convert_fs, output};
//!
//! let config = ScanConfig::new("subjects/jdom-1.0/randoop-tests");
//! let report = convert_fs(&config, Direction::RandoopToEvosuite).unwrap();
//! output::write_human(&report, &mut std::io::stdout().lock()).unwrap();
//! ```

mod config;
pub mod output;
mod report;
mod rewrite;
mod source;

pub use config::ScanConfig;
pub use report::ConvertReport;
pub use rewrite::classloader::{CLASS_LOADER_LABEL, set_class_loader};
pub use rewrite::evosuite::{RUNNER_ANNOTATION, RUNNER_IMPORTS, to_evosuite};
pub use rewrite::randoop::to_randoop;
pub use rewrite::{Direction, Rewrite};
pub use source::SourceStore;
pub use source::fs::DiskStore;
pub use source::mem::MemStore;

use std::path::PathBuf;

use anyhow::{Result, bail};
use regex::Regex;

use source::fs::find_test_files;

/// Convert every matching test file under `config.root` in place.
///
/// Files are selected by the naming scheme of the direction's *source*
/// convention (`RegressionTest<N>.java` for Randoop suites,
/// `<Class>_ESTest.java` for EvoSuite suites); everything else is left
/// untouched. Every selected file is rewritten and recorded as updated,
/// whether or not the pass changed its content.
///
/// # Errors
///
/// Returns an error if the root does not exist or is not a directory, or on
/// the first file that cannot be read or written; a single file's failure
/// aborts the whole run.
pub fn convert_fs(config: &ScanConfig, direction: Direction) -> Result<ConvertReport> {
    let files = discover(config, direction.source_file_pattern())?;
    let mut store = DiskStore::new(config.max_file_size);
    convert_files(&mut store, &files, direction)
}

/// Store-generic variant of [`convert_fs`]: drive the direction's rewrite
/// pass over an explicit file list.
///
/// # Errors
///
/// Returns an error on the first file the store fails to read or write.
pub fn convert_files(
    store: &mut dyn SourceStore,
    files: &[PathBuf],
    direction: Direction,
) -> Result<ConvertReport> {
    let mut report = ConvertReport::new(direction.label());
    for path in files {
        let content = store.read(path)?;
        let rewritten = match direction {
            Direction::RandoopToEvosuite => to_evosuite(&content),
            Direction::EvosuiteToRandoop => to_randoop(&content),
        };
        store.write(path, &rewritten)?;
        report.updated.push(path.clone());
    }
    Ok(report)
}

/// Force the `separateClassLoader` flag on every EvoSuite runner annotation
/// found in `*Test.java` files under `config.root`.
///
/// Unlike the conversion directions, only files whose annotations actually
/// change are rewritten; the rest are recorded as unchanged.
///
/// # Errors
///
/// Returns an error if the root does not exist or is not a directory, or on
/// the first file that cannot be read or written.
pub fn set_class_loader_fs(config: &ScanConfig, separate: bool) -> Result<ConvertReport> {
    let files = discover(config, &*rewrite::GENERATED_TEST_FILE)?;
    let mut store = DiskStore::new(config.max_file_size);
    set_class_loader_files(&mut store, &files, separate)
}

/// Store-generic variant of [`set_class_loader_fs`].
///
/// # Errors
///
/// Returns an error on the first file the store fails to read or write.
pub fn set_class_loader_files(
    store: &mut dyn SourceStore,
    files: &[PathBuf],
    separate: bool,
) -> Result<ConvertReport> {
    let mut report = ConvertReport::new(CLASS_LOADER_LABEL);
    for path in files {
        let content = store.read(path)?;
        let rewritten = set_class_loader(&content, separate);
        if rewritten.changed {
            store.write(path, &rewritten.content)?;
            report.updated.push(path.clone());
        } else {
            tracing::debug!(path = %path.display(), "no change needed");
            report.unchanged.push(path.clone());
        }
    }
    Ok(report)
}

fn discover(config: &ScanConfig, name_pattern: &Regex) -> Result<Vec<PathBuf>> {
    if !config.root.exists() {
        bail!("Test directory does not exist: {}", config.root.display());
    }
    if !config.root.is_dir() {
        bail!("Not a directory: {}", config.root.display());
    }
    find_test_files(config, name_pattern)
}
