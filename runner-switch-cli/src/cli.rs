//! Command-line surface.
//!
//! The default action is a runner conversion over a test directory, selected
//! with the required `--mode` flag. The `classloader` subcommand edits the
//! `separateClassLoader` parameter on existing EvoSuite annotations instead.
//! Only the top-level [`run`] handles errors; command dispatch returns
//! `Result` and never exits the process.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use runner_switch::{Direction, ScanConfig, convert_fs, output, set_class_loader_fs};

/// Conversion direction, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Add EvoSuite runner annotations to Randoop regression suites
    RandoopToEvosuite,
    /// Strip EvoSuite runner annotations down to plain JUnit
    EvosuiteToRandoop,
}

impl From<Mode> for Direction {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::RandoopToEvosuite => Self::RandoopToEvosuite,
            Mode::EvosuiteToRandoop => Self::EvosuiteToRandoop,
        }
    }
}

/// Convert test runners between Randoop and EvoSuite.
#[derive(Debug, Parser)]
#[command(name = "runner-switch", version)]
#[command(about = "Convert test runners between Randoop and EvoSuite")]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the test directory
    #[arg(value_name = "TEST_DIR", required = true)]
    pub test_dir: Option<PathBuf>,

    /// Conversion direction
    #[arg(long, value_enum, required = true)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Force the separateClassLoader flag on EvoSuite runner annotations
    Classloader {
        /// Path to the test directory
        #[arg(value_name = "TEST_DIR")]
        test_dir: PathBuf,

        /// Desired flag value
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        separate_class_loader: bool,
    },
}

/// Parse the process arguments and run the selected operation.
///
/// # Errors
///
/// Returns an error if the scan or any file rewrite fails.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Run a parsed invocation, writing per-file lines to stdout.
///
/// # Errors
///
/// Returns an error if the scan or any file rewrite fails.
pub fn execute(cli: Cli) -> Result<()> {
    let report = match cli.command {
        Some(Command::Classloader {
            test_dir,
            separate_class_loader,
        }) => set_class_loader_fs(&ScanConfig::new(test_dir), separate_class_loader)?,
        None => {
            let (Some(test_dir), Some(mode)) = (cli.test_dir, cli.mode) else {
                unreachable!("clap enforces TEST_DIR and --mode when no subcommand is given");
            };
            convert_fs(&ScanConfig::new(test_dir), mode.into())?
        }
    };
    output::write_human(&report, &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert_invocation() {
        let cli = Cli::try_parse_from(["runner-switch", "tests/", "--mode", "randoop-to-evosuite"])
            .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.test_dir, Some(PathBuf::from("tests/")));
        assert_eq!(cli.mode, Some(Mode::RandoopToEvosuite));
    }

    #[test]
    fn test_mode_is_required() {
        let result = Cli::try_parse_from(["runner-switch", "tests/"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_test_dir_is_required() {
        let result = Cli::try_parse_from(["runner-switch", "--mode", "evosuite-to-randoop"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = Cli::try_parse_from(["runner-switch", "tests/", "--mode", "sideways"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_classloader_subcommand_defaults_to_true() {
        let cli = Cli::try_parse_from(["runner-switch", "classloader", "tests/"]).unwrap();
        match cli.command {
            Some(Command::Classloader {
                test_dir,
                separate_class_loader,
            }) => {
                assert_eq!(test_dir, PathBuf::from("tests/"));
                assert!(separate_class_loader);
            }
            _ => panic!("expected classloader subcommand"),
        }
    }

    #[test]
    fn test_classloader_subcommand_accepts_false() {
        let cli = Cli::try_parse_from([
            "runner-switch",
            "classloader",
            "tests/",
            "--separate-class-loader",
            "false",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Classloader {
                separate_class_loader,
                ..
            }) => assert!(!separate_class_loader),
            _ => panic!("expected classloader subcommand"),
        }
    }
}
