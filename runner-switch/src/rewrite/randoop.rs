//! EvoSuite → Randoop pass.
//!
//! Drops the paired `@RunWith(EvoRunner.class)`/`@EvoRunnerParameters(...)`
//! annotation and unwraps the scaffolding base class, reverting a generated
//! suite to a plain JUnit class declaration. Needed for subjects that are
//! incompatible with EvoSuite instrumentation.

use std::sync::LazyLock;

use regex::Regex;

use super::{Lines, pattern};

static RUNNER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^@RunWith\(EvoRunner\.class\)\s*@EvoRunnerParameters\([^)]+\)"));

static SCAFFOLDING_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^public class (\w+_ESTest)\s+extends\s+\w+_ESTest_scaffolding\s*\{")
});

/// Scanner state. A matched runner annotation suppresses itself and arms a
/// single-line lookahead for the class declaration expected to follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    AwaitingClassLine,
}

/// Convert one EvoSuite-generated source file to a plain JUnit format.
///
/// The runner annotation line is suppressed from the output. If the next line
/// is a scaffolding-extending class declaration it is replaced with a plain
/// one; otherwise it is emitted unchanged and scanning resumes. The shape
/// mismatch is tolerated without a diagnostic.
#[must_use]
pub fn to_randoop(content: &str) -> String {
    let doc = Lines::parse(content);
    let mut out = Vec::with_capacity(doc.lines.len());
    let mut state = ScanState::Normal;

    for line in doc.lines {
        match state {
            ScanState::Normal => {
                if RUNNER_MARKER.is_match(line.trim()) {
                    state = ScanState::AwaitingClassLine;
                } else {
                    out.push(line);
                }
            }
            ScanState::AwaitingClassLine => {
                state = ScanState::Normal;
                if let Some(caps) = SCAFFOLDING_CLASS.captures(line.trim()) {
                    out.push(format!("public class {} {{", &caps[1]));
                } else {
                    out.push(line);
                }
            }
        }
    }

    Lines {
        lines: out,
        trailing_newline: doc.trailing_newline,
    }
    .render()
}
