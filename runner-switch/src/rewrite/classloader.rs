//! Flag editor for existing EvoSuite runner annotations.
//!
//! Some mutation tools misbehave when generated suites run in a separate
//! class loader; this pass forces the `separateClassLoader` parameter to a
//! chosen value across an already-annotated test tree.

use std::sync::LazyLock;

use regex::Regex;

use super::{Lines, Rewrite, pattern};

/// Tag identifying the flag editor in per-file output lines.
pub const CLASS_LOADER_LABEL: &str = "EvoRunner Flags";

static RUNNER_PARAMETERS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"@RunWith\(EvoRunner\.class\)\s+@EvoRunnerParameters\((.*?)\)"));

static SEPARATE_CLASS_LOADER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"separateClassLoader\s*=\s*(true|false)"));

/// Set the `separateClassLoader` flag on every runner annotation line.
///
/// A flag already present with a different value is rewritten; a missing flag
/// is appended to the parameter list. `changed` is true only when some value
/// was added or altered. Matched lines are rebuilt from the captured
/// parameter list, so leading indentation is dropped; the annotations sit at
/// column zero in generated suites.
#[must_use]
pub fn set_class_loader(content: &str, separate: bool) -> Rewrite {
    let value = if separate { "true" } else { "false" };
    let mut changed = false;

    let mut doc = Lines::parse(content);
    for line in &mut doc.lines {
        let Some(caps) = RUNNER_PARAMETERS.captures(line) else {
            continue;
        };
        let params = caps[1].to_owned();

        let params = match SEPARATE_CLASS_LOADER.captures(&params) {
            Some(flag) if &flag[1] == value => params.clone(),
            Some(_) => {
                changed = true;
                SEPARATE_CLASS_LOADER
                    .replace(&params, format!("separateClassLoader = {value}"))
                    .into_owned()
            }
            None => {
                changed = true;
                format!("{params}, separateClassLoader = {value}")
            }
        };

        *line = format!("@RunWith(EvoRunner.class) @EvoRunnerParameters({params})");
    }

    Rewrite {
        content: doc.render(),
        changed,
    }
}
