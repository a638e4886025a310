//! Randoop → EvoSuite pass.
//!
//! Adds the EvoSuite runner imports and replaces the
//! `@FixMethodOrder(MethodSorters.NAME_ASCENDING)` ordering annotation with
//! the paired `@RunWith`/`@EvoRunnerParameters` annotation. Running Randoop
//! suites under the EvoSuite runner makes some mutation analysis tools report
//! coverage that is otherwise lost.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{Lines, pattern};

/// Imports required by the EvoSuite runner annotation, in canonical order.
pub const RUNNER_IMPORTS: [&str; 3] = [
    "import org.evosuite.runtime.EvoRunner;",
    "import org.evosuite.runtime.EvoRunnerParameters;",
    "import org.junit.runner.RunWith;",
];

/// Replacement for the ordering annotation. All runtime isolation flags are
/// enabled so the EvoSuite environment initializes fully.
pub const RUNNER_ANNOTATION: &str = concat!(
    "@RunWith(EvoRunner.class) ",
    "@EvoRunnerParameters(mockJVMNonDeterminism = true, ",
    "useVFS = true, useVNET = true, resetStaticState = true, ",
    "separateClassLoader = true)"
);

static FIX_METHOD_ORDER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"@FixMethodOrder\s*\(\s*MethodSorters\.NAME_ASCENDING\s*\)"));

/// Index just past the last `package`/`import` line, or 0 when the file has
/// no header block.
fn header_end(lines: &[String]) -> usize {
    let mut end = 0;
    for (i, line) in lines.iter().enumerate() {
        let stripped = line.trim();
        if stripped.starts_with("package") || stripped.starts_with("import") {
            end = i + 1;
        }
    }
    end
}

/// Convert one Randoop-generated source file to the EvoSuite runner format.
///
/// Missing runner imports are inserted as a block at the header boundary,
/// preserving the canonical order; imports already present are never
/// duplicated, so the pass is idempotent. Only the first ordering annotation
/// is replaced; a file without one simply keeps no runner marker.
#[must_use]
pub fn to_evosuite(content: &str) -> String {
    let mut doc = Lines::parse(content);
    let insert_at = header_end(&doc.lines);

    let existing: HashSet<String> = doc
        .lines
        .iter()
        .map(|line| line.trim())
        .filter(|stripped| stripped.starts_with("import"))
        .map(str::to_owned)
        .collect();

    for import in RUNNER_IMPORTS.iter().rev() {
        if !existing.contains(*import) {
            doc.lines.insert(insert_at, (*import).to_owned());
        }
    }

    for line in &mut doc.lines {
        if FIX_METHOD_ORDER.is_match(line) {
            *line = RUNNER_ANNOTATION.to_owned();
            break;
        }
    }

    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANDOOP_SUITE: &str = "\
package com.example;

import org.junit.FixMethodOrder;
import org.junit.Test;
import org.junit.runners.MethodSorters;

@FixMethodOrder(MethodSorters.NAME_ASCENDING)
public class RegressionTest0 {

    @Test
    public void test001() throws Throwable {
    }
}
";

    #[test]
    fn test_imports_inserted_after_header_in_order() {
        let converted = to_evosuite(RANDOOP_SUITE);
        let lines: Vec<&str> = converted.lines().collect();

        // The block lands right after the last original import line.
        assert_eq!(lines[4], "import org.junit.runners.MethodSorters;");
        assert_eq!(lines[5], RUNNER_IMPORTS[0]);
        assert_eq!(lines[6], RUNNER_IMPORTS[1]);
        assert_eq!(lines[7], RUNNER_IMPORTS[2]);
    }

    #[test]
    fn test_ordering_annotation_replaced_in_place() {
        let converted = to_evosuite(RANDOOP_SUITE);
        assert!(!converted.contains("@FixMethodOrder"));

        let lines: Vec<&str> = converted.lines().collect();
        let marker = lines
            .iter()
            .position(|l| *l == RUNNER_ANNOTATION)
            .expect("runner annotation present");
        // Original marker line index 6, shifted by the three inserted imports.
        assert_eq!(marker, 9);
        assert_eq!(lines[marker + 1], "public class RegressionTest0 {");
    }

    #[test]
    fn test_idempotent_on_imports() {
        let once = to_evosuite(RANDOOP_SUITE);
        let twice = to_evosuite(&once);
        assert_eq!(once, twice);
        for import in RUNNER_IMPORTS {
            assert_eq!(twice.matches(import).count(), 1);
        }
    }

    #[test]
    fn test_partially_present_imports_not_duplicated() {
        let input = "\
import org.junit.runner.RunWith;
import org.junit.Test;

@FixMethodOrder(MethodSorters.NAME_ASCENDING)
public class RegressionTest3 {
}
";
        let converted = to_evosuite(input);
        assert_eq!(converted.matches(RUNNER_IMPORTS[2]).count(), 1);
        assert_eq!(converted.matches(RUNNER_IMPORTS[0]).count(), 1);
        assert_eq!(converted.matches(RUNNER_IMPORTS[1]).count(), 1);
    }

    #[test]
    fn test_no_header_inserts_at_file_start() {
        let input = "@FixMethodOrder(MethodSorters.NAME_ASCENDING)\npublic class RegressionTest1 {\n}\n";
        let converted = to_evosuite(input);
        let lines: Vec<&str> = converted.lines().collect();
        assert_eq!(lines[0], RUNNER_IMPORTS[0]);
        assert_eq!(lines[1], RUNNER_IMPORTS[1]);
        assert_eq!(lines[2], RUNNER_IMPORTS[2]);
        assert_eq!(lines[3], RUNNER_ANNOTATION);
    }

    #[test]
    fn test_only_first_ordering_annotation_replaced() {
        let input = "\
@FixMethodOrder(MethodSorters.NAME_ASCENDING)
class A {}
@FixMethodOrder(MethodSorters.NAME_ASCENDING)
class B {}
";
        let converted = to_evosuite(input);
        assert_eq!(converted.matches("@FixMethodOrder").count(), 1);
        assert_eq!(converted.matches(RUNNER_ANNOTATION).count(), 1);
    }

    #[test]
    fn test_missing_marker_tolerated() {
        let input = "package p;\n\npublic class RegressionTest0 {\n}\n";
        let converted = to_evosuite(input);
        assert!(!converted.contains("@RunWith"));
        for import in RUNNER_IMPORTS {
            assert!(converted.contains(import));
        }
    }

    #[test]
    fn test_flexible_whitespace_in_marker() {
        let input = "@FixMethodOrder ( MethodSorters.NAME_ASCENDING )\nclass RegressionTest0 {}\n";
        let converted = to_evosuite(input);
        assert!(converted.contains(RUNNER_ANNOTATION));
        assert!(!converted.contains("@FixMethodOrder"));
    }
}
