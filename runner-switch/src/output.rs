//! Output formatting for conversion reports.
//!
//! Per-file lines are the only success signal: a file with no line did not
//! match the active naming pattern. There is deliberately no summary block
//! and no validation pass confirming a marker was actually replaced.

use std::io::Write;

use crate::report::ConvertReport;

/// Write one human-readable line per processed file.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ConvertReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for path in &report.updated {
        writeln!(writer, "[{}] Updated: {}", report.label, path.display())?;
    }
    for path in &report.unchanged {
        writeln!(
            writer,
            "[{}] No change needed: {}",
            report.label,
            path.display()
        )?;
    }
    Ok(())
}

/// Write the report as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ConvertReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}
