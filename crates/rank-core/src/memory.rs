//! Resident memory of the current process.
//!
//! Runs `ps v -p <pid>` and reads the `RSS` column (KiB) from the first data
//! row. There is no fallback: a missing column or an unparsable row is an error.

use std::process::Command;

use crate::error::RankError;

/// Header name of the resident-set-size column.
const RSS_COLUMN: &str = "RSS";

/// Resident memory of this process in MiB.
///
/// # Errors
///
/// - [`RankError::Io`] if `ps` cannot be spawned
/// - [`RankError::MissingColumn`] / [`RankError::MalformedRow`] if its output
///   cannot be parsed
pub fn memory_usage() -> Result<f64, RankError> {
    let output = Command::new("ps")
        .arg("v")
        .arg("-p")
        .arg(std::process::id().to_string())
        .output()?;
    let text = String::from_utf8_lossy(&output.stdout);
    let mib = parse_rss_mib(&text)?;
    tracing::debug!(mib, "resident memory probed");
    Ok(mib)
}

/// Parse `ps v` style output and return the `RSS` column of the first data
/// row, converted from KiB to MiB.
pub fn parse_rss_mib(output: &str) -> Result<f64, RankError> {
    let mut lines = output.lines().filter(|l| !l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| RankError::MissingColumn(RSS_COLUMN.to_string()))?;
    let column = header
        .split_whitespace()
        .position(|name| name == RSS_COLUMN)
        .ok_or_else(|| RankError::MissingColumn(RSS_COLUMN.to_string()))?;

    let row = lines
        .next()
        .ok_or_else(|| RankError::MalformedRow("no data row".to_string()))?;
    let field = row
        .split_whitespace()
        .nth(column)
        .ok_or_else(|| RankError::MalformedRow(row.to_string()))?;
    let kib: f64 = field
        .parse()
        .map_err(|_| RankError::MalformedRow(row.to_string()))?;

    Ok(kib / 1024.0)
}
