//! Typed error definitions for the ranked-container library.
//!
//! Provides [`RankError`] for the recoverable failure modes: bad sort-order
//! names, selection axes beyond a record, and memory-probe failures. All
//! variants implement `std::error::Error` via `thiserror`, so they integrate
//! with `anyhow::Result` in binaries.
//!
//! Programmer errors (empty-container `minimum()`, foreign handles) are not
//! represented here; those panic.

use thiserror::Error;

/// Domain-specific errors for the ranked-container library.
#[derive(Debug, Error)]
pub enum RankError {
    /// A sort direction other than ascending / descending was requested.
    #[error("sorting order {0:?} is not implemented")]
    UnsupportedOrder(String),

    /// A selection axis is beyond the width of a record.
    #[error("axis {axis} out of range for record of length {len}")]
    AxisOutOfRange { axis: usize, len: usize },

    /// The process-status header has no column with the expected name.
    #[error("column {0:?} not found in process status header")]
    MissingColumn(String),

    /// The process-status output has no usable data row.
    #[error("malformed process status row: {0}")]
    MalformedRow(String),

    /// Spawning or reading the process-status utility failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = RankError::UnsupportedOrder("sideways".into());
        assert_eq!(e.to_string(), "sorting order \"sideways\" is not implemented");

        let e = RankError::AxisOutOfRange { axis: 3, len: 2 };
        assert_eq!(e.to_string(), "axis 3 out of range for record of length 2");
    }

    #[test]
    fn io_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "ps");
        let e: RankError = io.into();
        assert!(matches!(e, RankError::Io(_)));
    }
}
