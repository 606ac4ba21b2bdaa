use thiserror::Error;

/// Errors returned by this crate.
///
/// The clustering scan itself is total; errors come from reading input,
/// writing results, or an explicit cancellation.
#[derive(Debug, Error)]
pub enum Error {
    /// An input row could not be turned into a point.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the input.
        line: usize,
        /// Human-readable explanation.
        reason: String,
    },

    /// Two input rows share the same identifier.
    #[error("duplicate point id {id} at line {line}")]
    DuplicateId {
        /// The repeated identifier, rendered as text.
        id: String,
        /// 1-based line number of the second occurrence.
        line: usize,
    },

    /// A path that must name a file does not.
    #[error("path {} has no file name", .0.display())]
    NoFileName(std::path::PathBuf),

    /// The scan was stopped through its cancellation flag.
    #[error("clustering cancelled after {visited} of {total} points")]
    Cancelled {
        /// Points visited by the main loop before stopping.
        visited: usize,
        /// Total number of points.
        total: usize,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
