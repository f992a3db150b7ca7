use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a force computation job.
///
/// Every variant is fatal: a job either completes for all workers or fails as a whole.
#[derive(Debug, Error)]
pub enum ForceError {
    /// An input table was not found before distribution started.
    #[error("input file \"{}\" not found", .0.display())]
    MissingInput(PathBuf),

    /// A table could not be read or written.
    #[error("i/o error on \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row has the wrong number of fields or a non-numeric value.
    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// The position and mass tables have different row counts.
    #[error("position table has {positions} rows but mass table has {masses}")]
    LengthMismatch { positions: usize, masses: usize },

    /// A configuration value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The job was configured with zero workers.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    /// A worker buffer violates the partition/transport contract.
    #[error("transport mismatch: {0}")]
    TransportMismatch(String),

    /// A worker panicked or its channel disconnected.
    #[error("worker {0} failed")]
    WorkerFailed(usize),
}

impl ForceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ForceError::Io { path: path.into(), source }
    }
}
