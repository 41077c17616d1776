//! Scheduler error type.

use thiserror::Error;

/// An error from [`run_pool`](crate::run_pool).
#[derive(Debug, Error)]
pub enum SchedulerError<E>
where
    E: std::error::Error + 'static,
{
    /// The worker pool could not be created.
    #[error("Failed to launch worker pool: {0}")]
    LaunchFailed(String),

    /// The bands do not tile rows from zero in index order, or their extent overflows.
    #[error("Band {band} does not continue the rows of the previous band")]
    InvalidBands {
        /// Position of the first offending band.
        band: usize,
    },

    /// The output buffer does not cover every band.
    #[error("Output buffer too small: expected at least {expected} bytes, got {actual}")]
    OutputTooSmall {
        /// Bytes needed by the bands.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },

    /// A band job returned an error.
    #[error("Band {band} failed: {source}")]
    Job {
        /// Index of the failing band.
        band: usize,
        /// The job's error.
        #[source]
        source: E,
    },
}
