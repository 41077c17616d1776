//! Error types for surface decode and encode.

use crate::registry::TextureFormat;
use texture_codec_common::allocate::AllocateError;
use texture_codec_scheduler::SchedulerError;
use thiserror::Error;

/// Errors returned by the texture codec API.
#[derive(Debug, Error)]
pub enum TextureCodecError {
    /// A buffer could not be allocated.
    #[error(transparent)]
    AllocationFailed(#[from] AllocateError),

    /// The format is known, but this operation is not implemented for it.
    #[error("Format {0} is known but not supported for this operation")]
    UnsupportedFormat(TextureFormat),

    /// A format name or numeric identifier did not match any known format.
    #[error("Unknown texture format: {0}")]
    UnknownFormat(String),

    /// The dimensions are not valid for the format.
    ///
    /// Compressed formats require a depth of 1; any format fails if the surface size
    /// overflows `usize`.
    #[error("Invalid dimensions {width}x{height}x{depth} for this format")]
    InvalidDimensions {
        /// Width in texels.
        width: usize,
        /// Height in texels.
        height: usize,
        /// Depth in texels.
        depth: usize,
    },

    /// The source buffer is shorter than the surface it describes.
    #[error("Buffer too small: expected at least {expected} bytes or texels, got {actual}")]
    BufferTooSmall {
        /// Minimum required length.
        expected: usize,
        /// Length that was provided.
        actual: usize,
    },

    /// The worker pool could not be started.
    #[error("Failed to launch worker pool: {0}")]
    SchedulerLaunchFailed(String),
}

impl From<SchedulerError<TextureCodecError>> for TextureCodecError {
    fn from(error: SchedulerError<TextureCodecError>) -> Self {
        match error {
            SchedulerError::LaunchFailed(reason) => TextureCodecError::SchedulerLaunchFailed(reason),
            invalid @ SchedulerError::InvalidBands { .. } => {
                TextureCodecError::SchedulerLaunchFailed(invalid.to_string())
            }
            SchedulerError::OutputTooSmall { expected, actual } => {
                TextureCodecError::BufferTooSmall { expected, actual }
            }
            SchedulerError::Job { source, .. } => source,
        }
    }
}
