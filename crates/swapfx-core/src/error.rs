//! Error types for swapfx-core operations.
//!
//! Covers failures when building batches from raw buffers and when
//! checking that several batches describe the same frames.
//!
//! # Usage
//!
//! ```rust
//! use swapfx_core::{Error, ImageBatch};
//!
//! let err = ImageBatch::from_data(1, 2, 2, 3, vec![0.0; 5]).unwrap_err();
//! assert!(matches!(err, Error::BufferSize { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or addressing image batches.
#[derive(Debug, Error)]
pub enum Error {
    /// A dimension is zero or the total sample count overflows.
    #[error("invalid dimensions: {len}x{height}x{width}x{channels} ({reason})")]
    InvalidDimensions {
        /// Number of items
        len: usize,
        /// Image height
        height: usize,
        /// Image width
        width: usize,
        /// Channels per pixel
        channels: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Sample buffer length does not match the requested dimensions.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSize {
        /// Expected sample count
        expected: usize,
        /// Actual sample count
        got: usize,
    },

    /// Two batches that must describe the same frames disagree in shape.
    #[error("{what} shape mismatch: {a} vs {b}")]
    ShapeMismatch {
        /// Which pair of batches was compared
        what: String,
        /// First shape
        a: String,
        /// Second shape
        b: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        (len, height, width, channels): (usize, usize, usize, usize),
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            len,
            height,
            width,
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(
        what: impl Into<String>,
        a: impl std::fmt::Display,
        b: impl std::fmt::Display,
    ) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}
