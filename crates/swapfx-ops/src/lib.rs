//! # swapfx-ops
//!
//! Color adjustment operations applied to swapped face crops before they
//! are composited back onto the original frame.
//!
//! # Modules
//!
//! - [`hist_match`] - Masked per-channel histogram matching
//! - [`adjustment`] - The [`Adjustment`] seam used by the hosting pipeline
//! - [`config`] - Serializable settings for the matcher
//!
//! # Example
//!
//! ```rust
//! use swapfx_core::ImageBatch;
//! use swapfx_ops::{HistMatchConfig, HistogramMatcher};
//!
//! let original = ImageBatch::new(1, 8, 8, 3);
//! let swapped = ImageBatch::new(1, 8, 8, 3);
//! let mask = ImageBatch::new(1, 8, 8, 1);
//!
//! let matcher = HistogramMatcher::new(HistMatchConfig::new(0.99).unwrap());
//! let adjusted = matcher.process(&original, &swapped, &mask).unwrap();
//! assert_eq!(adjusted.shape(), swapped.shape());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjustment;
pub mod config;
pub mod hist_match;

pub use adjustment::Adjustment;
pub use config::HistMatchConfig;
pub use error::{OpsError, OpsResult};
pub use hist_match::{hist_match, HistogramMatcher};
