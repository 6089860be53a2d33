//! # swapfx-core
//!
//! Core types for color adjustment of swapped face crops.
//!
//! - [`ImageBatch`] - Owned batch of equally sized float images (NHWC layout)
//! - [`Plane`] - A single channel of one image
//! - [`MaskCoords`] - Pixel coordinates selected by a mask
//! - [`BatchShape`] - Batch dimensions and congruence checks
//!
//! ## Crate Structure
//!
//! ```text
//! swapfx-core (this crate)
//!    ^
//!    |
//!    +-- swapfx-math (interpolation, cumulative sums, unique values)
//!    +-- swapfx-ops (histogram matching)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod error;
pub mod mask;
pub mod plane;

pub use batch::{BatchShape, ImageBatch};
pub use error::{Error, Result};
pub use mask::MaskCoords;
pub use plane::Plane;
