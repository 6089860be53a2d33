//! # swapfx-math
//!
//! Numeric building blocks for exact, bin-free histogram matching.
//!
//! - [`interp`] - Scalar interpolation and piecewise-linear table lookup
//! - [`stats`] - Distinct-value histograms and cumulative sums
//!
//! # Example
//!
//! ```rust
//! use swapfx_math::{cumsum, interp, unique};
//!
//! let hist = unique(&[3.0, 1.0, 1.0, 2.0]);
//! assert_eq!(hist.values, vec![1.0, 2.0, 3.0]);
//! assert_eq!(cumsum(&hist.counts), vec![2.0, 3.0, 4.0]);
//!
//! assert_eq!(interp(0.5, &[0.0, 1.0], &[10.0, 20.0]), 15.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod interp;
pub mod stats;

pub use interp::{interp, interp_slice, inverse_lerp};
pub use stats::{cumsum, unique, unique_counts, Unique};
