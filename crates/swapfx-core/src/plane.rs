//! Single-channel image planes.
//!
//! Histogram matching works one channel at a time. A [`Plane`] is an owned
//! copy of one channel, so the matcher can mutate it freely without aliasing
//! the caller's batch.

use crate::{Error, MaskCoords, Result};

/// Owned `height x width` grid of samples from one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    data: Vec<f32>,
    height: usize,
    width: usize,
}

impl Plane {
    /// Wraps row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data` does not hold exactly
    /// `height * width` samples.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swapfx_core::Plane;
    ///
    /// let plane = Plane::from_vec(2, 2, vec![10.0, 20.0, 20.0, 30.0]).unwrap();
    /// assert_eq!(plane.get(1, 1), 30.0);
    /// assert!(Plane::from_vec(2, 2, vec![0.0; 3]).is_err());
    /// ```
    pub fn from_vec(height: usize, width: usize, data: Vec<f32>) -> Result<Self> {
        let expected = height * width;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    pub(crate) fn from_parts(height: usize, width: usize, data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Self {
            data,
            height,
            width,
        }
    }

    /// Plane height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Plane width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sample at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Sets the sample at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.width + col] = value;
    }

    /// Samples at the masked coordinates, in mask order.
    pub fn gather(&self, coords: &MaskCoords) -> Vec<f32> {
        coords.iter().map(|(r, c)| self.get(r, c)).collect()
    }

    /// Writes `values[k]` to the k-th masked coordinate.
    pub fn scatter(&mut self, coords: &MaskCoords, values: impl IntoIterator<Item = f32>) {
        for ((r, c), v) in coords.iter().zip(values) {
            self.set(r, c, v);
        }
    }

    /// Row-major samples.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
