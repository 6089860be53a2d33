//! Batches of float images.
//!
//! An [`ImageBatch`] holds `len` images of identical size in one contiguous
//! buffer, laid out the way the hosting pipeline hands frames over:
//!
//! ```text
//! [item 0: row 0: R G B R G B ...][row 1 ...] ... [item 1: ...]
//! ```
//!
//! Dimensions are validated once at construction so per-pixel access can
//! index without further checks.
//!
//! # Usage
//!
//! ```rust
//! use swapfx_core::ImageBatch;
//!
//! let mut batch = ImageBatch::new(2, 64, 64, 3);
//! batch.set_sample(1, 10, 20, 2, 0.5);
//! assert_eq!(batch.sample(1, 10, 20, 2), 0.5);
//!
//! let blue = batch.plane(1, 2);
//! assert_eq!(blue.get(10, 20), 0.5);
//! ```

use std::fmt;

use crate::{Error, MaskCoords, Plane, Result};

/// Dimensions of an [`ImageBatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchShape {
    /// Number of images.
    pub len: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Image width in pixels.
    pub width: usize,
    /// Channels per pixel.
    pub channels: usize,
}

impl BatchShape {
    /// `(height, width)` of each item.
    #[inline]
    pub fn spatial(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Samples per item.
    #[inline]
    pub fn item_len(&self) -> usize {
        self.height * self.width * self.channels
    }

    /// Checks that `other` has the same length and spatial size.
    ///
    /// Channel counts are not compared: a mask may carry one channel while
    /// the images carry three.
    pub fn ensure_congruent(&self, other: &BatchShape, what: &str) -> Result<()> {
        if self.len != other.len || self.spatial() != other.spatial() {
            return Err(Error::shape_mismatch(what, self, other));
        }
        Ok(())
    }

    fn checked_total(&self) -> Result<usize> {
        let dims = (self.len, self.height, self.width, self.channels);
        if self.height == 0 || self.width == 0 || self.channels == 0 {
            return Err(Error::invalid_dimensions(
                dims,
                "height, width, and channels must be > 0",
            ));
        }
        self.len
            .checked_mul(self.height)
            .and_then(|v| v.checked_mul(self.width))
            .and_then(|v| v.checked_mul(self.channels))
            .ok_or_else(|| Error::invalid_dimensions(dims, "batch dimensions overflow"))
    }
}

impl fmt::Display for BatchShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}x{}",
            self.len, self.height, self.width, self.channels
        )
    }
}

/// Owned batch of `len` float images sharing one size and channel count.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBatch {
    data: Vec<f32>,
    shape: BatchShape,
}

impl ImageBatch {
    /// Creates a zero-filled batch.
    ///
    /// # Panics
    ///
    /// Panics if height, width or channels is zero, or the sample count
    /// overflows `usize`. Use [`from_data`](Self::from_data) to get an error instead.
    pub fn new(len: usize, height: usize, width: usize, channels: usize) -> Self {
        let shape = BatchShape {
            len,
            height,
            width,
            channels,
        };
        let total = match shape.checked_total() {
            Ok(total) => total,
            Err(err) => panic!("ImageBatch::new: {err}"),
        };
        Self {
            data: vec![0.0; total],
            shape,
        }
    }

    /// Creates a batch from existing samples.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if height, width or channels is zero,
    ///   or the sample count overflows.
    /// - [`Error::BufferSize`] if `data` does not hold exactly
    ///   `len * height * width * channels` samples.
    pub fn from_data(
        len: usize,
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self> {
        let shape = BatchShape {
            len,
            height,
            width,
            channels,
        };
        let expected = shape.checked_total()?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, shape })
    }

    /// Creates a batch from one interleaved buffer per image.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swapfx_core::ImageBatch;
    ///
    /// let batch = ImageBatch::from_items(1, 2, 1, vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
    /// assert_eq!(batch.len(), 2);
    /// assert_eq!(batch.sample(1, 0, 1, 0), 0.4);
    /// ```
    pub fn from_items(
        height: usize,
        width: usize,
        channels: usize,
        items: Vec<Vec<f32>>,
    ) -> Result<Self> {
        let shape = BatchShape {
            len: items.len(),
            height,
            width,
            channels,
        };
        let total = shape.checked_total()?;
        let item_len = shape.item_len();
        let mut data = Vec::with_capacity(total);
        for item in items {
            if item.len() != item_len {
                return Err(Error::BufferSize {
                    expected: item_len,
                    got: item.len(),
                });
            }
            data.extend_from_slice(&item);
        }
        Ok(Self { data, shape })
    }

    /// Batch dimensions.
    #[inline]
    pub fn shape(&self) -> BatchShape {
        self.shape
    }

    /// Number of images.
    #[inline]
    pub fn len(&self) -> usize {
        self.shape.len
    }

    /// True when the batch holds no images.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.len == 0
    }

    /// Image height.
    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height
    }

    /// Image width.
    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width
    }

    /// Channels per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.shape.channels
    }

    /// Interleaved samples of image `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn item(&self, index: usize) -> &[f32] {
        let n = self.shape.item_len();
        &self.data[index * n..(index + 1) * n]
    }

    /// Mutable interleaved samples of image `index`.
    pub fn item_mut(&mut self, index: usize) -> &mut [f32] {
        let n = self.shape.item_len();
        &mut self.data[index * n..(index + 1) * n]
    }

    /// Iterates over the images in order.
    pub fn items(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.shape.item_len())
    }

    /// Mutable iterator over the images in order.
    pub fn items_mut(&mut self) -> std::slice::ChunksExactMut<'_, f32> {
        let n = self.shape.item_len();
        self.data.chunks_exact_mut(n)
    }

    #[inline]
    fn offset(&self, index: usize, row: usize, col: usize, channel: usize) -> usize {
        let s = &self.shape;
        ((index * s.height + row) * s.width + col) * s.channels + channel
    }

    /// Sample at `(index, row, col, channel)`.
    #[inline]
    pub fn sample(&self, index: usize, row: usize, col: usize, channel: usize) -> f32 {
        self.data[self.offset(index, row, col, channel)]
    }

    /// Sets the sample at `(index, row, col, channel)`.
    #[inline]
    pub fn set_sample(&mut self, index: usize, row: usize, col: usize, channel: usize, value: f32) {
        let off = self.offset(index, row, col, channel);
        self.data[off] = value;
    }

    /// Copies one channel of image `index` into a [`Plane`].
    pub fn plane(&self, index: usize, channel: usize) -> Plane {
        let s = self.shape;
        let data = extract_channel(self.item(index), s.channels, channel);
        Plane::from_parts(s.height, s.width, data)
    }

    /// Coordinates selected by image `index` when this batch is a mask.
    pub fn mask_coords(&self, index: usize) -> MaskCoords {
        let s = self.shape;
        MaskCoords::from_interleaved(self.item(index), s.height, s.width, s.channels)
    }

    /// Full sample buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable full sample buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Copies channel `channel` out of one interleaved image.
pub fn extract_channel(item: &[f32], channels: usize, channel: usize) -> Vec<f32> {
    item.iter().skip(channel).step_by(channels).copied().collect()
}

/// Writes `plane` into channel `channel` of one interleaved image.
pub fn insert_channel(item: &mut [f32], channels: usize, channel: usize, plane: &Plane) {
    for (dst, &src) in item
        .iter_mut()
        .skip(channel)
        .step_by(channels)
        .zip(plane.as_slice())
    {
        *dst = src;
    }
}
