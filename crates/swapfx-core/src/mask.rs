//! Masked pixel selection.
//!
//! A mask marks the facial region of a crop. Only the spatial pattern
//! matters: a pixel is selected when any channel of the mask is nonzero,
//! and each selected pixel is listed once, in row-major order.

/// Row-major list of `(row, col)` coordinates selected by a mask.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskCoords {
    coords: Vec<(usize, usize)>,
}

impl MaskCoords {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the selection from an interleaved `height x width x channels` mask.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swapfx_core::MaskCoords;
    ///
    /// // 2x2 single-channel mask with the diagonal set
    /// let mask = [1.0, 0.0, 0.0, 0.5];
    /// let coords = MaskCoords::from_interleaved(&mask, 2, 2, 1);
    /// assert_eq!(coords.as_slice(), &[(0, 0), (1, 1)]);
    /// ```
    pub fn from_interleaved(data: &[f32], height: usize, width: usize, channels: usize) -> Self {
        debug_assert_eq!(data.len(), height * width * channels);
        let coords = data
            .chunks_exact(channels)
            .enumerate()
            .filter(|(_, px)| px.iter().any(|&v| v != 0.0))
            .map(|(i, _)| (i / width, i % width))
            .collect();
        Self { coords }
    }

    /// Number of selected pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True when no pixel is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterates over selected `(row, col)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.coords.iter().copied()
    }

    /// Selected coordinates as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.coords
    }
}

impl FromIterator<(usize, usize)> for MaskCoords {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let coords = MaskCoords::from_interleaved(&[0.0; 12], 2, 2, 3);
        assert!(coords.is_empty());
        assert_eq!(coords.len(), 0);
    }

    #[test]
    fn test_any_channel_selects_pixel_once() {
        // 1x3, 3 channels: pixel 0 fully set, pixel 1 only blue, pixel 2 clear
        let mask = [1.0, 1.0, 1.0, 0.0, 0.0, 0.2, 0.0, 0.0, 0.0];
        let coords = MaskCoords::from_interleaved(&mask, 1, 3, 3);
        assert_eq!(coords.as_slice(), &[(0, 0), (0, 1)]);
    }

    #[test]
    fn test_negative_weights_count_as_nonzero() {
        let coords = MaskCoords::from_interleaved(&[0.0, -0.5], 1, 2, 1);
        assert_eq!(coords.as_slice(), &[(0, 1)]);
    }

    #[test]
    fn test_row_major_order() {
        let mask = [0.0, 1.0, 1.0, 1.0];
        let coords = MaskCoords::from_interleaved(&mask, 2, 2, 1);
        assert_eq!(coords.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (1, 1)]);
    }
}
