//! Masked histogram matching.
//!
//! Shifts the color distribution of a swapped face crop toward the original
//! crop, channel by channel, using only pixels inside the face mask.
//!
//! # Algorithm
//!
//! For each channel, over the masked pixels only:
//!
//! ```text
//! s_values, s_counts = unique(new)        t_values, t_counts = unique(old)
//! s_quants = threshold * cumsum(s_counts) / total
//! t_quants =             cumsum(t_counts) / total
//! new[k]   = interp(s_quants[bin(new[k])], t_quants -> t_values)
//! ```
//!
//! Histograms are built over distinct sample values rather than fixed bins,
//! so float data is matched without quantization. `threshold` below 1.0
//! keeps the brightest swapped values short of the original's top
//! quantile, giving a partial match.
//!
//! Pixels outside the mask are never touched.
//!
//! # Example
//!
//! ```rust
//! use swapfx_core::{MaskCoords, Plane};
//! use swapfx_ops::hist_match;
//!
//! let old = Plane::from_vec(2, 2, vec![10.0, 20.0, 20.0, 30.0]).unwrap();
//! let new = Plane::from_vec(2, 2, vec![1.0, 1.0, 2.0, 3.0]).unwrap();
//! let all: MaskCoords = [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().collect();
//!
//! let matched = hist_match(&old, new, &all, 1.0);
//! assert_eq!(matched.as_slice(), &[15.0, 15.0, 20.0, 30.0]);
//! ```

use swapfx_core::batch::insert_channel;
use swapfx_core::{ImageBatch, MaskCoords, Plane};
use swapfx_math::{cumsum, interp_slice, unique, unique_counts};
use tracing::{debug, trace};

use crate::config::validate_threshold;
use crate::{HistMatchConfig, OpsError, OpsResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Matches the masked histogram of `new` to that of `old`.
///
/// `new` is consumed and returned with its masked pixels remapped; every
/// other pixel keeps its value. An empty `coords` returns `new` unchanged.
///
/// `threshold` is expected in (0, 1]; it is not validated here.
pub fn hist_match(old: &Plane, mut new: Plane, coords: &MaskCoords, threshold: f32) -> Plane {
    if coords.is_empty() {
        trace!("empty mask, channel unchanged");
        return new;
    }

    let old_masked = old.gather(coords);
    let new_masked = new.gather(coords);

    let source = unique(&new_masked);
    let (t_values, t_counts) = unique_counts(&old_masked);

    let s_quants = quantiles(&source.counts, threshold as f64);
    let t_quants = quantiles(&t_counts, 1.0);

    let interp_s_values = interp_slice(&s_quants, &t_quants, &t_values);
    new.scatter(coords, source.inverse.iter().map(|&bin| interp_s_values[bin]));
    new
}

/// Empirical CDF of `counts`, scaled so the last entry equals `scale`.
fn quantiles(counts: &[usize], scale: f64) -> Vec<f64> {
    let cum = cumsum(counts);
    let total = cum.last().copied().unwrap_or(1.0);
    cum.into_iter().map(|c| scale * (c / total)).collect()
}

/// Histogram matching color adjustment over whole batches.
///
/// # Example
///
/// ```rust
/// use swapfx_core::ImageBatch;
/// use swapfx_ops::HistogramMatcher;
///
/// let original = ImageBatch::from_data(1, 1, 2, 1, vec![0.2, 0.8]).unwrap();
/// let swapped = ImageBatch::from_data(1, 1, 2, 1, vec![0.4, 0.5]).unwrap();
/// let mask = ImageBatch::from_data(1, 1, 2, 1, vec![1.0, 1.0]).unwrap();
///
/// let adjusted = HistogramMatcher::default()
///     .with_threshold(1.0)
///     .unwrap()
///     .process(&original, &swapped, &mask)
///     .unwrap();
/// assert_eq!(adjusted.as_slice(), &[0.2, 0.8]);
/// ```
#[derive(Debug, Clone)]
pub struct HistogramMatcher {
    config: HistMatchConfig,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    parallel: bool,
}

impl Default for HistogramMatcher {
    fn default() -> Self {
        Self::new(HistMatchConfig::default())
    }
}

impl HistogramMatcher {
    /// Creates a matcher from settings.
    pub fn new(config: HistMatchConfig) -> Self {
        Self {
            config,
            parallel: true,
        }
    }

    /// Replaces the threshold, validating it.
    pub fn with_threshold(mut self, threshold: f32) -> OpsResult<Self> {
        self.config = HistMatchConfig::new(threshold)?;
        Ok(self)
    }

    /// Processes items one after another even when the `parallel` feature is on.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Current settings.
    pub fn config(&self) -> &HistMatchConfig {
        &self.config
    }

    /// Matches every channel of every swapped crop to its original crop.
    ///
    /// Returns a new batch shaped like `synthesized`; inputs are not modified.
    /// Only pixels selected by the corresponding mask item change.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidParameter`] if the threshold is outside (0, 1].
    /// - [`OpsError::SizeMismatch`] if `original` or `mask` differ from
    ///   `synthesized` in length or spatial size, or `original` has a
    ///   different channel count. The mask may have any channel count.
    pub fn process(
        &self,
        original: &ImageBatch,
        synthesized: &ImageBatch,
        mask: &ImageBatch,
    ) -> OpsResult<ImageBatch> {
        let threshold = self.config.threshold;
        validate_threshold(threshold)?;

        let shape = synthesized.shape();
        let size_err = |e: swapfx_core::Error| OpsError::SizeMismatch(e.to_string());
        shape
            .ensure_congruent(&original.shape(), "original")
            .map_err(size_err)?;
        shape.ensure_congruent(&mask.shape(), "mask").map_err(size_err)?;
        if original.channels() != shape.channels {
            return Err(OpsError::SizeMismatch(format!(
                "original has {} channels, synthesized has {}",
                original.channels(),
                shape.channels
            )));
        }

        debug!(shape = %shape, threshold, "matching histograms");

        let mut output = synthesized.clone();
        if output.is_empty() {
            return Ok(output);
        }

        let match_item = |index: usize, item: &mut [f32]| {
            let coords = mask.mask_coords(index);
            trace!(index, masked = coords.len(), "matching item");
            if coords.is_empty() {
                return;
            }
            for channel in 0..shape.channels {
                let old = original.plane(index, channel);
                let new = synthesized.plane(index, channel);
                let matched = hist_match(&old, new, &coords, threshold);
                insert_channel(item, shape.channels, channel, &matched);
            }
        };

        #[cfg(feature = "parallel")]
        if self.parallel {
            output
                .as_mut_slice()
                .par_chunks_exact_mut(shape.item_len())
                .enumerate()
                .for_each(|(index, item)| match_item(index, item));
            return Ok(output);
        }

        for (index, item) in output.items_mut().enumerate() {
            match_item(index, item);
        }
        Ok(output)
    }
}
