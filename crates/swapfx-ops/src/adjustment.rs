//! The color adjustment seam.
//!
//! The hosting pipeline holds its color step as a boxed [`Adjustment`] and
//! calls [`Adjustment::run`] once per batch of swapped faces.

use swapfx_core::ImageBatch;
use tracing::trace;

use crate::{HistogramMatcher, OpsResult};

/// A color adjustment applied to swapped face crops.
pub trait Adjustment: Send + Sync {
    /// Short identifier used in settings and logs.
    fn name(&self) -> &str;

    /// Adjusts `synthesized` toward `original` within `mask`.
    fn process(
        &self,
        original: &ImageBatch,
        synthesized: &ImageBatch,
        mask: &ImageBatch,
    ) -> OpsResult<ImageBatch>;

    /// Logs and delegates to [`process`](Self::process).
    fn run(
        &self,
        original: &ImageBatch,
        synthesized: &ImageBatch,
        mask: &ImageBatch,
    ) -> OpsResult<ImageBatch> {
        trace!(adjustment = self.name(), items = synthesized.len(), "running color adjustment");
        let out = self.process(original, synthesized, mask)?;
        trace!(adjustment = self.name(), "color adjustment done");
        Ok(out)
    }
}

impl Adjustment for HistogramMatcher {
    fn name(&self) -> &str {
        "match_hist"
    }

    fn process(
        &self,
        original: &ImageBatch,
        synthesized: &ImageBatch,
        mask: &ImageBatch,
    ) -> OpsResult<ImageBatch> {
        HistogramMatcher::process(self, original, synthesized, mask)
    }
}
