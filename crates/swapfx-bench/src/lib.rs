//! Shared fixtures for swapfx benchmarks.

use swapfx_core::ImageBatch;

/// Batch filled with a smooth per-channel gradient, offset by `shift`.
pub fn gradient_batch(len: usize, size: usize, channels: usize, shift: f32) -> ImageBatch {
    let mut batch = ImageBatch::new(len, size, size, channels);
    for i in 0..len {
        for r in 0..size {
            for c in 0..size {
                for ch in 0..channels {
                    let v = (r * size + c) as f32 / (size * size) as f32;
                    batch.set_sample(i, r, c, ch, (v * (ch + 1) as f32 + shift).fract());
                }
            }
        }
    }
    batch
}

/// Single-channel mask with an inscribed ellipse set, like a face mask.
pub fn ellipse_mask(len: usize, size: usize) -> ImageBatch {
    let mut mask = ImageBatch::new(len, size, size, 1);
    let half = size as f32 / 2.0;
    for i in 0..len {
        for r in 0..size {
            for c in 0..size {
                let dy = (r as f32 + 0.5 - half) / half;
                let dx = (c as f32 + 0.5 - half) / (half * 0.8);
                if dx * dx + dy * dy <= 1.0 {
                    mask.set_sample(i, r, c, 0, 1.0);
                }
            }
        }
    }
    mask
}
