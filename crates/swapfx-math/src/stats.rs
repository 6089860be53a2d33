//! Distinct-value histograms.
//!
//! Float color data has no natural bins, so histograms here are built over
//! the distinct sample values themselves: sort, then group equal runs.
//!
//! Ordering treats `-0.0` and `0.0` as equal and places NaN after every
//! other value, with all NaNs grouped together.

use std::cmp::Ordering;

/// Sorted distinct values of a sample set with per-value counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Unique {
    /// Distinct values in ascending order.
    pub values: Vec<f32>,
    /// For every input sample, the index of its value in [`values`](Self::values).
    pub inverse: Vec<usize>,
    /// Occurrences of each distinct value.
    pub counts: Vec<usize>,
}

#[inline]
fn cmp_nan_last(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Builds the distinct-value histogram of `data`, including the inverse map.
///
/// # Example
///
/// ```rust
/// use swapfx_math::unique;
///
/// let u = unique(&[0.3, 0.1, 0.3, 0.2]);
/// assert_eq!(u.values, vec![0.1, 0.2, 0.3]);
/// assert_eq!(u.counts, vec![1, 1, 2]);
/// assert_eq!(u.inverse, vec![2, 0, 2, 1]);
/// ```
pub fn unique(data: &[f32]) -> Unique {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| cmp_nan_last(data[a], data[b]));

    let mut out = Unique {
        values: Vec::new(),
        inverse: vec![0; data.len()],
        counts: Vec::new(),
    };
    for i in order {
        let v = data[i];
        match (out.values.last(), out.counts.last_mut()) {
            (Some(&last), Some(count)) if cmp_nan_last(last, v) == Ordering::Equal => {
                *count += 1;
            }
            _ => {
                out.values.push(v);
                out.counts.push(1);
            }
        }
        out.inverse[i] = out.values.len() - 1;
    }
    out
}

/// Distinct values of `data` and their counts, without the inverse map.
///
/// ```rust
/// use swapfx_math::unique_counts;
///
/// let (values, counts) = unique_counts(&[10.0, 20.0, 20.0, 30.0]);
/// assert_eq!(values, vec![10.0, 20.0, 30.0]);
/// assert_eq!(counts, vec![1, 2, 1]);
/// ```
pub fn unique_counts(data: &[f32]) -> (Vec<f32>, Vec<usize>) {
    let mut sorted = data.to_vec();
    sorted.sort_by(|&a, &b| cmp_nan_last(a, b));

    let mut values: Vec<f32> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for v in sorted {
        match (values.last(), counts.last_mut()) {
            (Some(&last), Some(count)) if cmp_nan_last(last, v) == Ordering::Equal => *count += 1,
            _ => {
                values.push(v);
                counts.push(1);
            }
        }
    }
    (values, counts)
}

/// Running sum of `counts`.
///
/// ```rust
/// use swapfx_math::cumsum;
///
/// assert_eq!(cumsum(&[2, 1, 1]), vec![2.0, 3.0, 4.0]);
/// ```
pub fn cumsum(counts: &[usize]) -> Vec<f64> {
    counts
        .iter()
        .scan(0.0f64, |acc, &c| {
            *acc += c as f64;
            Some(*acc)
        })
        .collect()
}
