//! Interpolation utilities.
//!
//! - Inverse linear interpolation ([`inverse_lerp`])
//! - Piecewise-linear table lookup ([`interp`], [`interp_slice`])

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// A degenerate span (`a == b`) yields 0.
///
/// # Example
///
/// ```rust
/// use swapfx_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(2.0, 2.0, 5.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if b == a {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Evaluates the piecewise-linear function through `(xp[i], fp[i])` at `x`.
///
/// `xp` must be increasing. Queries at or below `xp[0]` return `fp[0]`,
/// queries at or above the last knot return the last `fp`, and a query
/// exactly on a knot returns that knot's value. An empty table yields 0.
///
/// The bracketing interval is found by binary search, so a lookup costs
/// `O(log n)`.
///
/// # Example
///
/// ```rust
/// use swapfx_math::interp;
///
/// let xp = [0.25, 0.75, 1.0];
/// let fp = [10.0, 20.0, 30.0];
///
/// assert_eq!(interp(0.5, &xp, &fp), 15.0);
/// assert_eq!(interp(0.0, &xp, &fp), 10.0); // clamped low
/// assert_eq!(interp(2.0, &xp, &fp), 30.0); // clamped high
/// ```
pub fn interp(x: f64, xp: &[f64], fp: &[f32]) -> f32 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len().min(fp.len());
    if n == 0 {
        return 0.0;
    }
    // Number of knots <= x; the bracket is [hi - 1, hi].
    let hi = xp[..n].partition_point(|&k| k <= x);
    if hi == 0 {
        return fp[0];
    }
    if hi == n {
        return fp[n - 1];
    }
    let lo = hi - 1;
    let t = inverse_lerp(xp[lo], xp[hi], x);
    let (a, b) = (fp[lo] as f64, fp[hi] as f64);
    (a + (b - a) * t) as f32
}

/// Evaluates [`interp`] at every query in `xs`.
pub fn interp_slice(xs: &[f64], xp: &[f64], fp: &[f32]) -> Vec<f32> {
    xs.iter().map(|&x| interp(x, xp, fp)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inverse_lerp_beyond_span() {
        assert_relative_eq!(inverse_lerp(0.0, 10.0, 15.0), 1.5);
    }

    #[test]
    fn test_interp_knots_exact() {
        let xp = [0.1, 0.4, 0.9];
        let fp = [1.0, -2.0, 7.5];
        for (x, f) in xp.iter().zip(fp) {
            assert_eq!(interp(*x, &xp, &fp), f);
        }
    }

    #[test]
    fn test_interp_between_knots() {
        let xp = [0.0, 1.0, 3.0];
        let fp = [0.0, 10.0, 30.0];
        assert_relative_eq!(interp(0.25, &xp, &fp), 2.5);
        assert_relative_eq!(interp(2.0, &xp, &fp), 20.0);
    }

    #[test]
    fn test_interp_clamps() {
        let xp = [0.5, 1.0];
        let fp = [4.0, 8.0];
        assert_eq!(interp(-100.0, &xp, &fp), 4.0);
        assert_eq!(interp(100.0, &xp, &fp), 8.0);
    }

    #[test]
    fn test_interp_single_knot() {
        assert_eq!(interp(0.0, &[1.0], &[3.0]), 3.0);
        assert_eq!(interp(5.0, &[1.0], &[3.0]), 3.0);
    }

    #[test]
    fn test_interp_empty_table() {
        assert_eq!(interp(0.5, &[], &[]), 0.0);
    }

    #[test]
    fn test_interp_slice() {
        let out = interp_slice(&[0.0, 0.5, 1.0], &[0.0, 1.0], &[2.0, 4.0]);
        assert_eq!(out, vec![2.0, 3.0, 4.0]);
    }
}
