//! Parametric curve sampling
//!
//! A parametric animation replaces the plain 0→1 progress ramp with a
//! user-supplied sequence of samples, blended with a triangular (tent)
//! kernel. Two samples degenerate to plain linear interpolation; more
//! samples give piecewise shapes (overshoot, dips, wiggles) without a
//! dedicated easing function per effect.

/// Sample a parametric curve at progress `p`.
///
/// `samples` must hold at least 2 values and `p` is expected in `[0, 1)`.
/// With `step = 1/(N-1)`, the result is the tent-weighted blend of the two
/// samples surrounding `p`; a `p` landing exactly on a sample returns that
/// sample.
pub fn sample_curve(samples: &[f32], p: f32) -> f32 {
    debug_assert!(samples.len() >= 2, "parametric curve needs >= 2 samples");

    let step = 1.0 / (samples.len() - 1) as f32;
    let start = ((p / step) as usize).min(samples.len() - 2);

    let mut result = 0.0;
    for k in start..=start + 1 {
        let weight = 1.0 - (p - step * k as f32).abs() / step;
        if weight > 0.0 {
            result += weight * samples[k];
        }
    }
    result
}
