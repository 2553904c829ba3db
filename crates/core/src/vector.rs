//! Norms over plain `f64` slices.

/// Returns the infinity norm, the largest absolute component.
///
/// The norm of an empty vector is `0.0`. A NaN component makes the result NaN.
#[must_use]
pub fn inf_norm(v: &[f64]) -> f64 {
    v.iter().map(|value| value.abs()).fold(0.0, max_propagating_nan)
}

/// Returns `max_i |a[i] - b[i]|`, the infinity norm of the difference.
///
/// Only the common prefix is compared when lengths differ.
#[must_use]
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, max_propagating_nan)
}

// `f64::max` discards NaN, which would hide a diverged component.
fn max_propagating_nan(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}
