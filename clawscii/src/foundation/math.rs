/// Divide, treating a zero (or non-finite) denominator as a zero result.
pub(crate) fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 || !den.is_finite() {
        0.0
    } else {
        num / den
    }
}

/// Floor `x` into a ramp index clamped to `[0, len - 1]`.
///
/// NaN maps to the last (sparsest) index.
pub(crate) fn clamp_index(x: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if x.is_nan() {
        return last;
    }
    if x <= 0.0 {
        return 0;
    }
    let i = x.floor();
    if i >= last as f64 { last } else { i as usize }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
