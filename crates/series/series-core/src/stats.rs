//! Basic statistics primitives
//!
//! Every function is total: degenerate inputs resolve to `0.0` instead of
//! failing or producing NaN.

/// Arithmetic mean; `0.0` for an empty slice.
///
/// A zero result is ambiguous between "no data" and a genuine zero mean;
/// callers distinguish the two by the slice length.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (denominator `n - 1`); `0.0` when `n < 2`.
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

/// Standardized deviation `(x - mean) / std_dev`; `0.0` when `std_dev == 0`.
pub fn z_score(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    (x - mean) / std_dev
}
