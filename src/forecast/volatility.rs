// =============================================================================
// Empirical volatility in price units
// =============================================================================
//
//   r_t        = (v_t - v_{t-1}) / v_{t-1}
//   sigma      = population standard deviation of r
//   volatility = sigma * v_last
//
// A step whose previous value is zero contributes a return of 0 instead of an
// infinite one.

/// Single-period relative returns of `values` (length `len - 1`).
pub fn relative_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| if w[0] == 0.0 { 0.0 } else { (w[1] - w[0]) / w[0] })
        .collect()
}

/// Standard deviation of relative returns scaled by the last value.
///
/// Fewer than two values => 0.0.
pub fn volatility(values: &[f64]) -> f64 {
    let Some(&last) = values.last() else {
        return 0.0;
    };
    if values.len() < 2 {
        return 0.0;
    }

    let returns = relative_returns(values);
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    let vol = variance.sqrt() * last;
    if vol.is_finite() {
        vol
    } else {
        0.0
    }
}
