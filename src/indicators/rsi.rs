// =============================================================================
// Relative Strength Index (RSI) — simple trailing averages
// =============================================================================
//
// RSI measures the speed and magnitude of recent changes to evaluate whether
// the selected metric is overbought or oversold.
//
// Step 1 — Compute day-over-day deltas; gain = max(delta, 0),
//          loss = max(-delta, 0).
// Step 2 — For delta index i < period - 1 emit 50 (warm-up).
// Step 3 — Otherwise avg_gain / avg_loss are the plain means of the trailing
//          `period` gains / losses ending at i (no Wilder smoothing).
// Step 4 — avg_loss == 0  => RSI = 100
//          otherwise         RSI = 100 - 100 / (1 + avg_gain / avg_loss)
// Step 5 — Prepend 50 for the first observation, which has no delta.
//
// The output is always the same length as the input and index-aligned to it.
// =============================================================================

/// Value emitted where RSI is undefined.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Compute the RSI series for `values`.
///
/// # Edge cases
/// - empty input => empty vec
/// - single value => `[50.0]`
/// - `period == 0` is treated as `period == 1`
/// - non-finite intermediate results fall back to 50.0
pub fn calculate_rsi(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let period = period.max(1);

    // --- Gains and losses per step -------------------------------------------
    let (gains, losses): (Vec<f64>, Vec<f64>) = values
        .windows(2)
        .map(|w| {
            let delta = w[1] - w[0];
            (delta.max(0.0), (-delta).max(0.0))
        })
        .unzip();

    let mut result = Vec::with_capacity(values.len());
    result.push(NEUTRAL_RSI);

    let period_f = period as f64;
    for i in 0..gains.len() {
        if i + 1 < period {
            result.push(NEUTRAL_RSI);
            continue;
        }

        let start = i + 1 - period;
        let avg_gain = gains[start..=i].iter().sum::<f64>() / period_f;
        let avg_loss = losses[start..=i].iter().sum::<f64>() / period_f;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    result
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Convert average gain / average loss into an RSI value in [0, 100].
///
/// A window with no losses is 100 even when it also has no gains.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rsi = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    };

    if rsi.is_finite() {
        rsi.clamp(0.0, 100.0)
    } else {
        NEUTRAL_RSI
    }
}
