// =============================================================================
// Simple Moving Average (SMA) — two warm-up policies
// =============================================================================
//
// Both variants emit the arithmetic mean of the trailing `period` values
// (inclusive of index i) once the window is full.  They differ only in what
// they emit for i < period - 1:
//
//   padded  => None        (chart overlays; lines up with the raw series)
//   seeded  => values[i]   (the raw value itself; always a number)
//
// Callers pick one explicitly.  The two policies produce different warm-up
// regions for the same input, so they are never interchangeable.
// =============================================================================

use crate::types::IndicatorSeries;

/// SMA with `None` for every index before the first full window.
///
/// For a series of length `L >= period` exactly `L - period + 1` values are
/// defined, at indices `period - 1 ..= L - 1`.  `period == 0` yields all `None`.
pub fn padded_moving_average(values: &[f64], period: usize) -> IndicatorSeries {
    let mut result = vec![None; values.len()];
    if period == 0 {
        return result;
    }

    // Every window is summed independently; no running total.
    for (offset, window) in values.windows(period).enumerate() {
        result[offset + period - 1] = Some(window.iter().sum::<f64>() / period as f64);
    }

    result
}

/// SMA that back-fills the warm-up region with the raw value at each index.
///
/// `period == 0` returns a copy of the input.
pub fn seeded_moving_average(values: &[f64], period: usize) -> Vec<f64> {
    padded_moving_average(values, period)
        .into_iter()
        .zip(values)
        .map(|(avg, &raw)| avg.unwrap_or(raw))
        .collect()
}
