// =============================================================================
// Exponential Moving Average (EMA) and MACD
// =============================================================================
//
// EMA gives more weight to recent values, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula:
//   multiplier = 2 / (period + 1)
//   EMA_t      = value_t * multiplier + EMA_{t-1} * (1 - multiplier)
//
// The very first EMA value is seeded with the SMA of the first `period` values.
//
// MACD is built on top:
//   macd      = EMA(fast) - EMA(slow)
//   signal    = EMA(signal_period) of the macd line
//   histogram = macd - signal
// =============================================================================

use serde::Serialize;

use crate::types::IndicatorSeries;

/// Compute the EMA series for `values` and look-back `period`.
///
/// Returns an empty `Vec` when the input is too short or the period is zero.
/// Each output element corresponds to a value starting at index `period - 1`.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `values.len() < period` => empty vec
/// - A non-finite intermediate value stops the series.
pub fn calculate_ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let sma: f64 = values[..period].iter().sum::<f64>() / period as f64;
    if !sma.is_finite() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(sma);

    let mut prev_ema = sma;
    for &value in &values[period..] {
        let ema = value * multiplier + prev_ema * (1.0 - multiplier);
        if !ema.is_finite() {
            break;
        }
        result.push(ema);
        prev_ema = ema;
    }

    result
}

/// EMA aligned to `values`: `None` before index `period - 1`.
pub fn padded_ema(values: &[f64], period: usize) -> IndicatorSeries {
    align(values.len(), period.saturating_sub(1), calculate_ema(values, period))
}

/// The three MACD lines, each index-aligned to the source series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Moving Average Convergence/Divergence.
///
/// The macd line is defined from index `max(fast, slow) - 1`; the signal and
/// histogram lines need `signal_period - 1` further points.  If any period is
/// zero every line is all `None`.
pub fn calculate_macd(
    values: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> MacdSeries {
    let len = values.len();
    if fast == 0 || slow == 0 || signal_period == 0 {
        return MacdSeries {
            macd: vec![None; len],
            signal: vec![None; len],
            histogram: vec![None; len],
        };
    }

    let fast_ema = padded_ema(values, fast);
    let slow_ema = padded_ema(values, slow);

    let macd: IndicatorSeries = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();

    // The macd line is a contiguous run of values once both EMAs exist.
    let start = macd.iter().position(Option::is_some).unwrap_or(len);
    let defined: Vec<f64> = macd[start..].iter().map_while(|v| *v).collect();
    let signal_values = calculate_ema(&defined, signal_period);
    let signal = align(len, start + signal_period - 1, signal_values);

    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Place `computed` at `offset` inside a `len`-long series of `None`.
fn align(len: usize, offset: usize, computed: Vec<f64>) -> IndicatorSeries {
    let mut out = vec![None; len];
    for (slot, value) in out.iter_mut().skip(offset).zip(computed) {
        *slot = Some(value);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    // ---- calculate_ema ---------------------------------------------------

    #[test]
    fn ema_empty_input() {
        assert!(calculate_ema(&[], 5).is_empty());
    }

    #[test]
    fn ema_period_zero() {
        assert!(calculate_ema(&[1.0, 2.0, 3.0], 0).is_empty());
    }

    #[test]
    fn ema_insufficient_data() {
        assert!(calculate_ema(&[1.0, 2.0], 5).is_empty());
    }

    #[test]
    fn ema_period_equals_length() {
        let ema = calculate_ema(&[2.0, 4.0, 6.0], 3);
        assert_eq!(ema.len(), 1);
        assert!((ema[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn ema_known_values() {
        // 5-period EMA of [1..=10]; SMA seed = 3.0, multiplier = 1/3
        let values = ascending(10);
        let ema = calculate_ema(&values, 5);
        assert_eq!(ema.len(), 6);

        let mult = 2.0 / 6.0;
        let mut expected = 3.0;
        let mut expected_vec = vec![expected];
        for &c in &values[5..] {
            expected = c * mult + expected * (1.0 - mult);
            expected_vec.push(expected);
        }
        for (a, b) in ema.iter().zip(expected_vec.iter()) {
            assert!((a - b).abs() < 1e-10, "got {a}, expected {b}");
        }
    }

    #[test]
    fn ema_stops_at_nan() {
        let ema = calculate_ema(&[1.0, 2.0, 3.0, f64::NAN, 5.0], 3);
        assert_eq!(ema.len(), 1);
    }

    // ---- padded_ema ------------------------------------------------------

    #[test]
    fn padded_ema_aligns_with_input() {
        let values = ascending(10);
        let padded = padded_ema(&values, 5);
        assert_eq!(padded.len(), 10);
        assert!(padded[..4].iter().all(Option::is_none));
        assert!((padded[4].unwrap() - 3.0).abs() < 1e-10);
        assert!(padded[4..].iter().all(Option::is_some));
    }

    // ---- calculate_macd --------------------------------------------------

    #[test]
    fn macd_alignment() {
        let values = ascending(60);
        let m = calculate_macd(&values, 12, 26, 9);
        assert_eq!(m.macd.len(), 60);
        assert_eq!(m.signal.len(), 60);
        assert_eq!(m.histogram.len(), 60);

        // macd defined from index 25, signal from 25 + 8 = 33.
        assert!(m.macd[24].is_none());
        assert!(m.macd[25].is_some());
        assert!(m.signal[32].is_none());
        assert!(m.signal[33].is_some());
        assert!(m.histogram[32].is_none());
        assert!(m.histogram[59].is_some());
    }

    #[test]
    fn macd_positive_in_uptrend() {
        let m = calculate_macd(&ascending(100), 12, 26, 9);
        assert!(m.macd[99].unwrap() > 0.0);
    }

    #[test]
    fn macd_flat_is_zero() {
        let m = calculate_macd(&vec![50.0; 60], 12, 26, 9);
        assert!(m.macd[59].unwrap().abs() < 1e-10);
        assert!(m.signal[59].unwrap().abs() < 1e-10);
        assert!(m.histogram[59].unwrap().abs() < 1e-10);
    }

    #[test]
    fn macd_short_series_is_all_none() {
        let m = calculate_macd(&ascending(20), 12, 26, 9);
        assert!(m.macd.iter().all(Option::is_none));
        assert!(m.signal.iter().all(Option::is_none));
    }

    #[test]
    fn macd_zero_period() {
        let m = calculate_macd(&ascending(40), 0, 26, 9);
        assert_eq!(m.macd.len(), 40);
        assert!(m.histogram.iter().all(Option::is_none));
    }

    #[test]
    fn histogram_is_macd_minus_signal() {
        let values: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
        let m = calculate_macd(&values, 12, 26, 9);
        for i in 0..80 {
            if let (Some(macd), Some(signal), Some(hist)) = (m.macd[i], m.signal[i], m.histogram[i]) {
                assert!((hist - (macd - signal)).abs() < 1e-12);
            }
        }
    }
}
