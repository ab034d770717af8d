// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Bollinger Bands consist of a middle band (SMA), an upper band (SMA + k*σ),
// and a lower band (SMA - k*σ), with σ the population standard deviation of
// the same trailing window.  Each index is computed from its own window, so a
// bad value only affects the windows that contain it.

use serde::Serialize;

use crate::types::IndicatorSeries;

/// Band lines index-aligned to the source, `None` until the window fills.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Bollinger Bands at every index of `values`.
///
/// `period == 0` or a series shorter than `period` yields all `None`.
pub fn bollinger_series(values: &[f64], period: usize, num_std: f64) -> BollingerSeries {
    let len = values.len();
    let mut bands = BollingerSeries {
        upper: vec![None; len],
        middle: vec![None; len],
        lower: vec![None; len],
    };
    if period == 0 {
        return bands;
    }

    for (offset, window) in values.windows(period).enumerate() {
        let i = offset + period - 1;
        let (middle, std_dev) = window_stats(window);
        bands.middle[i] = Some(middle);
        bands.upper[i] = Some(middle + num_std * std_dev);
        bands.lower[i] = Some(middle - num_std * std_dev);
    }

    bands
}

/// Mean and population standard deviation of a non-empty window.
fn window_stats(window: &[f64]) -> (f64, f64) {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_window() {
        // 1..=20: mean 10.5, population variance (20² - 1) / 12 = 33.25
        let values: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let bands = bollinger_series(&values, 20, 2.0);
        let sigma = 33.25_f64.sqrt();
        assert!((bands.middle[19].unwrap() - 10.5).abs() < 1e-10);
        assert!((bands.upper[19].unwrap() - (10.5 + 2.0 * sigma)).abs() < 1e-10);
        assert!((bands.lower[19].unwrap() - (10.5 - 2.0 * sigma)).abs() < 1e-10);
    }

    #[test]
    fn flat_series_collapses_bands() {
        let bands = bollinger_series(&vec![100.0; 20], 20, 2.0);
        assert_eq!(bands.upper[19], Some(100.0));
        assert_eq!(bands.lower[19], Some(100.0));
    }

    #[test]
    fn series_alignment() {
        let values: Vec<f64> = (0..30).map(|x| 50.0 + (x % 4) as f64).collect();
        let bands = bollinger_series(&values, 20, 2.0);
        assert_eq!(bands.middle.len(), 30);
        assert!(bands.middle[..19].iter().all(Option::is_none));
        assert!(bands.middle[19..].iter().all(Option::is_some));
    }

    #[test]
    fn series_period_zero_or_too_long() {
        let values = [1.0, 2.0, 3.0];
        assert!(bollinger_series(&values, 0, 2.0).middle.iter().all(Option::is_none));
        assert!(bollinger_series(&values, 5, 2.0).upper.iter().all(Option::is_none));
        assert!(bollinger_series(&[], 20, 2.0).middle.is_empty());
    }

    #[test]
    fn bands_are_symmetric() {
        let values: Vec<f64> = (1..=25).map(|x| (x * x) as f64).collect();
        let bands = bollinger_series(&values, 10, 1.5);
        for i in 9..25 {
            let (u, m, l) = (bands.upper[i].unwrap(), bands.middle[i].unwrap(), bands.lower[i].unwrap());
            assert!(((u - m) - (m - l)).abs() < 1e-9);
        }
    }
}
