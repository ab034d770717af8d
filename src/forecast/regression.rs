// =============================================================================
// Linear Trend — closed-form ordinary least squares
// =============================================================================
//
// Fits y = slope * x + intercept with x = 0..n-1 against the supplied values:
//
//   slope     = (n·Σxy - Σx·Σy) / (n·Σx² - (Σx)²)
//   intercept = (Σy - slope·Σx) / n
//
// The denominator is zero only for n <= 1; that case is a flat line through
// the single value rather than a division by zero.

use serde::Serialize;
use tracing::trace;

/// A fitted straight line over observation indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendFit {
    /// Fit a line through `values`, indexed from 0.
    ///
    /// Returns `None` for empty input.
    pub fn fit(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            trace!(points = values.len(), "trend fit degenerate, using flat line");
            return Some(Self {
                slope: 0.0,
                intercept: sum_y / n,
            });
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        trace!(slope, intercept, points = values.len(), "trend fitted");
        Some(Self { slope, intercept })
    }

    /// Value of the line at index `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_fit() {
        assert!(TrendFit::fit(&[]).is_none());
    }

    #[test]
    fn single_point_is_flat() {
        let fit = TrendFit::fit(&[42.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 42.0);
    }

    #[test]
    fn exact_line_is_recovered() {
        let values: Vec<f64> = (0..60).map(|x| 3.0 + 0.5 * x as f64).collect();
        let fit = TrendFit::fit(&values).unwrap();
        assert!((fit.slope - 0.5).abs() < 1e-10);
        assert!((fit.intercept - 3.0).abs() < 1e-10);
        assert!((fit.value_at(60.0) - 33.0).abs() < 1e-9);
    }

    #[test]
    fn constant_series_has_zero_slope() {
        let fit = TrendFit::fit(&vec![100.0; 60]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 100.0);
    }

    #[test]
    fn noisy_line_matches_textbook_example() {
        // x = 0..4, y = [1, 3, 2, 5, 4]: slope 0.8, intercept 1.4
        let fit = TrendFit::fit(&[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
        assert!((fit.slope - 0.8).abs() < 1e-10);
        assert!((fit.intercept - 1.4).abs() < 1e-10);
    }

    #[test]
    fn test_determinism() {
        let values: Vec<f64> = (0..40).map(|i| (i as f64).sin() * 10.0 + 50.0).collect();
        assert_eq!(TrendFit::fit(&values), TrendFit::fit(&values));
    }
}
