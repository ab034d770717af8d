// =============================================================================
// Descriptive statistics for the selected metric
// =============================================================================

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::TimeSeries;

/// Current / min / max / average of one metric across the whole series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    /// Value on the most recent date.
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl MetricStats {
    /// Returns `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let &current = values.last()?;

        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0_f64),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );

        Some(Self {
            current,
            min,
            max,
            average: sum / values.len() as f64,
        })
    }
}

/// Size and date span of a loaded series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesOverview {
    pub points: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl SeriesOverview {
    pub fn of(series: &TimeSeries) -> Self {
        Self {
            points: series.len(),
            first_date: series.first().map(|p| p.date),
            last_date: series.last().map(|p| p.date),
        }
    }
}
