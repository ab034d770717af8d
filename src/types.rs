// =============================================================================
// Shared types used across the price-outlook pipeline
// =============================================================================

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of an uploaded price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub open: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default)]
    pub adj_close: f64,
}

impl PricePoint {
    /// A point with every numeric field set to zero.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
            adj_close: 0.0,
        }
    }
}

// =============================================================================
// TimeSeries
// =============================================================================

/// Date-ordered price history.
///
/// Dates are unique and strictly increasing.  The only way to build a series
/// is [`TimeSeries::from_points`], which normalises whatever order the source
/// delivered, so there is no mutating API once a series exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct TimeSeries {
    points: Vec<PricePoint>,
}

impl TimeSeries {
    /// Sort `points` ascending by date.  When a date occurs more than once the
    /// point that came last in `points` is kept.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        // Stable sort: equal dates keep their source order.
        points.sort_by_key(|p| p.date);

        let mut normalised: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match normalised.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => normalised.push(point),
            }
        }

        Self { points: normalised }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Project the series onto a single scalar field.
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        let accessor = metric.accessor();
        self.points.iter().map(accessor).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }
}

impl From<Vec<PricePoint>> for TimeSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::from_points(points)
    }
}

impl From<TimeSeries> for Vec<PricePoint> {
    fn from(series: TimeSeries) -> Self {
        series.points
    }
}

// =============================================================================
// Metric selector
// =============================================================================

/// Which field of [`PricePoint`] drives statistics, indicators and forecasts.
///
/// Adjusted close is parsed but deliberately not selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Open,
    High,
    Low,
    #[default]
    Close,
    Volume,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Open,
        Metric::High,
        Metric::Low,
        Metric::Close,
        Metric::Volume,
    ];

    /// Field accessor for this metric.
    pub fn accessor(self) -> fn(&PricePoint) -> f64 {
        match self {
            Self::Open => |p: &PricePoint| p.open,
            Self::High => |p: &PricePoint| p.high,
            Self::Low => |p: &PricePoint| p.low,
            Self::Close => |p: &PricePoint| p.close,
            Self::Volume => |p: &PricePoint| p.volume,
        }
    }

    pub fn value_of(self, point: &PricePoint) -> f64 {
        (self.accessor())(point)
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::High => write!(f, "High"),
            Self::Low => write!(f, "Low"),
            Self::Close => write!(f, "Close"),
            Self::Volume => write!(f, "Volume"),
        }
    }
}

/// Returned when a metric name is not one of the selectable fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric: {0}")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "close" => Ok(Self::Close),
            "volume" => Ok(Self::Volume),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

// =============================================================================
// Forecast output
// =============================================================================

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub date: NaiveDate,
    /// Never negative.
    pub predicted: f64,
    /// Always inside `[confidence_floor, base_confidence]`.
    pub confidence: f64,
}

/// Index-aligned derived series; `None` marks the warm-up region.
pub type IndicatorSeries = Vec<Option<f64>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn point(d: u32, close: f64) -> PricePoint {
        PricePoint {
            close,
            ..PricePoint::empty(day(d))
        }
    }

    #[test]
    fn from_points_sorts_ascending() {
        let series = TimeSeries::from_points(vec![point(3, 3.0), point(1, 1.0), point(2, 2.0)]);
        assert_eq!(series.dates(), vec![day(1), day(2), day(3)]);
        assert_eq!(series.values(Metric::Close), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_points_keeps_last_duplicate() {
        let series = TimeSeries::from_points(vec![point(2, 1.0), point(1, 5.0), point(2, 9.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.values(Metric::Close), vec![5.0, 9.0]);
    }

    #[test]
    fn empty_series() {
        let series = TimeSeries::from_points(Vec::new());
        assert!(series.is_empty());
        assert!(series.first().is_none());
        assert!(series.values(Metric::Close).is_empty());
    }

    #[test]
    fn metric_accessors_pick_matching_field() {
        let p = PricePoint {
            date: day(1),
            open: 1.0,
            high: 2.0,
            low: 3.0,
            close: 4.0,
            volume: 5.0,
            adj_close: 6.0,
        };
        let picked: Vec<f64> = Metric::ALL.iter().map(|m| m.value_of(&p)).collect();
        assert_eq!(picked, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn metric_parses_case_insensitively() {
        assert_eq!("close".parse::<Metric>().unwrap(), Metric::Close);
        assert_eq!(" Volume ".parse::<Metric>().unwrap(), Metric::Volume);
        assert!("Adj Close".parse::<Metric>().is_err());
    }

    #[test]
    fn metric_display_roundtrips() {
        for metric in Metric::ALL {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
    }

    #[test]
    fn deserialising_normalises_order() {
        let json = r#"[
            {"date": "2024-01-02", "close": 2.0},
            {"date": "2024-01-01", "close": 1.0}
        ]"#;
        let series: TimeSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.dates(), vec![day(1), day(2)]);
    }

    #[test]
    fn default_metric_is_close() {
        assert_eq!(Metric::default(), Metric::Close);
    }
}
