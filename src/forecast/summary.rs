// =============================================================================
// Prediction Summary — headline figures for the results panel
// =============================================================================

use serde::Serialize;

use crate::types::Prediction;

/// Number of leading predictions averaged into `week_average`.
const WEEK: usize = 7;

/// Direction of the forecast from its first to its last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outlook {
    Bullish,
    Bearish,
}

impl std::fmt::Display for Outlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Bearish => write!(f, "Bearish"),
        }
    }
}

/// Coarse confidence bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceBand {
    /// >= 0.8
    High,
    /// >= 0.6
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn of(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub next_day: Option<Prediction>,
    pub next_day_band: Option<ConfidenceBand>,
    /// Mean predicted value over the first (up to) seven days.
    pub week_average: Option<f64>,
    pub horizon_days: usize,
    /// Needs at least two predictions.  A flat forecast reads as bearish.
    pub outlook: Option<Outlook>,
}

impl PredictionSummary {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        let next_day = predictions.first().cloned();
        let next_day_band = next_day.as_ref().map(|p| ConfidenceBand::of(p.confidence));

        let week = &predictions[..predictions.len().min(WEEK)];
        let week_average = if week.is_empty() {
            None
        } else {
            Some(week.iter().map(|p| p.predicted).sum::<f64>() / week.len() as f64)
        };

        let outlook = match (predictions.first(), predictions.last()) {
            (Some(first), Some(last)) if predictions.len() >= 2 => {
                if last.predicted > first.predicted {
                    Some(Outlook::Bullish)
                } else {
                    Some(Outlook::Bearish)
                }
            }
            _ => None,
        };

        Self {
            next_day,
            next_day_band,
            week_average,
            horizon_days: predictions.len(),
            outlook,
        }
    }
}
