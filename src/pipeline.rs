// =============================================================================
// Analysis Pipeline — single recomputation entry point
// =============================================================================
//
// (TimeSeries, Metric, IndicatorSelection, AnalysisConfig, rng) -> AnalysisReport
//
// The host calls `analyze` whenever the loaded series, the selected metric or
// the indicator toggles change, and replaces whatever report it held before.
// Nothing here keeps state between calls.
//
// Chart overlays use the padded moving-average policy so every line has the
// same length as the raw series.
// =============================================================================

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::forecast::{self, PredictionSummary};
use crate::indicators::{bollinger_series, calculate_macd, calculate_rsi, padded_moving_average};
use crate::stats::{MetricStats, SeriesOverview};
use crate::types::{IndicatorSeries, Metric, Prediction, TimeSeries};

/// Which overlays to compute.  Mirrors the dashboard check boxes.
///
/// `ma7`, `ma30` and `ma90` name slots, not periods: the periods behind them
/// are `IndicatorParams::ma_short`, `ma_medium` and `ma_long`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSelection {
    #[serde(default)]
    pub ma7: bool,
    #[serde(default)]
    pub ma30: bool,
    #[serde(default)]
    pub ma90: bool,
    #[serde(default)]
    pub rsi: bool,
    #[serde(default)]
    pub macd: bool,
    #[serde(default)]
    pub bollinger: bool,
}

impl IndicatorSelection {
    pub fn all() -> Self {
        Self {
            ma7: true,
            ma30: true,
            ma90: true,
            rsi: true,
            macd: true,
            bollinger: true,
        }
    }
}

/// Everything the presentation layer needs for one (series, metric) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub metric: Metric,
    pub overview: SeriesOverview,
    /// `None` while no data is loaded.
    pub stats: Option<MetricStats>,
    /// Keyed by overlay name (`ma7`, `rsi`, `macd_signal`, `bb_upper`, ...).
    /// Moving-average keys are the [`IndicatorSelection`] slot names and stay
    /// fixed whatever periods the config assigns to them.
    /// RSI values are carried as `Some` everywhere, warm-up included.
    pub indicators: BTreeMap<String, IndicatorSeries>,
    pub predictions: Vec<Prediction>,
    pub summary: PredictionSummary,
}

impl AnalysisReport {
    pub fn indicator(&self, name: &str) -> Option<&IndicatorSeries> {
        self.indicators.get(name)
    }
}

/// Recompute statistics, overlays and the forecast from scratch.
pub fn analyze<R>(
    series: &TimeSeries,
    metric: Metric,
    selection: IndicatorSelection,
    config: &AnalysisConfig,
    rng: &mut R,
) -> AnalysisReport
where
    R: Rng + ?Sized,
{
    let values = series.values(metric);
    let params = &config.indicators;
    let mut indicators = BTreeMap::new();

    if selection.ma7 {
        indicators.insert("ma7".to_string(), padded_moving_average(&values, params.ma_short));
    }
    if selection.ma30 {
        indicators.insert("ma30".to_string(), padded_moving_average(&values, params.ma_medium));
    }
    if selection.ma90 {
        indicators.insert("ma90".to_string(), padded_moving_average(&values, params.ma_long));
    }
    if selection.rsi {
        let rsi = calculate_rsi(&values, params.rsi_period);
        indicators.insert("rsi".to_string(), rsi.into_iter().map(Some).collect());
    }
    if selection.macd {
        let macd = calculate_macd(&values, params.macd_fast, params.macd_slow, params.macd_signal);
        indicators.insert("macd".to_string(), macd.macd);
        indicators.insert("macd_signal".to_string(), macd.signal);
        indicators.insert("macd_histogram".to_string(), macd.histogram);
    }
    if selection.bollinger {
        let bands = bollinger_series(&values, params.bollinger_period, params.bollinger_num_std);
        indicators.insert("bb_upper".to_string(), bands.upper);
        indicators.insert("bb_middle".to_string(), bands.middle);
        indicators.insert("bb_lower".to_string(), bands.lower);
    }

    let predictions = forecast::predict(series, metric, config.forecast.days, &config.forecast, rng);
    let summary = PredictionSummary::from_predictions(&predictions);

    debug!(
        metric = %metric,
        points = values.len(),
        overlays = indicators.len(),
        predictions = predictions.len(),
        "analysis recomputed"
    );

    AnalysisReport {
        metric,
        overview: SeriesOverview::of(series),
        stats: MetricStats::compute(&values),
        indicators,
        predictions,
        summary,
    }
}

/// [`analyze`] with the thread-local random generator.
pub fn analyze_with_entropy(
    series: &TimeSeries,
    metric: Metric,
    selection: IndicatorSelection,
    config: &AnalysisConfig,
) -> AnalysisReport {
    analyze(series, metric, selection, config, &mut rand::thread_rng())
}
