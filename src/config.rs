// =============================================================================
// Analysis Configuration — tunables for indicators and the forecaster
// =============================================================================
//
// Every constant the pipeline uses lives here so a host application can tune
// the analysis without touching code.  All fields carry `#[serde(default)]`
// so a partial JSON file (or `{}`) loads with the stock values filled in.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_forecast_days() -> usize {
    30
}

fn default_fit_window() -> usize {
    60
}

fn default_min_observations() -> usize {
    10
}

fn default_base_confidence() -> f64 {
    0.9
}

fn default_confidence_floor() -> f64 {
    0.3
}

fn default_decay_horizon() -> f64 {
    10.0
}

fn default_rsi_period() -> usize {
    14
}

fn default_ma_short() -> usize {
    7
}

fn default_ma_medium() -> usize {
    30
}

fn default_ma_long() -> usize {
    90
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

fn default_bollinger_period() -> usize {
    20
}

fn default_bollinger_num_std() -> f64 {
    2.0
}

// =============================================================================
// ForecastParams
// =============================================================================

/// Trend-fit and confidence-decay settings for the forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastParams {
    /// Number of future calendar days to project.
    #[serde(default = "default_forecast_days")]
    pub days: usize,

    /// How many of the most recent observations the trend is fitted on.
    #[serde(default = "default_fit_window")]
    pub fit_window: usize,

    /// Below this many observations no forecast is produced.
    #[serde(default = "default_min_observations")]
    pub min_observations: usize,

    /// Confidence ceiling; day `i` gets `base * exp(-i / decay_horizon)`.
    #[serde(default = "default_base_confidence")]
    pub base_confidence: f64,

    /// Confidence never drops below this.
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,

    #[serde(default = "default_decay_horizon")]
    pub decay_horizon: f64,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            days: default_forecast_days(),
            fit_window: default_fit_window(),
            min_observations: default_min_observations(),
            base_confidence: default_base_confidence(),
            confidence_floor: default_confidence_floor(),
            decay_horizon: default_decay_horizon(),
        }
    }
}

// =============================================================================
// IndicatorParams
// =============================================================================

/// Look-back periods for the chart overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    /// Periods behind the `ma7` / `ma30` / `ma90` overlays.
    #[serde(default = "default_ma_short")]
    pub ma_short: usize,
    #[serde(default = "default_ma_medium")]
    pub ma_medium: usize,
    #[serde(default = "default_ma_long")]
    pub ma_long: usize,

    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,
    #[serde(default = "default_bollinger_num_std")]
    pub bollinger_num_std: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: default_rsi_period(),
            ma_short: default_ma_short(),
            ma_medium: default_ma_medium(),
            ma_long: default_ma_long(),
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
            bollinger_period: default_bollinger_period(),
            bollinger_num_std: default_bollinger_num_std(),
        }
    }
}

// =============================================================================
// AnalysisConfig
// =============================================================================

/// Top-level configuration handed to [`crate::pipeline::analyze`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub forecast: ForecastParams,

    #[serde(default)]
    pub indicators: IndicatorParams,
}

impl AnalysisConfig {
    /// Load configuration from a JSON file at `path` and sanitise it.
    ///
    /// A missing or unparsable file is an error so the caller can decide
    /// whether to fall back to [`AnalysisConfig::default`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read analysis config from {}", path.display()))?;

        let config = Self::from_json(&content)
            .with_context(|| format!("failed to parse analysis config from {}", path.display()))?;

        info!(
            path = %path.display(),
            forecast_days = config.forecast.days,
            fit_window = config.forecast.fit_window,
            "analysis config loaded"
        );

        Ok(config)
    }

    /// Parse configuration from a JSON string and sanitise it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("invalid analysis config JSON")?;
        Ok(config.validated())
    }

    /// Clamp values that would make the forecaster undefined.
    ///
    /// - `fit_window` and `min_observations` are at least 2 so the trend fit
    ///   always has a non-zero denominator.
    /// - `confidence_floor` never exceeds `base_confidence`.
    /// - `decay_horizon` must be positive and finite.
    pub fn validated(mut self) -> Self {
        let f = &mut self.forecast;

        if f.fit_window < 2 {
            warn!(fit_window = f.fit_window, "fit_window below 2, clamping");
            f.fit_window = 2;
        }
        if f.min_observations < 2 {
            warn!(
                min_observations = f.min_observations,
                "min_observations below 2, clamping"
            );
            f.min_observations = 2;
        }
        if !(0.0..=1.0).contains(&f.base_confidence) {
            warn!(base_confidence = f.base_confidence, "base_confidence outside [0, 1], resetting");
            f.base_confidence = default_base_confidence();
        }
        if !(0.0..=f.base_confidence).contains(&f.confidence_floor) {
            warn!(
                confidence_floor = f.confidence_floor,
                base_confidence = f.base_confidence,
                "confidence_floor outside [0, base_confidence], clamping"
            );
            f.confidence_floor = f.confidence_floor.clamp(0.0, f.base_confidence);
        }
        if !(f.decay_horizon.is_finite() && f.decay_horizon > 0.0) {
            warn!(decay_horizon = f.decay_horizon, "decay_horizon must be positive, resetting");
            f.decay_horizon = default_decay_horizon();
        }

        self
    }
}
