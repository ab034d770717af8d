// =============================================================================
// Price Outlook — single-asset price analysis and short-horizon forecasting
// =============================================================================
//
// Pipeline:
//   CSV bytes ──ingest──▶ TimeSeries ──┬─▶ stats       (current/min/max/avg)
//                                      ├─▶ indicators  (SMA, RSI, MACD, BB)
//                                      └─▶ forecast    (OLS trend + noise)
//
// `pipeline::analyze` ties the stages together and returns one
// `AnalysisReport` per (series, metric, selection) triple.  Rendering is left
// to the host; everything here is plain numbers.
//
// The crate only emits `tracing` events.  Installing a subscriber is the
// host's job.
// =============================================================================

pub mod config;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod ingest;
pub mod pipeline;
pub mod stats;
pub mod types;

pub use config::{AnalysisConfig, ForecastParams, IndicatorParams};
pub use error::{IngestError, Result};
pub use forecast::{predict, Outlook, PredictionSummary};
pub use ingest::{load_series, parse_csv, read_series};
pub use pipeline::{analyze, analyze_with_entropy, AnalysisReport, IndicatorSelection};
pub use stats::{MetricStats, SeriesOverview};
pub use types::{IndicatorSeries, Metric, Prediction, PricePoint, TimeSeries};
