// =============================================================================
// Forecasting Module
// =============================================================================
//
// Short-horizon projection of a single metric:
// - OLS trend over the most recent window
// - volatility-scaled random walk around the trend
// - exponentially decaying confidence

pub mod predictor;
pub mod regression;
pub mod summary;
pub mod volatility;

pub use predictor::{confidence_for_day, predict, predict_values};
pub use regression::TrendFit;
pub use summary::{ConfidenceBand, Outlook, PredictionSummary};
pub use volatility::{relative_returns, volatility};
