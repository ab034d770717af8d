// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free indicator functions over a scalar series.  Series
// outputs have the same length as their input and are index-aligned to it;
// the warm-up region is either `None` or a documented neutral value.

pub mod bollinger;
pub mod ema;
pub mod moving_average;
pub mod rsi;

pub use bollinger::{bollinger_series, BollingerSeries};
pub use ema::{calculate_ema, calculate_macd, padded_ema, MacdSeries};
pub use moving_average::{padded_moving_average, seeded_moving_average};
pub use rsi::{calculate_rsi, NEUTRAL_RSI};
