// =============================================================================
// Trend + random-walk forecaster
// =============================================================================
//
// Algorithm:
//   1. Refuse (empty result) below `min_observations` points.
//   2. Take the last min(len, fit_window) values as the fitting window.
//   3. Fit an OLS line over the window, x = 0..n-1.
//   4. volatility = sigma(relative returns) * last value of the window.
//   5. For day i = 1..=days:
//        trend      = slope * (n + i - 1) + intercept
//        noise      = (U - 0.5) * volatility * sqrt(i),  U ~ uniform[0, 1)
//        predicted  = max(0, trend + noise)
//        confidence = max(floor, base * exp(-i / decay_horizon))
//        date       = last observed date + i days
//
// The random source is supplied by the caller.  A seeded generator makes the
// output reproducible; `rand::thread_rng()` gives the usual behaviour.

use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::{debug, trace};

use super::regression::TrendFit;
use super::volatility::volatility;
use crate::config::ForecastParams;
use crate::types::{Metric, Prediction, TimeSeries};

/// Forecast `days` calendar days of `metric` past the end of `series`.
pub fn predict<R>(
    series: &TimeSeries,
    metric: Metric,
    days: usize,
    params: &ForecastParams,
    rng: &mut R,
) -> Vec<Prediction>
where
    R: Rng + ?Sized,
{
    let Some(last) = series.last() else {
        debug!("forecast skipped: empty series");
        return Vec::new();
    };
    predict_values(&series.values(metric), last.date, days, params, rng)
}

/// Forecast from raw values whose final observation falls on `last_date`.
pub fn predict_values<R>(
    values: &[f64],
    last_date: NaiveDate,
    days: usize,
    params: &ForecastParams,
    rng: &mut R,
) -> Vec<Prediction>
where
    R: Rng + ?Sized,
{
    if values.len() < params.min_observations {
        debug!(
            points = values.len(),
            min = params.min_observations,
            "forecast skipped: insufficient data"
        );
        return Vec::new();
    }

    let n = values.len().min(params.fit_window.max(1));
    let window = &values[values.len() - n..];

    let Some(fit) = TrendFit::fit(window) else {
        return Vec::new();
    };
    let vol = volatility(window);

    debug!(
        window = n,
        slope = fit.slope,
        intercept = fit.intercept,
        volatility = vol,
        days,
        "forecasting"
    );

    let mut predictions = Vec::with_capacity(days);
    for i in 1..=days {
        let Some(date) = last_date.checked_add_days(Days::new(i as u64)) else {
            trace!(day = i, "forecast horizon ran past the calendar");
            break;
        };

        let step = i as f64;
        let trend = fit.value_at((n + i - 1) as f64);
        let noise = (rng.gen::<f64>() - 0.5) * vol * step.sqrt();

        predictions.push(Prediction {
            date,
            predicted: (trend + noise).max(0.0),
            confidence: confidence_for_day(i, params),
        });
    }

    predictions
}

/// Confidence attached to forecast day `day` (1-based).
pub fn confidence_for_day(day: usize, params: &ForecastParams) -> f64 {
    let decayed = params.base_confidence * (-(day as f64) / params.decay_horizon).exp();
    decayed.max(params.confidence_floor)
}
