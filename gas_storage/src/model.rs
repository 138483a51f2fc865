//! Seasonal price model fitted to historical observations
//!
//! The model is the sum of a linear trend in day-offset and an annual
//! sinusoid fitted to the detrended residuals. Dates that were observed
//! return their recorded price; every other date is read off the fitted
//! curve, so the model extrapolates to any past or future date.

use crate::error::Result;
use crate::observations::{Observation, ObservationSet};
use chrono::NaiveDate;
use price_math::{
    fit_annual_sinusoid, fit_linear_trend, SeasonalParameters, TrendParameters,
    ANNUAL_PERIOD_DAYS,
};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// A curve that prices any calendar date
pub trait PriceCurve: Debug {
    /// Estimated price on `date`
    fn estimate(&self, date: NaiveDate) -> f64;

    /// Name of the curve
    fn name(&self) -> &str;
}

/// Fitted trend-plus-seasonality price model
///
/// Never mutated after fitting. Refitting on new data produces a new model,
/// leaving existing ones (and any valuation reading them) untouched.
#[derive(Debug, Clone)]
pub struct PriceModel {
    /// Historical data, shared read-only with every clone
    observations: Arc<ObservationSet>,
    /// Fitted linear trend
    trend: TrendParameters,
    /// Fitted annual seasonality
    seasonal: SeasonalParameters,
}

impl PriceModel {
    /// Fit the model to `observations` with day-offsets counted from `reference_start`
    pub fn fit(observations: Vec<Observation>, reference_start: NaiveDate) -> Result<Self> {
        let set = ObservationSet::new(observations, reference_start)?;
        Self::fit_set(Arc::new(set))
    }

    /// Fit the model to an existing observation set
    pub fn fit_set(observations: Arc<ObservationSet>) -> Result<Self> {
        let x = observations.day_offsets();
        let y = observations.prices();

        let trend = fit_linear_trend(&x, &y)?;
        let residuals = trend.detrend(&x, &y)?;
        let seasonal = fit_annual_sinusoid(&residuals, &x)?;

        debug!(
            slope = trend.slope,
            intercept = trend.intercept,
            amplitude = seasonal.amplitude,
            phase = seasonal.phase,
            observations = observations.len(),
            reference_start = %observations.reference_start(),
            "Fitted seasonal price model"
        );

        Ok(Self {
            observations,
            trend,
            seasonal,
        })
    }

    /// Get the fitted trend parameters
    pub fn trend(&self) -> TrendParameters {
        self.trend
    }

    /// Get the fitted seasonal parameters
    pub fn seasonal(&self) -> SeasonalParameters {
        self.seasonal
    }

    /// Share of price variance explained by the linear trend alone
    pub fn trend_r_squared(&self) -> Result<f64> {
        let x = self.observations.day_offsets();
        let y = self.observations.prices();
        Ok(self.trend.r_squared(&x, &y)?)
    }

    /// Get the reference start date
    pub fn reference_start(&self) -> NaiveDate {
        self.observations.reference_start()
    }

    /// Get the observations the model was fitted on
    pub fn observations(&self) -> &ObservationSet {
        &self.observations
    }

    /// Check whether `date` has a recorded price
    pub fn is_observed(&self, date: NaiveDate) -> bool {
        let offset = self.observations.day_offset(date);
        self.observations.price_at_offset(offset).is_some()
    }

    /// Fitted curve value on `date`, ignoring recorded prices
    pub fn fitted_value(&self, date: NaiveDate) -> f64 {
        let days = self.observations.day_offset(date) as f64;
        self.seasonal.evaluate(days, ANNUAL_PERIOD_DAYS) + self.trend.evaluate(days)
    }

    /// Estimate every calendar day from `start` through `end` inclusive
    pub fn daily_curve(&self, start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, f64)> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| (date, self.estimate(date)))
            .collect()
    }
}

impl PriceCurve for PriceModel {
    fn estimate(&self, date: NaiveDate) -> f64 {
        let offset = self.observations.day_offset(date);

        match self.observations.price_at_offset(offset) {
            Some(price) => price,
            None => self.fitted_value(date),
        }
    }

    fn name(&self) -> &str {
        "Seasonal Trend Model"
    }
}
