//! Utility functions for the gas_storage crate

use crate::error::{Result, StorageError};
use crate::observations::Observation;
use chrono::{Datelike, NaiveDate};
use price_math::ANNUAL_PERIOD_DAYS;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Last calendar day of the given month
pub fn month_end(year: i32, month: u32) -> Result<NaiveDate> {
    let (following_year, following_month) = next_month(year, month);

    NaiveDate::from_ymd_opt(following_year, following_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or_else(|| {
            StorageError::InvalidParameter(format!("Invalid month {}-{:02}", year, month))
        })
}

/// Month-end dates for each month after `start`'s month through `end`'s month
///
/// Matches how the monthly price files are sampled: a series starting on
/// 2020-10-31 has its next point on 2020-11-30.
pub fn month_end_schedule(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    let mut schedule = Vec::new();
    let (mut year, mut month) = next_month(start.year(), start.month());

    while (year, month) <= (end.year(), end.month()) {
        schedule.push(month_end(year, month)?);
        (year, month) = next_month(year, month);
    }

    Ok(schedule)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Parameters for a reproducible synthetic monthly price series
#[derive(Debug, Clone)]
pub struct SyntheticSeries {
    /// Any date in the first month; the series starts at that month's end
    pub start: NaiveDate,
    /// Number of month-end observations
    pub months: usize,
    pub intercept: f64,
    /// Price change per day
    pub slope: f64,
    pub amplitude: f64,
    /// Phase of the annual cycle in radians
    pub phase: f64,
    /// Standard deviation of the Gaussian noise added to each price
    pub noise_std: f64,
    /// Seed for the noise generator
    pub seed: u64,
}

impl Default for SyntheticSeries {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2020, 10, 31).unwrap_or_default(),
            months: 48,
            intercept: 10.5,
            slope: 0.0015,
            amplitude: 0.6,
            phase: 1.0,
            noise_std: 0.0,
            seed: 42,
        }
    }
}

/// Generate month-end observations from a trend, an annual cycle and noise
///
/// Day-offsets are counted from the first generated date.
pub fn synthetic_observations(series: &SyntheticSeries) -> Result<Vec<Observation>> {
    if series.months == 0 {
        return Err(StorageError::InvalidParameter(
            "Synthetic series needs at least one month".to_string(),
        ));
    }

    let noise = Normal::new(0.0, series.noise_std)
        .map_err(|e| StorageError::InvalidParameter(format!("Invalid noise level: {}", e)))?;
    let mut rng = StdRng::seed_from_u64(series.seed);

    let first = month_end(series.start.year(), series.start.month())?;
    let mut dates = vec![first];
    let mut cursor = first;
    while dates.len() < series.months {
        let (year, month) = next_month(cursor.year(), cursor.month());
        cursor = month_end(year, month)?;
        dates.push(cursor);
    }

    Ok(dates
        .into_iter()
        .map(|date| {
            let days = (date - first).num_days() as f64;
            let seasonal =
                series.amplitude * (days * 2.0 * PI / ANNUAL_PERIOD_DAYS + series.phase).sin();
            let price = series.intercept + series.slope * days + seasonal + noise.sample(&mut rng);
            Observation::new(date, price)
        })
        .collect())
}
