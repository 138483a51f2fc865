//! Historical price observations anchored to a reference start date

use crate::error::{Result, StorageError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single recorded price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Date of the observation
    pub date: NaiveDate,
    /// Recorded price
    pub price: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Immutable, strictly date-ordered set of observations
///
/// Every observation is addressed by its day-offset from the reference
/// start. The same reference start must be used for fitting and for later
/// estimation.
#[derive(Debug, Clone)]
pub struct ObservationSet {
    /// Observations in strictly increasing date order
    observations: Vec<Observation>,
    /// Anchor for day-offset arithmetic
    reference_start: NaiveDate,
    /// Day-offset to recorded price
    by_offset: HashMap<i64, f64>,
}

impl ObservationSet {
    /// Create a new observation set
    ///
    /// Fails with [`StorageError::DegenerateInput`] when the input is empty,
    /// and with [`StorageError::DataError`] when it is out of order, contains
    /// duplicate dates or non-finite prices.
    pub fn new(observations: Vec<Observation>, reference_start: NaiveDate) -> Result<Self> {
        if observations.is_empty() {
            return Err(StorageError::DegenerateInput(
                "Observation set is empty".to_string(),
            ));
        }

        for pair in observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(StorageError::DataError(format!(
                    "Observation dates must be strictly increasing: {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }

        if let Some(bad) = observations.iter().find(|o| !o.price.is_finite()) {
            return Err(StorageError::DataError(format!(
                "Non-finite price {} on {}",
                bad.price, bad.date
            )));
        }

        let by_offset = observations
            .iter()
            .map(|o| ((o.date - reference_start).num_days(), o.price))
            .collect();

        Ok(Self {
            observations,
            reference_start,
            by_offset,
        })
    }

    /// Create a set anchored at its own first observation
    pub fn anchored_at_first(observations: Vec<Observation>) -> Result<Self> {
        let reference_start = observations
            .first()
            .map(|o| o.date)
            .ok_or_else(|| StorageError::DegenerateInput("Observation set is empty".to_string()))?;

        Self::new(observations, reference_start)
    }

    /// Get the number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the reference start date
    pub fn reference_start(&self) -> NaiveDate {
        self.reference_start
    }

    pub fn first_date(&self) -> NaiveDate {
        self.observations[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.observations[self.observations.len() - 1].date
    }

    /// Whole days between the reference start and `date`
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.reference_start).num_days()
    }

    /// Day-offsets of every observation, as regression inputs
    pub fn day_offsets(&self) -> Vec<f64> {
        self.observations
            .iter()
            .map(|o| self.day_offset(o.date) as f64)
            .collect()
    }

    /// Get the prices as a vector
    pub fn prices(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.price).collect()
    }

    /// Recorded price at an exact day-offset, if one was observed
    pub fn price_at_offset(&self, offset: i64) -> Option<f64> {
        self.by_offset.get(&offset).copied()
    }
}
