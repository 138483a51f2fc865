//! Ordinary least-squares trend fitting
//!
//! Fits `y ≈ slope * x + intercept` with the closed-form estimator
//!
//! ```text
//! slope     = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²
//! intercept = ȳ - slope * x̄
//! ```

use crate::{check_parallel, MathError, Result, DEGENERATE_EPSILON};
use serde::{Deserialize, Serialize};

/// Parameters of a fitted linear trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendParameters {
    /// Price change per day
    pub slope: f64,
    /// Price at day-offset zero
    pub intercept: f64,
}

impl TrendParameters {
    /// Evaluate the trend line at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Subtract the trend from `y`, leaving the residual series
    pub fn detrend(&self, x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
        check_parallel(x, y, "Detrending")?;

        Ok(x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| yi - self.evaluate(xi))
            .collect())
    }

    /// Coefficient of determination of this trend over `(x, y)`
    pub fn r_squared(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        check_parallel(x, y, "R-squared")?;

        let y_mean = mean(y);
        let mut ss_total = 0.0; // total sum of squares
        let mut ss_residual = 0.0; // residual sum of squares

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            ss_total += (yi - y_mean).powi(2);
            ss_residual += (yi - self.evaluate(xi)).powi(2);
        }

        if ss_total.abs() < DEGENERATE_EPSILON {
            return Err(MathError::DegenerateInput(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (ss_residual / ss_total))
    }
}

/// Fit a linear trend to parallel series of day-offsets `x` and prices `y`
///
/// Fails with [`MathError::DegenerateInput`] when every `x` is the same,
/// since the slope denominator is then zero.
pub fn fit_linear_trend(x: &[f64], y: &[f64]) -> Result<TrendParameters> {
    check_parallel(x, y, "Linear trend")?;

    let x_mean = mean(x);
    let y_mean = mean(y);

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        numerator += (xi - x_mean) * (yi - y_mean);
        denominator += (xi - x_mean) * (xi - x_mean);
    }

    if denominator.abs() < DEGENERATE_EPSILON {
        return Err(MathError::DegenerateInput(
            "Cannot calculate slope: all day-offsets are identical".to_string(),
        ));
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Ok(TrendParameters { slope, intercept })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
