//! # Price Math
//!
//! Numerical building blocks for seasonal commodity price curves.
//! This crate provides the two regression stages used to fit a price
//! series sampled on a day-offset axis:
//!
//! - [`regression`]: ordinary least-squares linear trend
//! - [`seasonality`]: projection of detrended residuals onto an annual sinusoid

use thiserror::Error;

pub mod regression;
pub mod seasonality;

pub use regression::{fit_linear_trend, TrendParameters};
pub use seasonality::{fit_annual_sinusoid, SeasonalParameters, ANNUAL_PERIOD_DAYS};

/// Errors that can occur while fitting price curves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type for price math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Denominators smaller than this are treated as zero
pub(crate) const DEGENERATE_EPSILON: f64 = 1e-10;

/// Check that two parallel series can be regressed against each other
pub(crate) fn check_parallel(x: &[f64], y: &[f64], what: &str) -> Result<()> {
    if x.is_empty() {
        return Err(MathError::InsufficientData(format!(
            "{} requires at least one observation",
            what
        )));
    }

    if x.len() != y.len() {
        return Err(MathError::InvalidInput(format!(
            "{}: x length ({}) doesn't match y length ({})",
            what,
            x.len(),
            y.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_parallel_rejects_mismatch() {
        let err = check_parallel(&[1.0, 2.0], &[1.0], "trend").unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn check_parallel_rejects_empty() {
        let err = check_parallel(&[], &[], "trend").unwrap_err();
        assert!(matches!(err, MathError::InsufficientData(_)));
        assert!(err.to_string().contains("trend"));
    }
}
