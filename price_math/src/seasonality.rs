//! Annual seasonality fitting
//!
//! The residual series left after removing the linear trend is projected
//! onto `sin(2πx/P)` and `cos(2πx/P)` separately:
//!
//! ```text
//! coef_s = Σ(r·s) / Σ(s²)
//! coef_c = Σ(r·c) / Σ(c²)
//! ```
//!
//! The two projections are independent single-variable fits rather than a
//! joint two-variable least-squares solve. They coincide only when the sine
//! and cosine columns are orthogonal over the sample, which holds closely for
//! evenly spaced data spanning whole years but not for irregular sampling.
//! This approximation is accepted; replacing it with a joint solve changes
//! the fitted numbers.

use crate::{check_parallel, MathError, Result, DEGENERATE_EPSILON};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Length of the seasonal cycle in days
pub const ANNUAL_PERIOD_DAYS: f64 = 365.0;

/// Amplitude and phase of a fitted sinusoid
///
/// The seasonal component is `amplitude * sin(2πx/P + phase)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalParameters {
    /// Peak deviation from the trend, never negative
    pub amplitude: f64,
    /// Phase shift in radians, within (-π, π]
    pub phase: f64,
}

impl SeasonalParameters {
    /// Build parameters from the sine and cosine projection coefficients
    pub fn from_coefficients(sin_coef: f64, cos_coef: f64) -> Self {
        let phase = cos_coef.atan2(sin_coef);

        Self {
            amplitude: sin_coef.hypot(cos_coef),
            // atan2 yields -π for a negative-zero cosine coefficient
            phase: if phase == -PI { PI } else { phase },
        }
    }

    /// Evaluate the seasonal component at day-offset `x`
    pub fn evaluate(&self, x: f64, period: f64) -> f64 {
        self.amplitude * (angle(x, period) + self.phase).sin()
    }
}

/// Fit an annual sinusoid to `residuals` sampled at day-offsets `x`
pub fn fit_annual_sinusoid(residuals: &[f64], x: &[f64]) -> Result<SeasonalParameters> {
    fit_sinusoid(residuals, x, ANNUAL_PERIOD_DAYS)
}

/// Fit a sinusoid of the given period to `residuals` sampled at `x`
///
/// Fails with [`MathError::DegenerateInput`] when either basis column sums
/// to zero energy over the sample, e.g. every offset is a whole multiple of
/// the period.
pub fn fit_sinusoid(residuals: &[f64], x: &[f64], period: f64) -> Result<SeasonalParameters> {
    check_parallel(x, residuals, "Seasonal fit")?;

    if period.is_nan() || period <= 0.0 {
        return Err(MathError::InvalidInput(format!(
            "Period must be positive, got {}",
            period
        )));
    }

    let mut rs = 0.0;
    let mut ss = 0.0;
    let mut rc = 0.0;
    let mut cc = 0.0;

    for (&xi, &ri) in x.iter().zip(residuals.iter()) {
        let (s, c) = angle(xi, period).sin_cos();
        rs += ri * s;
        ss += s * s;
        rc += ri * c;
        cc += c * c;
    }

    if ss.abs() < DEGENERATE_EPSILON {
        return Err(MathError::DegenerateInput(
            "Sine basis has zero energy over the sampled day-offsets".to_string(),
        ));
    }
    if cc.abs() < DEGENERATE_EPSILON {
        return Err(MathError::DegenerateInput(
            "Cosine basis has zero energy over the sampled day-offsets".to_string(),
        ));
    }

    Ok(SeasonalParameters::from_coefficients(rs / ss, rc / cc))
}

fn angle(x: f64, period: f64) -> f64 {
    x * 2.0 * PI / period
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_offsets(days: usize) -> Vec<f64> {
        (0..days).map(|d| d as f64).collect()
    }

    #[test]
    fn recovers_pure_sinusoid() {
        let x = daily_offsets(365 * 4);
        let r: Vec<f64> = x
            .iter()
            .map(|&d| 3.0 * (d * 2.0 * PI / ANNUAL_PERIOD_DAYS - 1.2).sin())
            .collect();

        let params = fit_annual_sinusoid(&r, &x).unwrap();
        assert!((params.amplitude - 3.0).abs() < 1e-6);
        assert!((params.phase + 1.2).abs() < 1e-6);
    }

    #[test]
    fn zero_residuals_give_zero_amplitude() {
        let x: Vec<f64> = (0..24).map(|i| (i * 30) as f64).collect();
        let r = vec![0.0; x.len()];

        let params = fit_annual_sinusoid(&r, &x).unwrap();
        assert_eq!(params.amplitude, 0.0);
    }

    #[test]
    fn whole_year_offsets_are_degenerate() {
        let x = [0.0, 365.0, 730.0, 1095.0];
        let r = [0.1, -0.2, 0.3, 0.0];

        let err = fit_annual_sinusoid(&r, &x).unwrap_err();
        assert!(matches!(err, MathError::DegenerateInput(_)));
    }

    #[test]
    fn phase_stays_in_half_open_range() {
        let params = SeasonalParameters::from_coefficients(-1.0, 0.0);
        assert!((params.phase - PI).abs() < 1e-12);
        assert!((params.amplitude - 1.0).abs() < 1e-12);

        let params = SeasonalParameters::from_coefficients(-1.0, -0.0);
        assert_eq!(params.phase, PI);

        let params = SeasonalParameters::from_coefficients(0.0, -2.0);
        assert!((params.phase + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_positive_period_is_rejected() {
        let err = fit_sinusoid(&[1.0], &[1.0], 0.0).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }
}
