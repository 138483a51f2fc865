//! Storage contract valuation
//!
//! A storage contract buys gas on the injection date, holds it, and sells it
//! on the withdrawal date. Its value is the price spread on the stored
//! volume less storage, handling and transport costs.

use crate::error::{Result, StorageError};
use crate::model::PriceCurve;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Terms of a storage contract to be valued
///
/// `injection_rate` and `withdrawal_rate` are checked for sign but do not
/// enter the valuation yet. Whether the volume can physically be moved
/// within the contract window at those rates is not verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageContractRequest {
    /// Date gas is bought and injected
    pub injection_date: NaiveDate,
    /// Date gas is withdrawn and sold
    pub withdrawal_date: NaiveDate,
    /// Volume stored, in MMBtu
    pub volume: f64,
    /// Injection rate, in MMBtu per day
    pub injection_rate: f64,
    /// Withdrawal rate, in MMBtu per day
    pub withdrawal_rate: f64,
    /// Storage facility capacity, in MMBtu
    pub max_storage: f64,
    /// Flat storage fee per calendar month
    pub storage_cost_per_month: f64,
    /// Injection fee per MMBtu
    pub injection_cost_per_mmbtu: f64,
    /// Withdrawal fee per MMBtu
    pub withdrawal_cost_per_mmbtu: f64,
    /// Flat transportation fee
    pub transportation_cost: f64,
}

/// Breakdown of a contract's value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractValuation {
    pub injection_price: f64,
    pub withdrawal_price: f64,
    /// Volume times the withdrawal/injection price spread
    pub revenue: f64,
    /// Calendar months billed for storage
    pub storage_duration_months: i32,
    pub total_storage_cost: f64,
    pub injection_cost: f64,
    pub withdrawal_cost: f64,
    /// Storage, injection, withdrawal and transportation costs combined
    pub total_costs: f64,
    /// Revenue less total costs
    pub contract_value: f64,
}

impl StorageContractRequest {
    /// Check the request, reporting the first violated rule
    ///
    /// Capacity is checked first, then date order, then that every
    /// quantity is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.volume > self.max_storage {
            return Err(StorageError::CapacityExceeded {
                volume: self.volume,
                max_storage: self.max_storage,
            });
        }

        if self.injection_date >= self.withdrawal_date {
            return Err(StorageError::InvalidDateOrder {
                injection_date: self.injection_date,
                withdrawal_date: self.withdrawal_date,
            });
        }

        let quantities = [
            ("volume", self.volume),
            ("injection_rate", self.injection_rate),
            ("withdrawal_rate", self.withdrawal_rate),
            ("max_storage", self.max_storage),
            ("storage_cost_per_month", self.storage_cost_per_month),
            ("injection_cost_per_mmbtu", self.injection_cost_per_mmbtu),
            ("withdrawal_cost_per_mmbtu", self.withdrawal_cost_per_mmbtu),
            ("transportation_cost", self.transportation_cost),
        ];

        for (name, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(StorageError::InvalidParameter(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Whole calendar months from injection to withdrawal
///
/// Day-of-month is ignored: two dates in the same month are zero months
/// apart, and storage is billed per month boundary crossed.
pub fn storage_duration_months(injection_date: NaiveDate, withdrawal_date: NaiveDate) -> i32 {
    (withdrawal_date.year() - injection_date.year()) * 12
        + (withdrawal_date.month() as i32 - injection_date.month() as i32)
}

/// Value a storage contract against a price curve
pub fn value<C: PriceCurve + ?Sized>(
    request: &StorageContractRequest,
    curve: &C,
) -> Result<ContractValuation> {
    request.validate()?;

    let injection_price = curve.estimate(request.injection_date);
    let withdrawal_price = curve.estimate(request.withdrawal_date);

    let revenue = request.volume * (withdrawal_price - injection_price);

    let storage_duration_months =
        storage_duration_months(request.injection_date, request.withdrawal_date);
    let total_storage_cost = request.storage_cost_per_month * storage_duration_months as f64;
    let injection_cost = request.injection_cost_per_mmbtu * request.volume;
    let withdrawal_cost = request.withdrawal_cost_per_mmbtu * request.volume;

    let total_costs =
        total_storage_cost + injection_cost + withdrawal_cost + request.transportation_cost;
    let contract_value = revenue - total_costs;

    info!(
        curve = curve.name(),
        injection_date = %request.injection_date,
        withdrawal_date = %request.withdrawal_date,
        revenue,
        total_costs,
        contract_value,
        "Calculated contract value"
    );

    Ok(ContractValuation {
        injection_price,
        withdrawal_price,
        revenue,
        storage_duration_months,
        total_storage_cost,
        injection_cost,
        withdrawal_cost,
        total_costs,
        contract_value,
    })
}
