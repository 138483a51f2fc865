//! Writing valuation results to CSV

use crate::contract::{ContractValuation, StorageContractRequest};
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One flat output row: the contract's key terms and its full valuation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRecord {
    pub injection_date: NaiveDate,
    pub withdrawal_date: NaiveDate,
    pub volume: f64,
    pub injection_price: f64,
    pub withdrawal_price: f64,
    pub revenue: f64,
    pub storage_duration_months: i32,
    pub total_storage_cost: f64,
    pub injection_cost: f64,
    pub withdrawal_cost: f64,
    pub total_costs: f64,
    pub contract_value: f64,
}

impl ValuationRecord {
    pub fn new(request: &StorageContractRequest, valuation: &ContractValuation) -> Self {
        Self {
            injection_date: request.injection_date,
            withdrawal_date: request.withdrawal_date,
            volume: request.volume,
            injection_price: valuation.injection_price,
            withdrawal_price: valuation.withdrawal_price,
            revenue: valuation.revenue,
            storage_duration_months: valuation.storage_duration_months,
            total_storage_cost: valuation.total_storage_cost,
            injection_cost: valuation.injection_cost,
            withdrawal_cost: valuation.withdrawal_cost,
            total_costs: valuation.total_costs,
            contract_value: valuation.contract_value,
        }
    }
}

/// Write records to a CSV file, replacing any existing file
pub fn write_valuations<P: AsRef<Path>>(path: P, records: &[ValuationRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_valuations_to(file, records)
}

/// Write records as CSV with a header row
pub fn write_valuations_to<W: Write>(writer: W, records: &[ValuationRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
