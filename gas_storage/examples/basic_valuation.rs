//! Fit a price model to a synthetic monthly series and value one contract.

use chrono::NaiveDate;
use gas_storage::utils::{synthetic_observations, SyntheticSeries};
use gas_storage::{value, PriceModel, StorageContractRequest};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let series = SyntheticSeries {
        noise_std: 0.15,
        ..SyntheticSeries::default()
    };
    let observations = synthetic_observations(&series)?;
    let start = observations[0].date;
    println!("Generated {} monthly prices from {}", observations.len(), start);

    let model = PriceModel::fit(observations, start)?;
    let trend = model.trend();
    let seasonal = model.seasonal();
    println!(
        "Trend: {:.6}/day + {:.4}, seasonality: amplitude {:.4}, phase {:.4}",
        trend.slope, trend.intercept, seasonal.amplitude, seasonal.phase
    );

    let request = StorageContractRequest {
        injection_date: NaiveDate::from_ymd_opt(2024, 6, 15).ok_or("bad date")?,
        withdrawal_date: NaiveDate::from_ymd_opt(2025, 1, 15).ok_or("bad date")?,
        volume: 1_000_000.0,
        injection_rate: 20_000.0,
        withdrawal_rate: 20_000.0,
        max_storage: 1_200_000.0,
        storage_cost_per_month: 100_000.0,
        injection_cost_per_mmbtu: 0.01,
        withdrawal_cost_per_mmbtu: 0.01,
        transportation_cost: 50_000.0,
    };

    let valuation = value(&request, &model)?;
    println!("{:#?}", valuation);
    println!("Contract Value: ${:.2}", valuation.contract_value);

    Ok(())
}
