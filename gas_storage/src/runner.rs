//! End-to-end valuation run driven by a [`ValuationConfig`]

use crate::config::ValuationConfig;
use crate::contract::value;
use crate::data::DataLoader;
use crate::error::Result;
use crate::model::PriceModel;
use crate::observations::ObservationSet;
use crate::output::{write_valuations, ValuationRecord};
use std::sync::Arc;
use tracing::{error, info};

/// Load prices, fit the model, value the contract and write the output file
///
/// Any failure is logged at `error` before it is returned, so it reaches
/// the configured log file.
pub fn run_valuation(config: &ValuationConfig) -> Result<ValuationRecord> {
    run_stages(config).map_err(|err| {
        error!("Error: {}", err);
        err
    })
}

fn run_stages(config: &ValuationConfig) -> Result<ValuationRecord> {
    info!(data_path = %config.data_path.display(), "Loading price history");
    let observations = DataLoader::from_csv(&config.data_path, &config.date_format)?;

    let set = match config.reference_start {
        Some(date) => ObservationSet::new(observations, date)?,
        None => ObservationSet::anchored_at_first(observations)?,
    };

    let model = PriceModel::fit_set(Arc::new(set))?;
    let trend = model.trend();
    let seasonal = model.seasonal();
    // A flat history has no variance to explain
    let r_squared = model.trend_r_squared().ok();
    info!(
        slope = trend.slope,
        intercept = trend.intercept,
        amplitude = seasonal.amplitude,
        phase = seasonal.phase,
        r_squared = ?r_squared,
        "Price model ready"
    );

    let valuation = value(&config.contract, &model)?;
    let record = ValuationRecord::new(&config.contract, &valuation);

    if let Some(output_path) = &config.output_path {
        write_valuations(output_path, &[record.clone()])?;
        info!(output_path = %output_path.display(), "Contract value saved");
    }

    Ok(record)
}
