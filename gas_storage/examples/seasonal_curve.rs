//! Print the daily smoothed price estimate around the observed history.

use gas_storage::utils::{synthetic_observations, SyntheticSeries};
use gas_storage::PriceModel;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let observations = synthetic_observations(&SyntheticSeries::default())?;
    let start = observations[0].date;
    let model = PriceModel::fit(observations, start)?;

    let first = model.observations().first_date();
    let last = model.observations().last_date();
    // One year of extrapolation past the last observation
    let horizon = last + chrono::Duration::days(365);

    for (date, price) in model.daily_curve(first, horizon).into_iter().step_by(15) {
        let marker = if model.is_observed(date) { "*" } else { " " };
        println!("{} {} {:8.4}", date, marker, price);
    }

    Ok(())
}
