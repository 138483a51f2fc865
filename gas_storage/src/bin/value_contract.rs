//! Value a natural gas storage contract described by a JSON config file.
//!
//! Usage: `value_contract [config.json]`

use anyhow::Context;
use gas_storage::runner::run_valuation;
use gas_storage::ValuationConfig;
use std::env;

fn main() -> anyhow::Result<()> {
    // Get config path from command line or use default
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "contract_config.json".to_string());

    let config = ValuationConfig::load(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    config.logging.init()?;

    let record = run_valuation(&config).context("valuing storage contract")?;

    println!("Injection price:  {:>14.4}", record.injection_price);
    println!("Withdrawal price: {:>14.4}", record.withdrawal_price);
    println!("Revenue:          {:>14.2}", record.revenue);
    println!(
        "Storage:          {:>14.2} ({} months)",
        record.total_storage_cost, record.storage_duration_months
    );
    println!("Injection cost:   {:>14.2}", record.injection_cost);
    println!("Withdrawal cost:  {:>14.2}", record.withdrawal_cost);
    println!("Total costs:      {:>14.2}", record.total_costs);
    println!("\nContract Value: ${:.2}", record.contract_value);

    if let Some(output_path) = &config.output_path {
        println!("Contract value saved to '{}'.", output_path.display());
    }

    Ok(())
}
