//! # Gas Storage
//!
//! A Rust library for estimating a continuous natural gas price curve from
//! sparse monthly observations and valuing storage contracts against it.
//!
//! ## Features
//!
//! - Observation sets anchored to a reference start date
//! - A two-stage price model: linear trend plus annual seasonality
//! - Exact recorded prices on observed dates, fitted estimates elsewhere
//! - Storage contract valuation with a full cost breakdown
//! - CSV ingestion of price series and CSV output of valuations
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gas_storage::utils::{synthetic_observations, SyntheticSeries};
//! use gas_storage::{value, PriceCurve, PriceModel, StorageContractRequest};
//!
//! let observations = synthetic_observations(&SyntheticSeries::default())?;
//! let start = observations[0].date;
//!
//! // Fit the model
//! let model = PriceModel::fit(observations, start)?;
//!
//! // Price a date that was never observed
//! let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
//! let price = model.estimate(date);
//! assert!(price.is_finite());
//!
//! // Value a summer-to-winter storage contract
//! let request = StorageContractRequest {
//!     injection_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//!     withdrawal_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//!     volume: 100_000.0,
//!     injection_rate: 5_000.0,
//!     withdrawal_rate: 5_000.0,
//!     max_storage: 150_000.0,
//!     storage_cost_per_month: 1_000.0,
//!     injection_cost_per_mmbtu: 0.01,
//!     withdrawal_cost_per_mmbtu: 0.01,
//!     transportation_cost: 500.0,
//! };
//! let valuation = value(&request, &model)?;
//! assert_eq!(valuation.storage_duration_months, 6);
//! # Ok::<(), gas_storage::StorageError>(())
//! ```

pub mod config;
pub mod contract;
pub mod data;
pub mod error;
pub mod model;
pub mod observations;
pub mod output;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{LoggingConfig, ValuationConfig};
pub use crate::contract::{
    storage_duration_months, value, ContractValuation, StorageContractRequest,
};
pub use crate::data::DataLoader;
pub use crate::error::{Result, StorageError};
pub use crate::model::{PriceCurve, PriceModel};
pub use crate::observations::{Observation, ObservationSet};
pub use crate::output::{write_valuations, ValuationRecord};
pub use crate::runner::run_valuation;
pub use price_math::{SeasonalParameters, TrendParameters};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
