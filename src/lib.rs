//! # Gas Storage Workspace
//!
//! Umbrella crate re-exporting the workspace libraries:
//!
//! - [`price_math`]: trend and seasonality regression
//! - [`gas_storage`]: price model, contract valuation and data handling
//!
//! ## Example
//!
//! ```
//! use gas_storage_workspace::gas_storage::utils::{synthetic_observations, SyntheticSeries};
//! use gas_storage_workspace::gas_storage::{PriceCurve, PriceModel};
//!
//! let observations = synthetic_observations(&SyntheticSeries::default()).unwrap();
//! let first = observations[0];
//! let model = PriceModel::fit(observations, first.date).unwrap();
//! assert_eq!(model.estimate(first.date), first.price);
//! ```

pub use gas_storage;
pub use price_math;
