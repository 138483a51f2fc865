//! Valuation run configuration
//!
//! A JSON document naming the price data, the contract terms and where to
//! send logs and results:
//!
//! ```json
//! {
//!   "data_path": "data/natgas.csv",
//!   "output_path": "contract_pricing_output.csv",
//!   "logging": { "filter": "info", "file": "contract_pricing.log" },
//!   "contract": {
//!     "injection_date": "2024-06-30",
//!     "withdrawal_date": "2024-12-31",
//!     "volume": 100000.0,
//!     "injection_rate": 5000.0,
//!     "withdrawal_rate": 5000.0,
//!     "max_storage": 150000.0,
//!     "storage_cost_per_month": 1000.0,
//!     "injection_cost_per_mmbtu": 0.01,
//!     "withdrawal_cost_per_mmbtu": 0.01,
//!     "transportation_cost": 500.0
//!   }
//! }
//! ```

use crate::contract::StorageContractRequest;
use crate::data::DEFAULT_DATE_FORMAT;
use crate::error::{Result, StorageError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Settings for one contract valuation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// CSV file with the historical price series
    pub data_path: PathBuf,
    /// `chrono` format of the date column
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Anchor for day-offsets; the first observation's date when absent
    #[serde(default)]
    pub reference_start: Option<NaiveDate>,
    /// CSV file receiving the valuation record
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Contract terms to value
    pub contract: StorageContractRequest,
}

/// Log destinations and verbosity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// File that log lines are appended to, in addition to stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

impl ValuationConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            StorageError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json_str(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let config: ValuationConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(StorageError::ConfigError(
                "date_format must not be empty".to_string(),
            ));
        }

        if self.data_path.as_os_str().is_empty() {
            return Err(StorageError::ConfigError(
                "data_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl LoggingConfig {
    /// Install the global `tracing` subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured filter. Can only
    /// succeed once per process.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.filter))
            .map_err(|e| {
                StorageError::ConfigError(format!("Invalid log filter '{}': {}", self.filter, e))
            })?;

        let file_layer = match &self.file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(file_layer)
            .try_init()
            .map_err(|e| StorageError::ConfigError(format!("Cannot install logger: {}", e)))
    }
}
