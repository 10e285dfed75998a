//! Portfolio files
//!
//! - `portfolio_data` - the YAML document shape
//! - `convert` - resolution of ids, dates, and schedules into a `Portfolio`
//! - `error` - everything that can go wrong on the way

pub mod convert;
pub mod error;
pub mod portfolio_data;

use std::path::Path;

use munn_core::{Portfolio, ScheduleRegistry};

pub use convert::{parse_lax_date, to_portfolio};
pub use error::LoadError;
pub use portfolio_data::{
    AccountData, AdjustmentData, PortfolioData, RetirementData, TransactionData,
};

/// Read and convert a portfolio file
pub fn load_portfolio(path: &Path, registry: &ScheduleRegistry) -> Result<Portfolio, LoadError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_portfolio(&yaml, registry)
}

/// Decode and convert portfolio YAML
pub fn parse_portfolio(yaml: &str, registry: &ScheduleRegistry) -> Result<Portfolio, LoadError> {
    let data = PortfolioData::from_yaml(yaml)?;
    to_portfolio(&data, registry)
}
