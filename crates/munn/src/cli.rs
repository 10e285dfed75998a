use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use jiff::civil::Date;
use munn_core::date_math::MAX_YEARS;
use munn_core::model::RetirementPlan;
use thiserror::Error;

#[derive(Parser, Debug, Clone)]
#[command(name = "munn", version)]
#[command(about = "Project future account balances from scheduled transactions")]
pub struct Args {
    /// Portfolio file (YAML)
    pub file: PathBuf,

    /// Number of years to project
    #[arg(
        short,
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(i64).range(0..=MAX_YEARS)
    )]
    pub years: i64,

    /// First day of the projection (default: earliest manual adjustment)
    #[arg(long)]
    pub from: Option<Date>,

    /// Day the projection stops, exclusive; overrides --years
    #[arg(long)]
    pub to: Option<Date>,

    /// Print average monthly income, expenses, and growth
    #[arg(short, long)]
    pub stats: bool,

    /// Narrate every balance change to the log
    #[arg(short, long)]
    pub debug: bool,

    /// Retirement plan as DEATH_DATE:YEARLY_EXPENSES, e.g. 2080-01-01:40000
    #[arg(short, long, value_name = "DEATH_DATE:YEARLY_EXPENSES")]
    pub retire: Option<RetirementArg>,

    /// Print records as a JSON array instead of tab-separated lines
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// `--retire` value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetirementArg {
    pub death_date: Date,
    pub yearly_expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetirementArgError {
    #[error("expected DEATH_DATE:YEARLY_EXPENSES, got {0:?}")]
    Format(String),

    #[error("invalid death date {0:?}")]
    Date(String),

    #[error("invalid yearly expenses {0:?}")]
    Expenses(String),
}

impl FromStr for RetirementArg {
    type Err = RetirementArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, expenses) = s
            .split_once(':')
            .ok_or_else(|| RetirementArgError::Format(s.to_string()))?;

        let death_date = date
            .trim()
            .parse::<Date>()
            .map_err(|_| RetirementArgError::Date(date.to_string()))?;
        let yearly_expenses = expenses
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| RetirementArgError::Expenses(expenses.to_string()))?;

        Ok(Self {
            death_date,
            yearly_expenses,
        })
    }
}

impl RetirementArg {
    pub fn plan(&self) -> RetirementPlan {
        RetirementPlan::new(self.death_date, self.yearly_expenses)
    }
}
