use std::path::PathBuf;

use munn_core::error::{CapacityError, ScheduleParseError};
use thiserror::Error;

/// Errors raised while reading a portfolio file into a `Portfolio`
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio YAML: {0}")]
    Yaml(#[from] serde_saphyr::Error),

    #[error("portfolio is too large: {0}")]
    Capacity(#[from] CapacityError),

    #[error("account id {0} is declared more than once")]
    DuplicateAccountId(u32),

    #[error("{entry} references unknown account id {id}")]
    UnknownAccount { entry: String, id: u32 },

    #[error("{entry} is missing required field `{field}`")]
    MissingField { entry: String, field: &'static str },

    #[error("invalid date {0:?}: expected YYYY-MM-DD or RFC3339")]
    InvalidDate(String),

    #[error("transaction {description:?} has an invalid schedule: {source}")]
    Schedule {
        description: String,
        #[source]
        source: ScheduleParseError,
    },

    #[error("invalid retirement plan: {0}")]
    InvalidRetirement(String),
}
