use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One observed account balance on a day where something changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRecord {
    pub date: Date,
    pub account_name: String,
    pub balance: f64,
}
