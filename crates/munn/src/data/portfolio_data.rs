use serde::{Deserialize, Serialize};

/// Portfolio file as written by hand, accounts referenced by numeric id
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioData {
    #[serde(default)]
    pub accounts: Vec<AccountData>,
    #[serde(default)]
    pub manual_adjustments: Vec<AdjustmentData>,
    #[serde(default)]
    pub transactions: Vec<TransactionData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retirement: Option<RetirementData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountData {
    pub id: u32,
    pub name: String,
    /// Annual rate as a fraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdjustmentData {
    pub account: u32,
    pub date: String, // "2024-01-01" or RFC3339
    #[serde(default)]
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionData {
    /// Source account id; missing or 0 means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    /// Destination account id; missing or 0 means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    /// Schedule expression such as `Monthly(15)`
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetirementData {
    pub death_date: String,
    pub yearly_expenses: f64,
}

impl PortfolioData {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}
