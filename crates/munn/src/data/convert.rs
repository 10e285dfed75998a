use std::collections::HashMap;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use munn_core::Portfolio;
use munn_core::ScheduleRegistry;
use munn_core::model::{AccountId, RetirementPlan, Transaction};

use super::error::LoadError;
use super::portfolio_data::{PortfolioData, RetirementData, TransactionData};

/// Convert a decoded portfolio file into an engine [`Portfolio`].
///
/// Schedule expressions are resolved through `registry`. Accounts keep file
/// order; everything that references an account id is checked here, so the
/// projection never sees a dangling handle.
pub fn to_portfolio(
    data: &PortfolioData,
    registry: &ScheduleRegistry,
) -> Result<Portfolio, LoadError> {
    let mut portfolio = Portfolio::new();
    let mut ids: HashMap<u32, AccountId> = HashMap::new();

    for account in &data.accounts {
        if ids.contains_key(&account.id) {
            return Err(LoadError::DuplicateAccountId(account.id));
        }
        let handle = portfolio.add_account(account.name.clone(), account.interest)?;
        ids.insert(account.id, handle);
    }

    for (index, adjustment) in data.manual_adjustments.iter().enumerate() {
        let entry = format!("manual adjustment #{}", index + 1);
        let account = resolve_account(&ids, adjustment.account, &entry)?;
        let balance = adjustment.balance.ok_or(LoadError::MissingField {
            entry: entry.clone(),
            field: "balance",
        })?;
        portfolio.add_manual_adjustment(account, parse_lax_date(&adjustment.date)?, balance);
    }

    for (index, transaction) in data.transactions.iter().enumerate() {
        portfolio.add_transaction(convert_transaction(transaction, index, &ids, registry)?)?;
    }

    if let Some(retirement) = &data.retirement {
        portfolio.set_retirement_plan(convert_retirement(retirement)?);
    }

    tracing::debug!(
        accounts = portfolio.accounts().len(),
        adjustments = portfolio.manual_adjustments().len(),
        transactions = portfolio.transactions().len(),
        "portfolio loaded"
    );
    Ok(portfolio)
}

fn convert_transaction(
    data: &TransactionData,
    index: usize,
    ids: &HashMap<u32, AccountId>,
    registry: &ScheduleRegistry,
) -> Result<Transaction, LoadError> {
    let entry = if data.description.is_empty() {
        format!("transaction #{}", index + 1)
    } else {
        format!("transaction {:?}", data.description)
    };

    let amount = data.amount.ok_or_else(|| LoadError::MissingField {
        entry: entry.clone(),
        field: "amount",
    })?;
    let expression = data.schedule.as_deref().ok_or_else(|| LoadError::MissingField {
        entry: entry.clone(),
        field: "schedule",
    })?;
    let schedule = registry
        .parse(expression)
        .map_err(|source| LoadError::Schedule {
            description: data.description.clone(),
            source,
        })?;

    let mut transaction = Transaction::new(data.description.clone(), schedule, amount);
    transaction.from_account = optional_account(ids, data.from, &entry)?;
    transaction.to_account = optional_account(ids, data.to, &entry)?;
    transaction.start = data.start.as_deref().map(parse_lax_date).transpose()?;
    transaction.stop = data.stop.as_deref().map(parse_lax_date).transpose()?;
    Ok(transaction)
}

fn convert_retirement(data: &RetirementData) -> Result<RetirementPlan, LoadError> {
    if !data.yearly_expenses.is_finite() || data.yearly_expenses < 0.0 {
        return Err(LoadError::InvalidRetirement(format!(
            "yearly expenses must be a non-negative number, got {}",
            data.yearly_expenses
        )));
    }
    Ok(RetirementPlan::new(
        parse_lax_date(&data.death_date)?,
        data.yearly_expenses,
    ))
}

fn resolve_account(
    ids: &HashMap<u32, AccountId>,
    id: u32,
    entry: &str,
) -> Result<AccountId, LoadError> {
    ids.get(&id).copied().ok_or_else(|| LoadError::UnknownAccount {
        entry: entry.to_string(),
        id,
    })
}

/// Id 0 stands for "no account"
fn optional_account(
    ids: &HashMap<u32, AccountId>,
    id: Option<u32>,
    entry: &str,
) -> Result<Option<AccountId>, LoadError> {
    match id {
        None | Some(0) => Ok(None),
        Some(id) => resolve_account(ids, id, entry).map(Some),
    }
}

/// Parse `YYYY-MM-DD`, falling back to an RFC3339 timestamp (taken in UTC)
pub fn parse_lax_date(value: &str) -> Result<Date, LoadError> {
    let value = value.trim();
    if let Ok(date) = value.parse::<Date>() {
        return Ok(date);
    }
    value
        .parse::<Timestamp>()
        .map(|ts| ts.to_zoned(TimeZone::UTC).date())
        .map_err(|_| LoadError::InvalidDate(value.to_string()))
}
