//! Debug channel for projections
//!
//! A [`ProjectionObserver`] is handed to the projection call and told about
//! every [`StateChange`] as it happens. Observers only watch; nothing they do
//! can alter the outcome of the run.
//!
//! - `()` ignores everything (the default for [`crate::Portfolio::project`])
//! - [`TracingObserver`] narrates each change as a `tracing` debug event
//! - `Vec<LedgerEntry>` collects the full ledger in memory

use jiff::civil::Date;

use crate::model::{Account, AccountId, BalanceChange, LedgerEntry, StateChange};

pub trait ProjectionObserver {
    /// Called once per state change, in the order the engine applied them.
    /// `accounts` reflects the state right after the change.
    fn on_change(&mut self, date: Date, change: &StateChange, accounts: &[Account]);
}

impl ProjectionObserver for () {
    fn on_change(&mut self, _date: Date, _change: &StateChange, _accounts: &[Account]) {}
}

impl ProjectionObserver for Vec<LedgerEntry> {
    fn on_change(&mut self, date: Date, change: &StateChange, _accounts: &[Account]) {
        self.push(LedgerEntry::new(date, change.clone()));
    }
}

/// Emits one `tracing::debug!` event per change with before/after values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

fn account_name(accounts: &[Account], id: AccountId) -> &str {
    accounts
        .get(id.index())
        .map_or("<unknown>", |a| a.name.as_str())
}

impl ProjectionObserver for TracingObserver {
    fn on_change(&mut self, date: Date, change: &StateChange, accounts: &[Account]) {
        match change {
            StateChange::AdjustmentApplied(BalanceChange {
                account_id,
                previous,
                new,
            }) => {
                tracing::debug!(
                    %date,
                    account = account_name(accounts, *account_id),
                    previous = format_args!("{previous:.2}"),
                    new = format_args!("{new:.2}"),
                    "manual adjustment applied"
                );
            }
            StateChange::InterestAccrued {
                balance,
                annual_rate,
            } => {
                tracing::debug!(
                    %date,
                    account = account_name(accounts, balance.account_id),
                    annual_rate,
                    previous = format_args!("{:.2}", balance.previous),
                    new = format_args!("{:.2}", balance.new),
                    "interest accrued"
                );
            }
            StateChange::TransactionApplied {
                description,
                amount,
                legs,
            } => {
                for leg in legs {
                    tracing::debug!(
                        %date,
                        transaction = %description,
                        amount,
                        account = account_name(accounts, leg.account_id),
                        previous = format_args!("{:.2}", leg.previous),
                        new = format_args!("{:.2}", leg.new),
                        "transaction applied"
                    );
                }
            }
            StateChange::TransferBlocked {
                description,
                from,
                to,
                amount,
                available,
            } => {
                tracing::debug!(
                    %date,
                    transaction = %description,
                    from = account_name(accounts, *from),
                    to = account_name(accounts, *to),
                    amount,
                    available = format_args!("{available:.2}"),
                    "transfer skipped, insufficient funds"
                );
            }
            StateChange::RetirementReached {
                total_balance,
                balance_needed,
            } => {
                tracing::debug!(
                    %date,
                    total = format_args!("{total_balance:.2}"),
                    needed = format_args!("{balance_needed:.2}"),
                    "retirement balance reached"
                );
            }
        }
    }
}
