//! Scheduled money movements
//!
//! A transaction links zero, one, or two accounts:
//! - both accounts: a transfer inside the portfolio
//! - source only: an expense leaving the portfolio
//! - destination only: income entering the portfolio
//! - neither: accepted but inert
//!
//! Transfers are balance-guarded: when the source cannot cover the amount the
//! schedule still consumes the firing, nothing moves, and the transaction
//! reports [`StateChange::TransferBlocked`]. Expenses are never blocked and may
//! drive an account negative.

use jiff::civil::Date;

use super::account::Account;
use super::ids::AccountId;
use super::schedule::Schedule;
use super::state_event::{BalanceChange, StateChange};

/// How a transaction affects the portfolio, derived from its account pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Transfer { from: AccountId, to: AccountId },
    Expense { from: AccountId },
    Income { to: AccountId },
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub description: String,
    pub from_account: Option<AccountId>,
    pub to_account: Option<AccountId>,
    /// Non-negative magnitude; direction comes from the account pair
    pub amount: f64,
    pub schedule: Schedule,
    /// First day the schedule is eligible to fire (inclusive)
    pub start: Option<Date>,
    /// Last day the schedule is eligible to fire (inclusive)
    pub stop: Option<Date>,
}

impl Transaction {
    pub fn new(description: impl Into<String>, schedule: Schedule, amount: f64) -> Self {
        Self {
            description: description.into(),
            from_account: None,
            to_account: None,
            amount,
            schedule,
            start: None,
            stop: None,
        }
    }

    #[must_use]
    pub fn from_account(mut self, account: AccountId) -> Self {
        self.from_account = Some(account);
        self
    }

    #[must_use]
    pub fn to_account(mut self, account: AccountId) -> Self {
        self.to_account = Some(account);
        self
    }

    #[must_use]
    pub fn starting(mut self, date: Date) -> Self {
        self.start = Some(date);
        self
    }

    #[must_use]
    pub fn until(mut self, date: Date) -> Self {
        self.stop = Some(date);
        self
    }

    pub fn kind(&self) -> TransactionKind {
        match (self.from_account, self.to_account) {
            (Some(from), Some(to)) => TransactionKind::Transfer { from, to },
            (Some(from), None) => TransactionKind::Expense { from },
            (None, Some(to)) => TransactionKind::Income { to },
            (None, None) => TransactionKind::Invalid,
        }
    }

    /// Whether `day` lies inside the optional [start, stop] window
    pub fn is_active_on(&self, day: Date) -> bool {
        self.start.is_none_or(|start| day >= start) && self.stop.is_none_or(|stop| day <= stop)
    }

    /// Anchor the schedule for a projection starting on `from`. The first
    /// firing is relative to the later of `from` and the start bound.
    pub(crate) fn anchor_at(&mut self, from: Date) {
        let anchor = self.start.map_or(from, |start| start.max(from));
        self.schedule.anchor_at(anchor);
    }

    /// Fire the transaction on `day` if it is in bounds and its schedule is due.
    ///
    /// Returns the change whenever the schedule fired, including a blocked
    /// transfer. Inert transactions never consult their schedule.
    pub fn apply(&mut self, day: Date, accounts: &mut [Account]) -> Option<StateChange> {
        let kind = self.kind();
        if kind == TransactionKind::Invalid || !self.is_active_on(day) {
            return None;
        }
        if !self.schedule.should_apply(day) {
            return None;
        }

        let legs = match kind {
            TransactionKind::Transfer { from, to } => {
                let available = accounts.get(from.index()).map_or(0.0, |a| a.balance);
                if available < self.amount {
                    return Some(StateChange::TransferBlocked {
                        description: self.description.clone(),
                        from,
                        to,
                        amount: self.amount,
                        available,
                    });
                }
                [
                    shift_balance(accounts, from, -self.amount),
                    shift_balance(accounts, to, self.amount),
                ]
                .into_iter()
                .flatten()
                .collect()
            }
            TransactionKind::Expense { from } => {
                shift_balance(accounts, from, -self.amount).into_iter().collect()
            }
            TransactionKind::Income { to } => {
                shift_balance(accounts, to, self.amount).into_iter().collect()
            }
            TransactionKind::Invalid => Vec::new(),
        };

        Some(StateChange::TransactionApplied {
            description: self.description.clone(),
            amount: self.amount,
            legs,
        })
    }
}

fn shift_balance(accounts: &mut [Account], id: AccountId, delta: f64) -> Option<BalanceChange> {
    let account = accounts.get_mut(id.index())?;
    let previous = account.balance;
    account.balance += delta;
    Some(BalanceChange {
        account_id: id,
        previous,
        new: account.balance,
    })
}
