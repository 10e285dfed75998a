//! Accounts and the balance overrides that seed them

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::schedule::Schedule;
use super::state_event::{BalanceChange, StateChange};

/// A named balance, optionally earning compounding monthly interest
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub account_id: AccountId,
    pub name: String,
    pub balance: f64,
    /// Annual rate as a fraction (0.05 = 5%/yr), credited monthly
    pub interest_rate: Option<f64>,
    interest_schedule: Option<Schedule>,
}

impl Account {
    pub fn new(account_id: AccountId, name: impl Into<String>) -> Self {
        Self {
            account_id,
            name: name.into(),
            balance: 0.0,
            interest_rate: None,
            interest_schedule: None,
        }
    }

    #[must_use]
    pub fn with_interest_rate(mut self, annual_rate: f64) -> Self {
        self.interest_rate = Some(annual_rate);
        self
    }

    /// The accrual cursor, once interest has been anchored or accrued
    pub fn interest_schedule(&self) -> Option<&Schedule> {
        self.interest_schedule.as_ref()
    }

    /// Anchor the monthly accrual so its first firing is the first 1st-of-month
    /// on or after `anchor`.
    pub(crate) fn anchor_interest(&mut self, anchor: Date) {
        if self.interest_rate.is_some() {
            self.interest_schedule
                .get_or_insert(Schedule::monthly(1))
                .anchor_at(anchor);
        }
    }

    /// Credit a month of interest if the accrual schedule fires on `day`.
    ///
    /// Accounts without a rate never accrue. The Monthly(1) schedule is created
    /// on first use when the engine has not anchored one.
    pub fn gain_interest(&mut self, day: Date) -> Option<StateChange> {
        let annual_rate = self.interest_rate?;
        let schedule = self.interest_schedule.get_or_insert(Schedule::monthly(1));
        if !schedule.should_apply(day) {
            return None;
        }

        let previous = self.balance;
        self.balance *= 1.0 + annual_rate / 12.0;
        Some(StateChange::InterestAccrued {
            balance: BalanceChange {
                account_id: self.account_id,
                previous,
                new: self.balance,
            },
            annual_rate,
        })
    }
}

/// An authoritative balance for an account as of a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualAdjustment {
    pub account_id: AccountId,
    pub date: Date,
    /// Absolute balance, not a delta
    pub balance: f64,
    #[serde(skip)]
    applied: bool,
}

impl ManualAdjustment {
    pub fn new(account_id: AccountId, date: Date, balance: f64) -> Self {
        Self {
            account_id,
            date,
            balance,
            applied: false,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Overwrite the account balance once `day` reaches the adjustment date.
    pub fn apply(&mut self, day: Date, accounts: &mut [Account]) -> Option<StateChange> {
        if self.applied || day < self.date {
            return None;
        }
        let account = accounts.get_mut(self.account_id.index())?;

        self.applied = true;
        let previous = account.balance;
        account.balance = self.balance;
        Some(StateChange::AdjustmentApplied(BalanceChange {
            account_id: self.account_id,
            previous,
            new: account.balance,
        }))
    }
}
