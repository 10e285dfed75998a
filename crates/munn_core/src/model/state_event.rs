//! State changes - the narration of a projection
//!
//! Every mutation the engine performs is described by a [`StateChange`].
//! Entities return one from their apply operation when they changed
//! something; the engine forwards it to the run's observer together with the
//! simulated day. Collected into [`LedgerEntry`] values they form an audit
//! trail of the projection.

use super::ids::AccountId;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A ledger entry recording a state change with the day it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: Date,
    pub change: StateChange,
}

impl LedgerEntry {
    pub fn new(date: Date, change: StateChange) -> Self {
        Self { date, change }
    }
}

/// Before/after balance of a single account touched by a change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceChange {
    pub account_id: AccountId,
    pub previous: f64,
    pub new: f64,
}

/// All possible state mutations in a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StateChange {
    /// A manual adjustment overwrote an account balance
    AdjustmentApplied(BalanceChange),

    /// Monthly interest was credited to an account
    InterestAccrued {
        balance: BalanceChange,
        annual_rate: f64,
    },

    /// A transaction fired and moved money; one leg per touched account
    TransactionApplied {
        description: String,
        amount: f64,
        legs: Vec<BalanceChange>,
    },

    /// A transfer fired but the source could not cover it, so no money moved
    TransferBlocked {
        description: String,
        from: AccountId,
        to: AccountId,
        amount: f64,
        available: f64,
    },

    /// The portfolio total first exceeded what the retirement plan needs
    RetirementReached {
        total_balance: f64,
        balance_needed: f64,
    },
}
