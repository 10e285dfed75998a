//! The portfolio container
//!
//! A [`Portfolio`] owns every account, manual adjustment, and transaction of a
//! projection. Entities are created through its factory methods, which hand
//! back typed handles; the projection engine ([`crate::projection`]) and the
//! statistics ([`crate::stats`]) operate on it afterwards.

use jiff::civil::Date;

use crate::error::CapacityError;
use crate::model::{
    Account, AccountId, ManualAdjustment, RetirementPlan, Transaction, TransactionId,
};

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub(crate) accounts: Vec<Account>,
    /// Kept sorted by date; equal dates keep insertion order
    pub(crate) manual_adjustments: Vec<ManualAdjustment>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) retirement_plan: Option<RetirementPlan>,
}

impl Portfolio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Add an account with a zero balance. Names are not required to be
    /// unique, but duplicates are ambiguous in the projection output.
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        interest_rate: Option<f64>,
    ) -> Result<AccountId, CapacityError> {
        let account_id = u16::try_from(self.accounts.len())
            .map(AccountId)
            .map_err(|_| CapacityError::TooManyAccounts)?;
        let mut account = Account::new(account_id, name);
        account.interest_rate = interest_rate;
        self.accounts.push(account);
        Ok(account_id)
    }

    /// Add a balance override. Adjustments are kept in date order, and
    /// adjustments sharing a date replay in the order they were added.
    pub fn add_manual_adjustment(&mut self, account: AccountId, date: Date, balance: f64) {
        let position = self
            .manual_adjustments
            .partition_point(|existing| existing.date <= date);
        self.manual_adjustments
            .insert(position, ManualAdjustment::new(account, date, balance));
    }

    pub fn add_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<TransactionId, CapacityError> {
        let id = u16::try_from(self.transactions.len())
            .map(TransactionId)
            .map_err(|_| CapacityError::TooManyTransactions)?;
        self.transactions.push(transaction);
        Ok(id)
    }

    pub fn set_retirement_plan(&mut self, plan: RetirementPlan) {
        self.retirement_plan = Some(plan);
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(id.index())
    }

    /// First account with the given name
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn manual_adjustments(&self) -> &[ManualAdjustment] {
        &self.manual_adjustments
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(id.index())
    }

    pub fn retirement_plan(&self) -> Option<&RetirementPlan> {
        self.retirement_plan.as_ref()
    }

    /// Date of the earliest manual adjustment, the natural start of a projection
    pub fn start_date(&self) -> Option<Date> {
        self.manual_adjustments.first().map(|adj| adj.date)
    }

    /// Sum of all account balances in their current state
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }
}
