//! Portfolio Builder
//!
//! A fluent API for assembling a [`Portfolio`] by account *name* instead of
//! handle. Names are resolved when [`PortfolioBuilder::build`] runs, so
//! accounts, adjustments, and transactions can be declared in any order.
//!
//! # Example
//!
//! ```ignore
//! use jiff::civil::{date, Weekday};
//! use munn_core::config::{AccountBuilder, PortfolioBuilder, TransactionBuilder};
//!
//! let portfolio = PortfolioBuilder::new()
//!     .account(AccountBuilder::new("Checking").balance_on(date(2024, 1, 1), 2_500.0))
//!     .account(AccountBuilder::new("Savings").interest_rate(0.04))
//!     .transaction(TransactionBuilder::income("Salary")
//!         .to_account("Checking")
//!         .amount(3_000.0)
//!         .biweekly(Weekday::Friday))
//!     .transaction(TransactionBuilder::expense("Rent")
//!         .from_account("Checking")
//!         .amount(1_400.0)
//!         .schedule("Monthly(1)"))
//!     .retirement(date(2080, 1, 1), 40_000.0)
//!     .build()?;
//! ```

use jiff::civil::{Date, Weekday};
use rustc_hash::FxHashMap;

use super::registry::ScheduleRegistry;
use crate::Portfolio;
use crate::error::BuildError;
use crate::model::{AccountId, RetirementPlan, Schedule, Transaction};

/// Builder for a single account and its starting balances
#[derive(Debug, Clone)]
pub struct AccountBuilder {
    name: String,
    interest_rate: Option<f64>,
    balances: Vec<(Date, f64)>,
}

impl AccountBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interest_rate: None,
            balances: Vec::new(),
        }
    }

    /// Annual interest rate as a fraction, credited monthly
    #[must_use]
    pub fn interest_rate(mut self, annual_rate: f64) -> Self {
        self.interest_rate = Some(annual_rate);
        self
    }

    /// Record a manual balance for this account as of `date`
    #[must_use]
    pub fn balance_on(mut self, date: Date, balance: f64) -> Self {
        self.balances.push((date, balance));
        self
    }
}

#[derive(Debug, Clone)]
enum ScheduleSpec {
    Ready(Schedule),
    Expression(String),
}

/// Builder for a scheduled transaction referencing accounts by name
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    description: String,
    from: Option<String>,
    to: Option<String>,
    amount: f64,
    schedule: Option<ScheduleSpec>,
    start: Option<Date>,
    stop: Option<Date>,
}

impl TransactionBuilder {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            from: None,
            to: None,
            amount: 0.0,
            schedule: None,
            start: None,
            stop: None,
        }
    }

    // =========================================================================
    // Presets (the account pair decides the kind; these only read better)
    // =========================================================================

    /// Money entering the portfolio; pair with [`Self::to_account`]
    #[must_use]
    pub fn income(description: impl Into<String>) -> Self {
        Self::new(description)
    }

    /// Money leaving the portfolio; pair with [`Self::from_account`]
    #[must_use]
    pub fn expense(description: impl Into<String>) -> Self {
        Self::new(description)
    }

    /// Money moving between two accounts; set both ends
    #[must_use]
    pub fn transfer(description: impl Into<String>) -> Self {
        Self::new(description)
    }

    // =========================================================================
    // Accounts and amount
    // =========================================================================

    #[must_use]
    pub fn from_account(mut self, name: impl Into<String>) -> Self {
        self.from = Some(name.into());
        self
    }

    #[must_use]
    pub fn to_account(mut self, name: impl Into<String>) -> Self {
        self.to = Some(name.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    // =========================================================================
    // Schedule and bounds
    // =========================================================================

    /// Schedule expression resolved through the builder's registry at build
    /// time, e.g. `"Weekly(Monday)"`
    #[must_use]
    pub fn schedule(mut self, expression: impl Into<String>) -> Self {
        self.schedule = Some(ScheduleSpec::Expression(expression.into()));
        self
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(ScheduleSpec::Ready(schedule));
        self
    }

    #[must_use]
    pub fn weekly(self, weekday: Weekday) -> Self {
        self.with_schedule(Schedule::weekly(weekday))
    }

    #[must_use]
    pub fn biweekly(self, weekday: Weekday) -> Self {
        self.with_schedule(Schedule::biweekly(weekday))
    }

    #[must_use]
    pub fn monthly(self, day: i8) -> Self {
        self.with_schedule(Schedule::monthly(day))
    }

    #[must_use]
    pub fn once(self, date: Date) -> Self {
        self.with_schedule(Schedule::once(date))
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
}

/// Builder for a whole portfolio
#[derive(Debug, Clone)]
pub struct PortfolioBuilder {
    registry: ScheduleRegistry,
    accounts: Vec<AccountBuilder>,
    adjustments: Vec<(String, Date, f64)>,
    transactions: Vec<TransactionBuilder>,
    retirement: Option<RetirementPlan>,
}

impl Default for PortfolioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ScheduleRegistry::with_defaults(),
            accounts: Vec::new(),
            adjustments: Vec::new(),
            transactions: Vec::new(),
            retirement: None,
        }
    }

    /// Use a custom registry for schedule expressions
    #[must_use]
    pub fn registry(mut self, registry: ScheduleRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn account(mut self, account: AccountBuilder) -> Self {
        self.accounts.push(account);
        self
    }

    /// Manual balance for an account declared anywhere in the builder
    #[must_use]
    pub fn adjustment(mut self, account: impl Into<String>, date: Date, balance: f64) -> Self {
        self.adjustments.push((account.into(), date, balance));
        self
    }

    #[must_use]
    pub fn transaction(mut self, transaction: TransactionBuilder) -> Self {
        self.transactions.push(transaction);
        self
    }

    #[must_use]
    pub fn retirement(mut self, death_date: Date, yearly_expenses: f64) -> Self {
        self.retirement = Some(RetirementPlan::new(death_date, yearly_expenses));
        self
    }

    /// Resolve names and schedules into a ready-to-project portfolio.
    ///
    /// Accounts keep declaration order. Adjustments given through
    /// [`AccountBuilder::balance_on`] are added before those given through
    /// [`Self::adjustment`].
    pub fn build(self) -> Result<Portfolio, BuildError> {
        let mut portfolio = Portfolio::new();
        let mut names: FxHashMap<String, AccountId> = FxHashMap::default();

        for account in &self.accounts {
            if names.contains_key(&account.name) {
                return Err(BuildError::DuplicateAccount(account.name.clone()));
            }
            let id = portfolio.add_account(account.name.clone(), account.interest_rate)?;
            names.insert(account.name.clone(), id);
        }

        let lookup = |name: &str| {
            names
                .get(name)
                .copied()
                .ok_or_else(|| BuildError::UnknownAccount(name.to_string()))
        };

        for account in &self.accounts {
            let id = lookup(&account.name)?;
            for &(date, balance) in &account.balances {
                portfolio.add_manual_adjustment(id, date, balance);
            }
        }
        for (name, date, balance) in &self.adjustments {
            portfolio.add_manual_adjustment(lookup(name)?, *date, *balance);
        }

        for tx in self.transactions {
            let schedule = match tx.schedule {
                Some(ScheduleSpec::Ready(schedule)) => schedule,
                Some(ScheduleSpec::Expression(expression)) => self
                    .registry
                    .parse(&expression)
                    .map_err(|source| BuildError::Schedule {
                        description: tx.description.clone(),
                        source,
                    })?,
                None => return Err(BuildError::MissingSchedule(tx.description)),
            };

            let mut transaction = Transaction::new(tx.description, schedule, tx.amount);
            transaction.from_account = tx.from.as_deref().map(lookup).transpose()?;
            transaction.to_account = tx.to.as_deref().map(lookup).transpose()?;
            transaction.start = tx.start;
            transaction.stop = tx.stop;
            portfolio.add_transaction(transaction)?;
        }

        if let Some(plan) = self.retirement {
            portfolio.set_retirement_plan(plan);
        }

        Ok(portfolio)
    }
}
