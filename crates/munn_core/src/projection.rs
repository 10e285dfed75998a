//! The day-stepped projection engine
//!
//! Each simulated day runs the same fixed pipeline:
//!
//! 1. pending manual adjustments (ground truth first)
//! 2. interest accrual (sees the adjusted balances)
//! 3. transactions (draw on balances including today's interest)
//! 4. retirement check against the portfolio total
//! 5. one [`ProjectionRecord`] per account if anything changed today
//!
//! The first day always counts as changed so callers get an opening snapshot.
//! Records come out grouped by day in ascending order, accounts in
//! declaration order.

use jiff::civil::Date;

use crate::Portfolio;
use crate::date_math::{add_days, add_years, days_between};
use crate::model::{ProjectionRecord, StateChange};
use crate::observer::ProjectionObserver;

impl Portfolio {
    /// Project balances from `from` (inclusive) to `to` (exclusive).
    ///
    /// An empty window (`to <= from`) still yields the opening snapshot for
    /// `from`, with no interest or transactions applied.
    pub fn project(&mut self, from: Date, to: Date) -> Vec<ProjectionRecord> {
        self.project_with(from, to, &mut ())
    }

    /// [`Self::project`] narrating every state change to `observer`.
    pub fn project_with(
        &mut self,
        from: Date,
        to: Date,
        observer: &mut dyn ProjectionObserver,
    ) -> Vec<ProjectionRecord> {
        tracing::debug!(
            %from,
            %to,
            accounts = self.accounts.len(),
            transactions = self.transactions.len(),
            "starting projection"
        );

        self.seed_balances(from, observer);
        self.anchor_schedules(from);

        let mut records = Vec::with_capacity(self.accounts.len() * 16);

        if to <= from {
            self.apply_adjustments(from, observer);
            self.check_retirement(from, observer);
            self.record(from, &mut records);
            return records;
        }

        let mut day = from;
        let mut changed = true;
        while day < to {
            changed |= self.step(day, observer);
            self.check_retirement(day, observer);
            if changed {
                self.record(day, &mut records);
            }
            changed = false;
            day = add_days(day, 1);
        }

        tracing::debug!(
            days = days_between(from, to),
            records = records.len(),
            "projection finished"
        );
        records
    }

    /// Project `years` years from the earliest manual adjustment (or today when
    /// there is none). The end date is included.
    pub fn project_years(&mut self, years: i64) -> Vec<ProjectionRecord> {
        self.project_years_with(years, &mut ())
    }

    /// [`Self::project_years`] narrating every state change to `observer`.
    pub fn project_years_with(
        &mut self,
        years: i64,
        observer: &mut dyn ProjectionObserver,
    ) -> Vec<ProjectionRecord> {
        let (from, to) = self.projection_window(years);
        self.project_with(from, add_days(to, 1), observer)
    }

    /// The `(from, to)` pair used by the year-count entry point, `to` inclusive.
    /// `to` saturates at `Date::MAX`.
    pub fn projection_window(&self, years: i64) -> (Date, Date) {
        let from = self
            .start_date()
            .unwrap_or_else(|| jiff::Zoned::now().date());
        (from, add_years(from, years))
    }

    /// Apply every adjustment dated before `from` so the run starts from known
    /// balances. These never produce records.
    fn seed_balances(&mut self, from: Date, observer: &mut dyn ProjectionObserver) {
        for adjustment in self
            .manual_adjustments
            .iter_mut()
            .take_while(|adj| adj.date < from)
        {
            if let Some(change) = adjustment.apply(adjustment.date, &mut self.accounts) {
                observer.on_change(adjustment.date, &change, &self.accounts);
            }
        }
    }

    fn anchor_schedules(&mut self, from: Date) {
        for account in &mut self.accounts {
            account.anchor_interest(from);
        }
        for transaction in &mut self.transactions {
            transaction.anchor_at(from);
        }
    }

    fn apply_adjustments(&mut self, day: Date, observer: &mut dyn ProjectionObserver) -> bool {
        let mut changed = false;
        for adjustment in self
            .manual_adjustments
            .iter_mut()
            .take_while(|adj| adj.date <= day)
        {
            if let Some(change) = adjustment.apply(day, &mut self.accounts) {
                observer.on_change(day, &change, &self.accounts);
                changed = true;
            }
        }
        changed
    }

    /// Run one simulated day; `true` if anything changed.
    fn step(&mut self, day: Date, observer: &mut dyn ProjectionObserver) -> bool {
        let mut changed = self.apply_adjustments(day, observer);

        for i in 0..self.accounts.len() {
            if let Some(change) = self.accounts[i].gain_interest(day) {
                observer.on_change(day, &change, &self.accounts);
                changed = true;
            }
        }

        for transaction in &mut self.transactions {
            if let Some(change) = transaction.apply(day, &mut self.accounts) {
                observer.on_change(day, &change, &self.accounts);
                changed = true;
            }
        }

        changed
    }

    fn check_retirement(&mut self, day: Date, observer: &mut dyn ProjectionObserver) {
        let total = self.total_balance();
        let Some(plan) = self.retirement_plan.as_mut() else {
            return;
        };
        if plan.check(day, total) {
            let change = StateChange::RetirementReached {
                total_balance: total,
                balance_needed: plan.balance_needed(day),
            };
            observer.on_change(day, &change, &self.accounts);
        }
    }

    fn record(&self, day: Date, records: &mut Vec<ProjectionRecord>) {
        records.extend(self.accounts.iter().map(|account| ProjectionRecord {
            date: day,
            account_name: account.name.clone(),
            balance: account.balance,
        }));
    }
}
