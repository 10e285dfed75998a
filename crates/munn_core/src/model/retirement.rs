//! Retirement feasibility
//!
//! A plan answers "how much would I need today to cover every remaining year
//! of expenses until the end date?" and remembers the first simulated day the
//! portfolio total exceeded that figure.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::whole_years_between;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub death_date: Date,
    pub yearly_expenses: f64,
    #[serde(skip)]
    retire_date: Option<Date>,
}

impl RetirementPlan {
    pub fn new(death_date: Date, yearly_expenses: f64) -> Self {
        Self {
            death_date,
            yearly_expenses,
            retire_date: None,
        }
    }

    /// Whole years remaining until the death date (truncated) times yearly
    /// expenses. Recomputed on every call.
    pub fn balance_needed(&self, day: Date) -> f64 {
        whole_years_between(day, self.death_date) as f64 * self.yearly_expenses
    }

    /// First day the portfolio total exceeded [`Self::balance_needed`]
    pub fn retire_date(&self) -> Option<Date> {
        self.retire_date
    }

    /// Record `day` as the retirement date if this is the first day `total`
    /// exceeds the balance needed. Returns `true` only on that first crossing.
    pub fn check(&mut self, day: Date, total: f64) -> bool {
        if self.retire_date.is_some() || total <= self.balance_needed(day) {
            return false;
        }
        self.retire_date = Some(day);
        true
    }
}
