//! Annualized cash-flow statistics
//!
//! A static estimate derived from transaction schedules alone: each
//! transaction contributes `amount × yearly_factor`. Nothing here runs the
//! projection loop or looks at balances.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Portfolio;
use crate::model::TransactionKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub average_monthly_expenses: f64,
    pub average_monthly_income: f64,
    pub average_monthly_growth: f64,
}

impl Portfolio {
    /// Average monthly expenses, income, and growth implied by the schedules.
    ///
    /// Transactions without a destination count as expenses, those with a
    /// destination (income and transfers) as income. Inert transactions and
    /// one-time events contribute nothing.
    pub fn stats(&self) -> PortfolioStats {
        let mut yearly_expenses = 0.0;
        let mut yearly_income = 0.0;

        for transaction in &self.transactions {
            let yearly = transaction.amount * transaction.schedule.yearly_factor();
            match transaction.kind() {
                TransactionKind::Expense { .. } => yearly_expenses += yearly,
                TransactionKind::Income { .. } | TransactionKind::Transfer { .. } => {
                    yearly_income += yearly
                }
                TransactionKind::Invalid => {}
            }
        }

        PortfolioStats {
            average_monthly_expenses: yearly_expenses / 12.0,
            average_monthly_income: yearly_income / 12.0,
            average_monthly_growth: (yearly_income - yearly_expenses) / 12.0,
        }
    }
}

impl fmt::Display for PortfolioStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average monthly expenses:  ${:.2}",
            self.average_monthly_expenses
        )?;
        writeln!(
            f,
            "Average monthly income:    ${:.2}",
            self.average_monthly_income
        )?;
        write!(
            f,
            "Average monthly growth:    ${:.2}",
            self.average_monthly_growth
        )
    }
}
