//! Tests for annualized cash-flow statistics

use jiff::civil::{Weekday, date};

use super::assert_close;
use crate::model::{Schedule, Transaction};
use crate::{Portfolio, PortfolioStats};

/// Test each kind lands in the right bucket
#[test]
fn test_stats_buckets() {
    let mut portfolio = Portfolio::new();
    let checking = portfolio.add_account("Checking", None).unwrap();
    let savings = portfolio.add_account("Savings", None).unwrap();

    portfolio
        .add_transaction(
            Transaction::new("Groceries", Schedule::weekly(Weekday::Monday), 50.0)
                .from_account(checking),
        )
        .unwrap();
    portfolio
        .add_transaction(
            Transaction::new("Salary", Schedule::monthly(1), 3_000.0).to_account(checking),
        )
        .unwrap();
    portfolio
        .add_transaction(
            Transaction::new("Save", Schedule::biweekly(Weekday::Friday), 100.0)
                .from_account(checking)
                .to_account(savings),
        )
        .unwrap();
    portfolio
        .add_transaction(
            Transaction::new("Bonus", Schedule::once(date(2024, 12, 1)), 10_000.0)
                .to_account(checking),
        )
        .unwrap();
    portfolio.add_transaction(Transaction::new("Nothing", Schedule::monthly(1), 999.0)).unwrap();

    let stats = portfolio.stats();

    let yearly_expenses = 50.0 * 52.0;
    let yearly_income = 3_000.0 * 12.0 + 100.0 * 26.0;
    assert_close(stats.average_monthly_expenses, yearly_expenses / 12.0);
    assert_close(stats.average_monthly_income, yearly_income / 12.0);
    assert_close(
        stats.average_monthly_growth,
        (yearly_income - yearly_expenses) / 12.0,
    );
}

/// Test stats never run the projection
#[test]
fn test_stats_leave_state_untouched() {
    let mut portfolio = Portfolio::new();
    let checking = portfolio.add_account("Checking", None).unwrap();
    portfolio
        .add_transaction(
            Transaction::new("Salary", Schedule::monthly(1), 3_000.0).to_account(checking),
        )
        .unwrap();

    let before = portfolio.transactions()[0].schedule;
    let _ = portfolio.stats();

    assert_eq!(portfolio.transactions()[0].schedule, before);
    assert_eq!(portfolio.total_balance(), 0.0);
}

/// Test an empty portfolio reports zeros
#[test]
fn test_stats_empty_portfolio() {
    assert_eq!(Portfolio::new().stats(), PortfolioStats::default());
}

/// Test the printed stats block
#[test]
fn test_stats_display() {
    let stats = PortfolioStats {
        average_monthly_expenses: 216.666_666,
        average_monthly_income: 3_216.666_666,
        average_monthly_growth: 3_000.0,
    };

    assert_eq!(
        stats.to_string(),
        "Average monthly expenses:  $216.67\n\
         Average monthly income:    $3216.67\n\
         Average monthly growth:    $3000.00"
    );
}
