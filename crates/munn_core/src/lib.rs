//! Balance projection library
//!
//! Projects the future balances of a set of accounts from manual balance
//! snapshots, scheduled transactions, and monthly compounding interest. It
//! supports:
//! - Weekly, biweekly, monthly, and one-time schedules with calendar
//!   normalization
//! - Transfers, expenses, and income between zero, one, or two accounts
//! - A retirement check against remaining yearly expenses
//! - Annualized cash-flow statistics
//! - A debug channel narrating every state change through an observer
//!
//! # Builder DSL
//!
//! ```ignore
//! use jiff::civil::date;
//! use munn_core::config::{AccountBuilder, PortfolioBuilder, TransactionBuilder};
//!
//! let mut portfolio = PortfolioBuilder::new()
//!     .account(AccountBuilder::new("Checking").balance_on(date(2024, 1, 1), 2_500.0))
//!     .account(AccountBuilder::new("Savings").interest_rate(0.04))
//!     .transaction(TransactionBuilder::transfer("Save")
//!         .from_account("Checking")
//!         .to_account("Savings")
//!         .amount(200.0)
//!         .schedule("Monthly(15)"))
//!     .build()?;
//!
//! let records = portfolio.project(date(2024, 1, 1), date(2025, 1, 1));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod observer;
pub mod portfolio;
pub mod projection;
pub mod stats;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{AccountBuilder, PortfolioBuilder, ScheduleRegistry, TransactionBuilder};
pub use observer::{ProjectionObserver, TracingObserver};
pub use portfolio::Portfolio;
pub use stats::PortfolioStats;
