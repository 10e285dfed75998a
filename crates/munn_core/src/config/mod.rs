//! Portfolio configuration
//!
//! Two ways in: the [`ScheduleRegistry`] that turns schedule expressions into
//! [`crate::model::Schedule`] values, and the builder DSL that assembles a
//! [`crate::Portfolio`] by account name.
//!
//! ```ignore
//! use munn_core::config::{AccountBuilder, PortfolioBuilder, TransactionBuilder};
//!
//! let mut portfolio = PortfolioBuilder::new()
//!     .account(AccountBuilder::new("Checking").balance_on(date(2024, 1, 1), 1_000.0))
//!     .transaction(TransactionBuilder::expense("Groceries")
//!         .from_account("Checking")
//!         .amount(50.0)
//!         .schedule("Weekly(Monday)"))
//!     .build()?;
//! ```

pub mod builder;
pub mod registry;

pub use builder::{AccountBuilder, PortfolioBuilder, TransactionBuilder};
pub use registry::{
    ScheduleParser, ScheduleRegistry, parse_biweekly, parse_monthly, parse_once, parse_weekday,
    parse_weekly,
};
