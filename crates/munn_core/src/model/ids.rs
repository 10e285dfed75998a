//! Handles for portfolio entities
//!
//! Handles are only ever produced by the [`crate::Portfolio`] factory methods,
//! so they always index a live entity of the portfolio that issued them.

use serde::{Deserialize, Serialize};

/// Handle to an Account within a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u16);

/// Handle to a Transaction within a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub u16);

impl AccountId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TransactionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
