mod account;
mod ids;
mod records;
mod retirement;
mod schedule;
mod state_event;
mod transaction;

pub use account::{Account, ManualAdjustment};
pub use ids::{AccountId, TransactionId};
pub use records::ProjectionRecord;
pub use retirement::RetirementPlan;
pub use schedule::Schedule;
pub use state_event::{BalanceChange, LedgerEntry, StateChange};
pub use transaction::{Transaction, TransactionKind};
