use thiserror::Error;

/// Errors produced while turning a schedule expression such as
/// `Weekly(Monday)` into a [`crate::model::Schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleParseError {
    #[error("unknown schedule kind: {0}")]
    UnknownKind(String),

    #[error("invalid schedule expression: {0:?}")]
    InvalidExpression(String),

    #[error("invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("invalid day of month: {0} (expected 1-31)")]
    InvalidDayOfMonth(String),

    #[error("{kind} schedule requires {what}")]
    MissingArgument { kind: &'static str, what: &'static str },

    #[error("{kind} schedule takes at most {max} argument(s), got {got}")]
    TooManyArguments {
        kind: &'static str,
        max: usize,
        got: usize,
    },

    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },
}

/// Errors raised while assembling a [`crate::config::ScheduleRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("schedule kind {0:?} is already registered")]
    DuplicateKind(String),
}

/// A portfolio ran out of handles: at most 65,536 accounts and 65,536
/// transactions fit in one portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityError {
    #[error("too many accounts (at most 65536)")]
    TooManyAccounts,

    #[error("too many transactions (at most 65536)")]
    TooManyTransactions,
}

/// Errors raised by [`crate::config::PortfolioBuilder::build`] when names
/// cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("account {0:?} not found")]
    UnknownAccount(String),

    #[error("account {0:?} declared more than once")]
    DuplicateAccount(String),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error("transaction {0:?} has no schedule")]
    MissingSchedule(String),

    #[error("transaction {description:?} has an invalid schedule: {source}")]
    Schedule {
        description: String,
        #[source]
        source: ScheduleParseError,
    },
}
