//! Calendar recurrence rules
//!
//! A [`Schedule`] answers "should this fire on day D?" given the day it last
//! fired. Each variant carries only the state it needs: recurring kinds keep a
//! last-fired date, the one-shot kind keeps an applied flag.
//!
//! The decision itself is the pure [`Schedule::fire`]; [`Schedule::should_apply`]
//! is the stateful convenience that stores the advanced cursor.

use std::fmt;

use jiff::civil::{Date, Weekday};

use crate::date_math::{
    add_days, checked_add_days, checked_add_months_normalized, checked_normalized_date,
    normalized_date, previous_or_same_weekday,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Every week on `weekday`.
    Weekly {
        weekday: Weekday,
        last_fired: Option<Date>,
    },
    /// Every other week on `weekday`.
    Biweekly {
        weekday: Weekday,
        last_fired: Option<Date>,
    },
    /// Every month on `day`. Days past the end of a month roll into the next
    /// one (day 31 in April fires on May 1st).
    Monthly { day: i8, last_fired: Option<Date> },
    /// A single firing on or after `date`.
    Once { date: Date, applied: bool },
}

impl Schedule {
    pub fn weekly(weekday: Weekday) -> Self {
        Schedule::Weekly {
            weekday,
            last_fired: None,
        }
    }

    pub fn biweekly(weekday: Weekday) -> Self {
        Schedule::Biweekly {
            weekday,
            last_fired: None,
        }
    }

    pub fn monthly(day: i8) -> Self {
        Schedule::Monthly {
            day,
            last_fired: None,
        }
    }

    pub fn once(date: Date) -> Self {
        Schedule::Once {
            date,
            applied: false,
        }
    }

    /// Registry name of this schedule kind
    pub fn kind(&self) -> &'static str {
        match self {
            Schedule::Weekly { .. } => "Weekly",
            Schedule::Biweekly { .. } => "Biweekly",
            Schedule::Monthly { .. } => "Monthly",
            Schedule::Once { .. } => "Once",
        }
    }

    /// The last day this schedule fired, if it is a recurring kind that has
    /// fired (or been anchored) before.
    pub fn last_fired(&self) -> Option<Date> {
        match *self {
            Schedule::Weekly { last_fired, .. }
            | Schedule::Biweekly { last_fired, .. }
            | Schedule::Monthly { last_fired, .. } => last_fired,
            Schedule::Once { date, applied } => applied.then_some(date),
        }
    }

    /// Earliest day on which the schedule would fire next.
    ///
    /// A recurring schedule that has never fired nor been anchored is due
    /// immediately (`Date::MIN`). An applied `Once` is never due again, and
    /// neither is a recurring schedule whose next step runs past `Date::MAX`.
    pub fn next_due(&self) -> Option<Date> {
        match *self {
            Schedule::Weekly {
                weekday,
                last_fired,
            } => match last_fired {
                Some(last) => checked_add_days(last, 7)
                    .map(|step| previous_or_same_weekday(step, weekday)),
                None => Some(Date::MIN),
            },
            Schedule::Biweekly {
                weekday,
                last_fired,
            } => match last_fired {
                Some(last) => checked_add_days(last, 14)
                    .map(|step| previous_or_same_weekday(step, weekday)),
                None => Some(Date::MIN),
            },
            Schedule::Monthly { day, last_fired } => match last_fired {
                // The target month is taken from last + 1 month *after*
                // normalization, so firing on Jan 31 targets March.
                Some(last) => checked_add_months_normalized(last, 1).and_then(|month_after| {
                    checked_normalized_date(
                        month_after.year() as i32,
                        month_after.month() as i32,
                        day as i32,
                    )
                }),
                None => Some(Date::MIN),
            },
            Schedule::Once { date, applied } => (!applied).then_some(date),
        }
    }

    /// Pure evaluation: the schedule as it is after firing on `day`, or `None`
    /// when it does not fire.
    pub fn fire(self, day: Date) -> Option<Schedule> {
        let due = self.next_due()?;
        if day < due {
            return None;
        }

        let fired = match self {
            Schedule::Weekly { weekday, .. } => Schedule::Weekly {
                weekday,
                last_fired: Some(day),
            },
            Schedule::Biweekly { weekday, .. } => Schedule::Biweekly {
                weekday,
                last_fired: Some(day),
            },
            Schedule::Monthly { day: dom, .. } => Schedule::Monthly {
                day: dom,
                last_fired: Some(day),
            },
            Schedule::Once { date, .. } => Schedule::Once {
                date,
                applied: true,
            },
        };
        Some(fired)
    }

    /// Fire on `day` if due, advancing the cursor. Calling it again for the
    /// same day after it fired returns `false`.
    pub fn should_apply(&mut self, day: Date) -> bool {
        match self.fire(day) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Anchor a fresh recurring schedule so that its first firing is the first
    /// matching day on or after `anchor`.
    ///
    /// This seeds the cursor with a virtual previous firing. A `Once` dated
    /// before `anchor` is consumed without firing: its effect is already part
    /// of whatever balances the run starts from. Schedules that already fired
    /// are left untouched.
    pub fn anchor_at(&mut self, anchor: Date) {
        match self {
            Schedule::Weekly { last_fired, .. } if last_fired.is_none() => {
                *last_fired = Some(add_days(anchor, -1));
            }
            Schedule::Biweekly { last_fired, .. } if last_fired.is_none() => {
                *last_fired = Some(add_days(anchor, -8));
            }
            Schedule::Monthly { day, last_fired } if last_fired.is_none() => {
                let (year, month) = (anchor.year() as i32, anchor.month() as i32);
                let this_month = normalized_date(year, month, *day as i32);
                let target_month = if this_month >= anchor { month } else { month + 1 };
                *last_fired = Some(normalized_date(year, target_month - 1, 1));
            }
            Schedule::Once { date, applied } if *date < anchor => {
                *applied = true;
            }
            _ => {}
        }
    }

    /// Expected firings per year, for statistics only. A one-time event is
    /// excluded from annualized figures.
    pub fn yearly_factor(&self) -> f64 {
        match self {
            Schedule::Weekly { .. } => 52.0,
            Schedule::Biweekly { .. } => 26.0,
            Schedule::Monthly { .. } => 12.0,
            Schedule::Once { .. } => 0.0,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::Weekly { weekday, .. } | Schedule::Biweekly { weekday, .. } => {
                write!(f, "{}({weekday:?})", self.kind())
            }
            Schedule::Monthly { day, .. } => write!(f, "Monthly({day})"),
            Schedule::Once { date, .. } => write!(f, "Once({date})"),
        }
    }
}
