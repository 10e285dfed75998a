//! Schedule expression registry
//!
//! Maps schedule kind names to parsing functions so that decoders can turn
//! expressions like `Weekly(Monday)` or `Once(2025-06-01)` into a
//! [`Schedule`] without knowing every kind up front. A registry is an
//! ordinary value: build it once at startup (usually with
//! [`ScheduleRegistry::with_defaults`]) and pass it to whatever parses input.
//!
//! Expression syntax is `Kind` or `Kind(arg1 arg2 ...)`; arguments may be
//! separated by whitespace or commas.

use jiff::civil::{Date, Weekday};
use rustc_hash::FxHashMap;

use crate::error::{RegistryError, ScheduleParseError};
use crate::model::Schedule;

/// Turns a literal argument list into a fully constructed schedule
pub type ScheduleParser = fn(&[&str]) -> Result<Schedule, ScheduleParseError>;

#[derive(Debug, Clone, Default)]
pub struct ScheduleRegistry {
    parsers: FxHashMap<String, ScheduleParser>,
}

impl ScheduleRegistry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in kinds: Weekly, Biweekly, Monthly, Once
    #[must_use]
    pub fn with_defaults() -> Self {
        let builtin: [(&str, ScheduleParser); 4] = [
            ("Weekly", parse_weekly),
            ("Biweekly", parse_biweekly),
            ("Monthly", parse_monthly),
            ("Once", parse_once),
        ];
        Self {
            parsers: builtin
                .into_iter()
                .map(|(name, parser)| (name.to_string(), parser))
                .collect(),
        }
    }

    /// Register a new kind. Registering a name twice is an error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        parser: ScheduleParser,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.parsers.contains_key(&name) {
            return Err(RegistryError::DuplicateKind(name));
        }
        self.parsers.insert(name, parser);
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.parsers.contains_key(name)
    }

    /// Registered kind names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Parse a full expression such as `Monthly(15)`.
    pub fn parse(&self, expression: &str) -> Result<Schedule, ScheduleParseError> {
        let (kind, args) = split_expression(expression)?;
        let parser = self
            .parsers
            .get(kind)
            .ok_or_else(|| ScheduleParseError::UnknownKind(kind.to_string()))?;
        parser(&args)
    }
}

fn split_expression(expression: &str) -> Result<(&str, Vec<&str>), ScheduleParseError> {
    let invalid = || ScheduleParseError::InvalidExpression(expression.to_string());
    let expression = expression.trim();

    let (kind, inner) = match expression.find('(') {
        Some(open) => {
            let inner = expression[open + 1..]
                .strip_suffix(')')
                .ok_or_else(invalid)?;
            (expression[..open].trim_end(), inner)
        }
        None => (expression, ""),
    };

    if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid());
    }
    if inner.contains(['(', ')']) {
        return Err(invalid());
    }

    let args = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|arg| !arg.is_empty())
        .collect();
    Ok((kind, args))
}

/// Parse a weekday name, case-insensitively (`monday`, `Monday`, `MONDAY`)
pub fn parse_weekday(value: &str) -> Result<Weekday, ScheduleParseError> {
    let weekday = match value.to_ascii_lowercase().as_str() {
        "sunday" => Weekday::Sunday,
        "monday" => Weekday::Monday,
        "tuesday" => Weekday::Tuesday,
        "wednesday" => Weekday::Wednesday,
        "thursday" => Weekday::Thursday,
        "friday" => Weekday::Friday,
        "saturday" => Weekday::Saturday,
        _ => return Err(ScheduleParseError::InvalidWeekday(value.to_string())),
    };
    Ok(weekday)
}

fn at_most(kind: &'static str, args: &[&str], max: usize) -> Result<(), ScheduleParseError> {
    if args.len() > max {
        return Err(ScheduleParseError::TooManyArguments {
            kind,
            max,
            got: args.len(),
        });
    }
    Ok(())
}

/// `Weekly` or `Weekly(<weekday>)`; defaults to Sunday
pub fn parse_weekly(args: &[&str]) -> Result<Schedule, ScheduleParseError> {
    at_most("Weekly", args, 1)?;
    let weekday = args.first().map_or(Ok(Weekday::Sunday), |a| parse_weekday(a))?;
    Ok(Schedule::weekly(weekday))
}

/// `Biweekly` or `Biweekly(<weekday>)`; defaults to Sunday
pub fn parse_biweekly(args: &[&str]) -> Result<Schedule, ScheduleParseError> {
    at_most("Biweekly", args, 1)?;
    let weekday = args.first().map_or(Ok(Weekday::Sunday), |a| parse_weekday(a))?;
    Ok(Schedule::biweekly(weekday))
}

/// `Monthly` or `Monthly(<day 1-31>)`; defaults to the 1st
pub fn parse_monthly(args: &[&str]) -> Result<Schedule, ScheduleParseError> {
    at_most("Monthly", args, 1)?;
    let day = match args.first() {
        Some(arg) => arg
            .parse::<i8>()
            .ok()
            .filter(|day| (1..=31).contains(day))
            .ok_or_else(|| ScheduleParseError::InvalidDayOfMonth(arg.to_string()))?,
        None => 1,
    };
    Ok(Schedule::monthly(day))
}

/// `Once(<YYYY-MM-DD>)`
pub fn parse_once(args: &[&str]) -> Result<Schedule, ScheduleParseError> {
    at_most("Once", args, 1)?;
    let arg = args.first().ok_or(ScheduleParseError::MissingArgument {
        kind: "Once",
        what: "a date",
    })?;
    let date = arg
        .parse::<Date>()
        .map_err(|e| ScheduleParseError::InvalidDate {
            value: arg.to_string(),
            reason: e.to_string(),
        })?;
    Ok(Schedule::once(date))
}
