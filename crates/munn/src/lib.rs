//! Command line front end for the munn projection engine
//!
//! Reads a YAML portfolio file, projects it with `munn_core`, and prints the
//! balance records followed by a short summary.

#![warn(clippy::all)]

pub mod cli;
pub mod data;
pub mod logging;
pub mod output;

#[cfg(test)]
mod tests;

use std::io::Write;

use color_eyre::eyre::WrapErr;
use jiff::civil::Date;
use munn_core::date_math::{add_days, add_years};
use munn_core::{Portfolio, ScheduleRegistry, TracingObserver};

pub use cli::{Args, RetirementArg};
pub use logging::init_logging;
pub use output::OutputFormat;

/// Load, project, and report a portfolio file according to `args`.
pub fn run(args: &Args, out: &mut impl Write) -> color_eyre::Result<()> {
    let registry = ScheduleRegistry::with_defaults();
    let mut portfolio = data::load_portfolio(&args.file, &registry)
        .wrap_err_with(|| format!("could not load portfolio {}", args.file.display()))?;

    if let Some(retire) = &args.retire {
        portfolio.set_retirement_plan(retire.plan());
    }

    if args.stats {
        writeln!(out, "{}", portfolio.stats())?;
    }

    let (from, to) = projection_bounds(args, &portfolio);
    tracing::info!(%from, %to, file = %args.file.display(), "projecting portfolio");

    let records = if args.debug {
        portfolio.project_with(from, to, &mut TracingObserver)
    } else {
        portfolio.project(from, to)
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Tsv
    };
    output::write_records(out, &records, format)?;
    output::write_summary(out, &portfolio)?;
    Ok(())
}

/// `[from, to)` for the run.
///
/// `--to` selects the date-range form. Otherwise the year count applies and
/// its last day is included.
fn projection_bounds(args: &Args, portfolio: &Portfolio) -> (Date, Date) {
    let today = || jiff::Zoned::now().date();
    match (args.from, args.to) {
        (from, Some(to)) => (from.or(portfolio.start_date()).unwrap_or_else(today), to),
        (Some(from), None) => (from, add_days(add_years(from, args.years), 1)),
        (None, None) => {
            let (from, to) = portfolio.projection_window(args.years);
            (from, add_days(to, 1))
        }
    }
}
