//! Report printing
//!
//! Records print one per line as `YYYY-MM-DD<TAB>account<TAB>balance`, or as
//! a single JSON array. A summary of the final total and the retirement date
//! follows.

use std::io::{self, Write};

use munn_core::Portfolio;
use munn_core::model::ProjectionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

pub fn write_records(
    out: &mut impl Write,
    records: &[ProjectionRecord],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tsv => {
            for record in records {
                writeln!(
                    out,
                    "{}\t{}\t{:.2}",
                    record.date, record.account_name, record.balance
                )?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `Final balance` line, then the retirement line when a plan is present
pub fn write_summary(out: &mut impl Write, portfolio: &Portfolio) -> io::Result<()> {
    writeln!(out, "Final balance: ${:.2}", portfolio.total_balance())?;
    if let Some(plan) = portfolio.retirement_plan() {
        match plan.retire_date() {
            Some(date) => writeln!(out, "Retirement date: {date}")?,
            None => writeln!(out, "Retirement date: could not find")?,
        }
    }
    Ok(())
}
