//! CSV export for per-year projections.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dashboard::Projections;

/// Column header for CSV projection export.
const HEADER: &str = "year,cumulative_energy_savings_kwh,cumulative_cost_savings_usd,\
                      bill_without_solar_usd,bill_with_solar_usd,cumulative_utility_savings_usd";

/// Exports projections to a CSV file at the given path.
///
/// Writes a header row followed by one row per horizon year. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(projections: &Projections, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(projections, buf)
}

/// Writes projections as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(projections: &Projections, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    let s = &projections.savings;
    let u = &projections.utility;

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for (i, year) in s.years.iter().enumerate() {
        wtr.write_record(&[
            year.to_string(),
            format!("{:.2}", s.cumulative_energy_savings_kwh[i]),
            format!("{:.2}", s.cumulative_cost_savings_usd[i]),
            format!("{:.2}", u.yearly_bill_without_solar_usd[i]),
            format!("{:.2}", u.yearly_bill_with_solar_usd[i]),
            format!("{:.2}", u.cumulative_savings_usd[i]),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
