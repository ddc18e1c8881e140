//! Ownership report output

use std::io::Write;

use serde::Serialize;

use crate::domain::OwnershipTable;
use crate::error::Result;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `binary<TAB>bundle` line per binary
    #[default]
    Tsv,
    /// JSON array of `{binary, bundle, score}` objects
    Json,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    binary: &'a str,
    bundle: &'a str,
    score: f64,
}

/// Write the table sorted by binary name
pub fn write_report(
    table: &OwnershipTable,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Tsv => {
            for (binary, owner) in table.iter() {
                writeln!(out, "{}\t{}", binary, owner.bundle)?;
            }
        }
        OutputFormat::Json => {
            let rows: Vec<ReportRow<'_>> = table
                .iter()
                .map(|(binary, owner)| ReportRow {
                    binary,
                    bundle: &owner.bundle,
                    score: owner.score,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
