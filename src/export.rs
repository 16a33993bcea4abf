use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Field, JobRecord};

/// Header row contract shared with every exporter.
pub fn headers() -> [&'static str; 7] {
    Field::ALL.map(|field| field.header())
}

fn needs_quotes(cell: &str) -> bool {
    cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
}

fn push_row(out: &mut String, row: &[&str]) {
    let mut first = true;
    for cell in row {
        if !first {
            out.push(',');
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Records rendered as CSV: the header row in the fixed field order, then
/// one row per record, quoting only cells that need it.
pub fn to_csv_string(records: &[JobRecord]) -> String {
    let mut out = String::new();
    push_row(&mut out, &headers());
    for record in records {
        let row = Field::ALL.map(|field| record.get(field));
        push_row(&mut out, &row);
    }
    out
}

pub fn write_csv(path: &Path, records: &[JobRecord]) -> Result<()> {
    std::fs::write(path, to_csv_string(records))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Same records as pretty JSON; field names equal the export headers.
pub fn write_json(path: &Path, records: &[JobRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
