//! `rejected.csv`: input rows that failed validation.

use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use courier_input::RejectedRow;

use crate::OutputResult;

pub const REJECTED_FILE: &str = "rejected.csv";

pub const REJECTED_HEADER: [&str; 7] = [
    "line",
    "customer",
    "latitude",
    "longitude",
    "priority",
    "weight_kg",
    "reason",
];

/// Write `rows` to `dir/rejected.csv` with their raw cells and the reason.
///
/// Nothing is written when `rows` is empty; the return value is the path of
/// the file if one was created.
pub fn write_rejected_csv(dir: &Path, rows: &[RejectedRow]) -> OutputResult<Option<PathBuf>> {
    if rows.is_empty() {
        return Ok(None);
    }

    let path = dir.join(REJECTED_FILE);
    let mut w = Writer::from_path(&path)?;
    w.write_record(REJECTED_HEADER)?;
    for row in rows {
        w.write_record([
            row.line.to_string().as_str(),
            row.raw.customer.as_str(),
            row.raw.latitude.as_str(),
            row.raw.longitude.as_str(),
            row.raw.priority.as_str(),
            row.raw.weight_kg.as_str(),
            row.reason.as_str(),
        ])?;
    }
    w.flush()?;

    info!(count = rows.len(), path = %path.display(), "rejected rows saved");
    Ok(Some(path))
}
