//! CSV delivery list reader.
//!
//! # CSV format
//!
//! One row per delivery, with a header row.  Column order does not matter;
//! extra columns are ignored and missing columns read as empty (and so fail
//! validation).
//!
//! ```csv
//! customer,latitude,longitude,priority,weight_kg
//! Nordby AS,59.91,10.75,High,2
//! Lund,59.92,10.70,Medium,0.5
//! ```
//!
//! Cells are trimmed before validation.  Rows that fail validation are kept,
//! with their raw text, in [`LoadedStops::rejected`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use courier_core::DeliveryStop;

use crate::validate::{RejectReason, validate_record};
use crate::InputResult;

// ── CSV record ────────────────────────────────────────────────────────────────

/// One delivery row exactly as read, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawStopRecord {
    #[serde(default)]
    pub customer:  String,
    #[serde(default)]
    pub latitude:  String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub priority:  String,
    #[serde(default)]
    pub weight_kg: String,
}

/// A row that failed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source (the header is line 1).
    pub line:   u64,
    pub raw:    RawStopRecord,
    pub reason: RejectReason,
}

/// Result of loading a delivery list.
#[derive(Clone, Debug, Default)]
pub struct LoadedStops {
    /// Validated stops in file order.
    pub accepted: Vec<DeliveryStop>,
    pub rejected: Vec<RejectedRow>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate deliveries from a CSV file.
pub fn load_stops_csv(path: &Path) -> InputResult<LoadedStops> {
    let file = std::fs::File::open(path)?;
    load_stops_reader(file)
}

/// Like [`load_stops_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_stops_reader<R: Read>(reader: R) -> InputResult<LoadedStops> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut loaded = LoadedStops::default();

    for result in csv_reader.records() {
        let mut record = result?;
        let line = record.position().map_or(0, |p| p.line());
        // Short rows read as empty trailing cells and fail validation.
        while record.len() < headers.len() {
            record.push_field("");
        }
        let raw: RawStopRecord = record.deserialize(Some(&headers))?;

        match validate_record(&raw) {
            Ok(stop) => loaded.accepted.push(stop),
            Err(reason) => {
                warn!(line, customer = %raw.customer, %reason, "rejected delivery row");
                loaded.rejected.push(RejectedRow { line, raw, reason });
            }
        }
    }

    debug!(
        accepted = loaded.accepted.len(),
        rejected = loaded.rejected.len(),
        "delivery list loaded"
    );
    Ok(loaded)
}
