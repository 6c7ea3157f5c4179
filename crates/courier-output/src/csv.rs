//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `route.csv`
//! - `metrics.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MetricRow, OutputResult, RouteLegRow};

pub const ROUTE_FILE: &str = "route.csv";
pub const METRICS_FILE: &str = "metrics.csv";

pub const ROUTE_HEADER: [&str; 9] = [
    "customer",
    "lat",
    "lon",
    "priority",
    "distance_from_prev",
    "cumulative_distance",
    "eta_hours",
    "cost",
    "co2",
];

pub const METRICS_HEADER: [&str; 8] = [
    "iteration",
    "selected_customer",
    "raw_distance",
    "weighted_score",
    "cumulative_distance",
    "cumulative_time",
    "cumulative_cost",
    "cumulative_co2",
];

/// Writes the route and its per-selection metrics to two CSV files.
pub struct CsvWriter {
    route:    Writer<File>,
    metrics:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut route = Writer::from_path(dir.join(ROUTE_FILE))?;
        route.write_record(ROUTE_HEADER)?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record(METRICS_HEADER)?;

        Ok(Self {
            route,
            metrics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_leg(&mut self, row: &RouteLegRow) -> OutputResult<()> {
        self.route.write_record(&[
            row.customer.clone(),
            row.lat.to_string(),
            row.lon.to_string(),
            row.priority.to_owned(),
            row.distance_from_prev.to_string(),
            row.cumulative_distance.to_string(),
            row.eta_hours.to_string(),
            row.cost.to_string(),
            row.co2.to_string(),
        ])?;
        Ok(())
    }

    fn write_metric(&mut self, row: &MetricRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.iteration.to_string(),
            row.selected_customer.clone(),
            row.raw_distance.to_string(),
            row.weighted_score.to_string(),
            row.cumulative_distance.to_string(),
            row.cumulative_time.to_string(),
            row.cumulative_cost.to_string(),
            row.cumulative_co2.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.route.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
