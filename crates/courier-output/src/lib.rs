//! `courier-output`: route output writers for the courier route planner.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                 |
//! |-----------|---------|-------------------------------|
//! | *(none)*  | CSV     | `route.csv`, `metrics.csv`    |
//! | `sqlite`  | SQLite  | `routes.db`                   |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`RouteOutputObserver`], which implements `courier_route::RouteObserver`.
//! Rows rejected by the reader go to `rejected.csv` via
//! [`write_rejected_csv`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use courier_output::{CsvWriter, RouteOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RouteOutputObserver::new(writer);
//! let route = planner.run_observed(&stops, depot, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod rejected;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RouteOutputObserver;
pub use rejected::write_rejected_csv;
pub use row::{MetricRow, NO_PRIORITY, RouteLegRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
