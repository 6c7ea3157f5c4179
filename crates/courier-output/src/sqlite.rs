//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `routes.db` file in the configured output directory with
//! three tables: `route_legs`, `route_metrics` and `route_totals`.  Legs and
//! metrics are buffered and inserted in one transaction on
//! [`finish`][OutputWriter::finish].

use std::path::Path;

use rusqlite::Connection;

use courier_route::Totals;

use crate::writer::OutputWriter;
use crate::{MetricRow, OutputResult, RouteLegRow};

pub const DB_FILE: &str = "routes.db";

/// Writes route output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    legs:     Vec<RouteLegRow>,
    metrics:  Vec<MetricRow>,
    totals:   Option<Totals>,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `routes.db` in `dir` and initialise the schema.
    ///
    /// Existing rows are cleared so the database always holds the latest run.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS route_legs (
                 seq                 INTEGER PRIMARY KEY,
                 customer            TEXT    NOT NULL,
                 lat                 REAL    NOT NULL,
                 lon                 REAL    NOT NULL,
                 priority            TEXT    NOT NULL,
                 distance_from_prev  REAL    NOT NULL,
                 cumulative_distance REAL    NOT NULL,
                 eta_hours           REAL    NOT NULL,
                 cost                REAL    NOT NULL,
                 co2                 REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS route_metrics (
                 iteration           INTEGER PRIMARY KEY,
                 selected_customer   TEXT    NOT NULL,
                 raw_distance        REAL    NOT NULL,
                 weighted_score      REAL    NOT NULL,
                 cumulative_distance REAL    NOT NULL,
                 cumulative_time     REAL    NOT NULL,
                 cumulative_cost     REAL    NOT NULL,
                 cumulative_co2      REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS route_totals (
                 distance_km REAL NOT NULL,
                 time_hours  REAL NOT NULL,
                 cost        REAL NOT NULL,
                 co2         REAL NOT NULL
             );
             DELETE FROM route_legs;
             DELETE FROM route_metrics;
             DELETE FROM route_totals;",
        )?;

        Ok(Self {
            conn,
            legs:     Vec::new(),
            metrics:  Vec::new(),
            totals:   None,
            finished: false,
        })
    }

    fn flush_rows(&self) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO route_legs \
                 (seq, customer, lat, lon, priority, distance_from_prev, \
                  cumulative_distance, eta_hours, cost, co2) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for (seq, row) in self.legs.iter().enumerate() {
                stmt.execute(rusqlite::params![
                    seq as i64,
                    row.customer,
                    row.lat,
                    row.lon,
                    row.priority,
                    row.distance_from_prev,
                    row.cumulative_distance,
                    row.eta_hours,
                    row.cost,
                    row.co2,
                ])?;
            }
        }
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO route_metrics \
                 (iteration, selected_customer, raw_distance, weighted_score, \
                  cumulative_distance, cumulative_time, cumulative_cost, cumulative_co2) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in &self.metrics {
                stmt.execute(rusqlite::params![
                    row.iteration as i64,
                    row.selected_customer,
                    row.raw_distance,
                    row.weighted_score,
                    row.cumulative_distance,
                    row.cumulative_time,
                    row.cumulative_cost,
                    row.cumulative_co2,
                ])?;
            }
        }
        if let Some(t) = self.totals {
            tx.execute(
                "INSERT INTO route_totals (distance_km, time_hours, cost, co2) \
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![t.distance_km, t.time_hours, t.cost, t.co2],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}

impl OutputWriter for SqliteWriter {
    fn write_leg(&mut self, row: &RouteLegRow) -> OutputResult<()> {
        self.legs.push(row.clone());
        Ok(())
    }

    fn write_metric(&mut self, row: &MetricRow) -> OutputResult<()> {
        self.metrics.push(row.clone());
        Ok(())
    }

    fn write_totals(&mut self, totals: &Totals) -> OutputResult<()> {
        self.totals = Some(*totals);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush_rows()?;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
