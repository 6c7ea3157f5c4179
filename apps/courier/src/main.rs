//! courier: greedy single-vehicle delivery route planner.
//!
//! Reads a delivery list (or generates one), rejects invalid rows, builds a
//! route from the depot through every stop and back, and writes the results
//! to the output directory:
//!
//! | File           | Contents                                        |
//! |----------------|-------------------------------------------------|
//! | `route.csv`    | one row per leg, ending with `RETURN_TO_DEPOT`  |
//! | `metrics.csv`  | one row per greedy selection                    |
//! | `rejected.csv` | invalid input rows (only when there are any)    |
//! | `run.log`      | run parameters and totals                       |
//! | `routes.db`    | SQLite copy of the above (`--sqlite`)           |

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use courier_core::{DeliveryStop, Depot, TransportMode};
use courier_input::{LoadedStops, load_stops_csv, synthetic_stops};
use courier_output::{CsvWriter, OutputWriter, RouteOutputObserver, write_rejected_csv};
use courier_route::{Objective, PlannedRoute, RouteBuilder, RoutePlanner};

const RUN_LOG: &str = "run.log";

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Delivery list CSV (customer,latitude,longitude,priority,weight_kg).
    #[arg(short, long, value_name = "CSV", required_unless_present = "generate")]
    input: Option<PathBuf>,

    /// Generate this many synthetic stops around the depot instead of reading a file.
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    generate: Option<usize>,

    /// Seed for `--generate`.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Half-width in degrees of the box `--generate` scatters stops in.
    #[arg(long, value_name = "DEGREES", default_value_t = 0.05)]
    spread: f64,

    #[arg(long = "depot-lat", value_name = "LAT", allow_hyphen_values = true)]
    depot_lat: f64,

    #[arg(long = "depot-lon", value_name = "LON", allow_hyphen_values = true)]
    depot_lon: f64,

    /// car, bicycle or walk.
    #[arg(short, long, default_value = "car")]
    mode: TransportMode,

    /// fastest, lowest_cost, lowest_co2 or pareto.
    #[arg(short, long, default_value = "fastest")]
    objective: Objective,

    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Also write `routes.db`.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// stderr gets `RUST_LOG` (or the `-v` level); `run.log` always gets INFO and up.
///
/// The returned guard flushes the log file when dropped.
fn init_tracing(verbose: u8, output_dir: &Path) -> WorkerGuard {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let stderr_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(output_dir, RUN_LOG));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(stderr_filter))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false)
                .with_filter(LevelFilter::INFO),
        )
        .init();

    guard
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

fn load_stops(cli: &Cli, depot: Depot) -> Result<LoadedStops> {
    match (&cli.input, cli.generate) {
        (Some(path), _) => {
            load_stops_csv(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, Some(count)) => Ok(LoadedStops {
            accepted: synthetic_stops(count, depot.location, cli.spread, cli.seed),
            rejected: Vec::new(),
        }),
        (None, None) => bail!("either --input or --generate is required"),
    }
}

/// Build the route with `writer` attached, timing only the construction.
fn plan_with<W: OutputWriter>(
    planner: &RoutePlanner,
    stops:   &[DeliveryStop],
    depot:   Depot,
    writer:  W,
) -> Result<PlannedRoute> {
    let mut obs = RouteOutputObserver::new(writer);

    let t0 = Instant::now();
    let route = planner.run_observed(stops, depot, &mut obs);
    let elapsed = t0.elapsed();
    info!("route built in {:.6} s", elapsed.as_secs_f64());

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing route output");
    }
    debug!(legs = obs.legs_written(), "route output written");
    Ok(route)
}

fn print_summary(route: &PlannedRoute, output_dir: &Path, rejected_file: Option<&Path>) {
    let t = &route.totals;
    println!();
    println!("=== Route complete ===");
    println!("Total distance : {:.2} km", t.distance_km);
    println!("Total time     : {:.2} hours", t.time_hours);
    println!("Total cost     : {:.2} NOK", t.cost);
    println!("Total CO2      : {:.2} g", t.co2);
    println!();

    println!("Files saved in {}:", output_dir.display());
    println!("  route.csv");
    println!("  metrics.csv");
    if rejected_file.is_some() {
        println!("  rejected.csv");
    }
    println!("  {RUN_LOG}");
    println!();

    println!("{:<4} {:<24} {:>10} {:>10} {:>8} {:>10}", "#", "Customer", "Lat", "Lon", "Priority", "Leg km");
    println!("{}", "-".repeat(71));
    for (i, leg) in route.legs.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>10.5} {:>10.5} {:>8} {:>10.3}",
            i + 1,
            leg.customer,
            leg.location.lat,
            leg.location.lon,
            leg.priority.map_or("-", |p| p.as_str()),
            leg.distance_from_prev_km,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;
    let _log_guard = init_tracing(cli.verbose, &cli.output_dir);

    let depot = Depot::checked(cli.depot_lat, cli.depot_lon)?;

    println!("=== courier route planner ===");
    let loaded = load_stops(&cli, depot)?;
    println!("Valid rows    : {}", loaded.accepted.len());
    println!("Rejected rows : {}", loaded.rejected.len());

    let rejected_file = write_rejected_csv(&cli.output_dir, &loaded.rejected)?;

    let planner = RouteBuilder::new(cli.mode, cli.objective).build()?;
    info!("=== route run started ===");
    info!("Depot: {}", depot.location);
    info!("Mode: {}", planner.profile().name);
    info!("Objective: {}", planner.objective());
    info!("Stops: {} accepted, {} rejected", loaded.accepted.len(), loaded.rejected.len());

    let csv = CsvWriter::new(&cli.output_dir)?;
    let route = plan_with(&planner, &loaded.accepted, depot, csv)?;

    #[cfg(feature = "sqlite")]
    if cli.sqlite {
        let mut db = RouteOutputObserver::new(courier_output::SqliteWriter::new(&cli.output_dir)?);
        db.replay(&route);
        if let Some(e) = db.take_error() {
            return Err(e).context("writing routes.db");
        }
    }

    let t = &route.totals;
    info!("Total distance: {:.3} km", t.distance_km);
    info!("Total time: {:.3} hours", t.time_hours);
    info!("Total cost: {:.3} NOK", t.cost);
    info!("Total CO2: {:.3} g", t.co2);

    print_summary(&route, &cli.output_dir, rejected_file.as_deref());
    Ok(())
}
