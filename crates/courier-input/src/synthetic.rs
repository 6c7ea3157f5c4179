//! Deterministic synthetic delivery lists for demos and smoke runs.
//!
//! Stops are scattered uniformly in a `±spread_deg` box around `centre`
//! (clamped to valid coordinates).  Priorities are drawn 20 % High,
//! 50 % Medium, 30 % Low and weights uniformly in `[0.5, 25.0)` kg.  The same
//! seed always yields the same list.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use courier_core::{DeliveryStop, GeoPoint, Priority};

/// Generate `count` validated stops around `centre`.
pub fn synthetic_stops(count: usize, centre: GeoPoint, spread_deg: f64, seed: u64) -> Vec<DeliveryStop> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let spread = spread_deg.abs();

    (0..count)
        .map(|i| {
            let lat = jitter(&mut rng, centre.lat, spread).clamp(-90.0, 90.0);
            let lon = jitter(&mut rng, centre.lon, spread).clamp(-180.0, 180.0);

            let roll: f64 = rng.r#gen();
            let priority = if roll < 0.2 {
                Priority::High
            } else if roll < 0.7 {
                Priority::Medium
            } else {
                Priority::Low
            };
            let weight_kg = rng.gen_range(0.5..25.0);

            DeliveryStop::new(format!("Customer {:03}", i + 1), GeoPoint::new(lat, lon), priority, weight_kg)
        })
        .collect()
}

fn jitter(rng: &mut SmallRng, centre: f64, spread: f64) -> f64 {
    if spread == 0.0 {
        return centre;
    }
    centre + rng.gen_range(-spread..=spread)
}
