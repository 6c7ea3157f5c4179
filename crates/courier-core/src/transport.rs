//! Transport presets and the per-mode cost profile used by route scoring.
//!
//! A [`TransportProfile`] is plain configuration: a speed and two per-km
//! rates.  The three built-in presets are reachable through
//! [`TransportMode::profile`]; custom profiles go through
//! [`TransportProfile::new`], which rejects values that would make travel
//! time infinite or costs negative.

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// The built-in transport presets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    /// Private van or car.
    #[default]
    Car,
    /// Cargo bicycle; no running cost or emissions.
    Bicycle,
    /// On foot; no running cost or emissions.
    Walk,
}

impl TransportMode {
    /// All presets in menu order.
    pub const ALL: [TransportMode; 3] = [TransportMode::Car, TransportMode::Bicycle, TransportMode::Walk];

    /// Lookup key, useful for CLI values and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car     => "car",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walk    => "walk",
        }
    }

    /// The preset's constants.
    pub fn profile(self) -> TransportProfile {
        match self {
            TransportMode::Car     => TransportProfile::preset("Car",     50.0, 4.0, 120.0),
            TransportMode::Bicycle => TransportProfile::preset("Bicycle", 15.0, 0.0, 0.0),
            TransportMode::Walk    => TransportProfile::preset("Walking",  5.0, 0.0, 0.0),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car"               => Ok(TransportMode::Car),
            "bicycle" | "bike"  => Ok(TransportMode::Bicycle),
            "walk" | "walking"  => Ok(TransportMode::Walk),
            other => Err(CoreError::UnknownTransportMode(other.to_owned())),
        }
    }
}

/// Speed and per-km rates for one vehicle or mode.
///
/// Read-only for the duration of a run; scoring borrows it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportProfile {
    pub name:        String,
    /// Average travel speed, km/h.  Always > 0.
    pub speed_kmh:   f64,
    /// Monetary cost per km (NOK in the shipped presets).
    pub cost_per_km: f64,
    /// Emissions per km (grams CO2 in the shipped presets).
    pub co2_per_km:  f64,
}

impl TransportProfile {
    /// Validate and construct a custom profile.
    ///
    /// `speed_kmh` must be finite and strictly positive; both rates must be
    /// finite and non-negative.
    pub fn new(
        name:        impl Into<String>,
        speed_kmh:   f64,
        cost_per_km: f64,
        co2_per_km:  f64,
    ) -> CoreResult<Self> {
        let name = name.into();
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(CoreError::InvalidProfile {
                name,
                reason: format!("speed_kmh must be > 0, got {speed_kmh}"),
            });
        }
        for (field, value) in [("cost_per_km", cost_per_km), ("co2_per_km", co2_per_km)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidProfile {
                    name,
                    reason: format!("{field} must be >= 0, got {value}"),
                });
            }
        }
        Ok(Self { name, speed_kmh, cost_per_km, co2_per_km })
    }

    fn preset(name: &str, speed_kmh: f64, cost_per_km: f64, co2_per_km: f64) -> Self {
        Self { name: name.to_owned(), speed_kmh, cost_per_km, co2_per_km }
    }

    /// Travel time in hours for `km`.
    #[inline]
    pub fn hours_for(&self, km: f64) -> f64 {
        km / self.speed_kmh
    }

    /// Monetary cost for `km`.
    #[inline]
    pub fn cost_for(&self, km: f64) -> f64 {
        km * self.cost_per_km
    }

    /// Emissions for `km`.
    #[inline]
    pub fn co2_for(&self, km: f64) -> f64 {
        km * self.co2_per_km
    }
}

impl From<TransportMode> for TransportProfile {
    fn from(mode: TransportMode) -> Self {
        mode.profile()
    }
}
