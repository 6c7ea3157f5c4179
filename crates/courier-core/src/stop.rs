//! Delivery stops, priorities, and the depot.

use std::str::FromStr;

use crate::{CoreError, CoreResult, GeoPoint};

/// Customer-facing urgency tier of a delivery.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Exact spelling accepted by the CSV input.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High   => "High",
            Priority::Medium => "Medium",
            Priority::Low    => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: only `High`, `Medium` and `Low` are accepted.
impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "High"   => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low"    => Ok(Priority::Low),
            other => Err(CoreError::UnknownPriority(other.to_owned())),
        }
    }
}

/// One validated delivery.
///
/// Constructed by the input layer after validation and never mutated
/// afterwards.  The route planner borrows a slice of these for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryStop {
    pub customer:  String,
    pub location:  GeoPoint,
    pub priority:  Priority,
    /// Parcel weight in kilograms, `>= 0`.
    pub weight_kg: f64,
}

impl DeliveryStop {
    pub fn new(
        customer:  impl Into<String>,
        location:  GeoPoint,
        priority:  Priority,
        weight_kg: f64,
    ) -> Self {
        Self { customer: customer.into(), location, priority, weight_kg }
    }
}

/// The start and end point of every route.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depot {
    pub location: GeoPoint,
}

impl Depot {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { location: GeoPoint::new(lat, lon) }
    }

    /// Construct a depot, rejecting coordinates outside the WGS-84 ranges.
    pub fn checked(lat: f64, lon: f64) -> CoreResult<Self> {
        let location = GeoPoint::new(lat, lon);
        if !location.is_valid() {
            return Err(CoreError::InvalidCoordinate { lat, lon });
        }
        Ok(Self { location })
    }
}

impl From<GeoPoint> for Depot {
    fn from(location: GeoPoint) -> Self {
        Self { location }
    }
}
