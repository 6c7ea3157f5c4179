//! Per-field validators for raw delivery rows.
//!
//! Every validator takes the trimmed text of one CSV cell.  A row is accepted
//! only when all five fields pass; [`validate_record`] reports the first
//! failing field in column order.

use courier_core::{DeliveryStop, GeoPoint, Priority};

use crate::reader::RawStopRecord;

/// Why a row was rejected.  Checked in column order; only the first failure
/// is reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    InvalidName,
    InvalidLatitude,
    InvalidLongitude,
    InvalidPriority,
    InvalidWeight,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::InvalidName      => "invalid_name",
            RejectReason::InvalidLatitude  => "invalid_latitude",
            RejectReason::InvalidLongitude => "invalid_longitude",
            RejectReason::InvalidPriority  => "invalid_priority",
            RejectReason::InvalidWeight    => "invalid_weight",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty and made only of printable characters.
///
/// Control characters, invisible format characters (zero-width spaces,
/// bidi marks, BOM), private-use code points and any whitespace other than
/// the plain ASCII space count as non-printable.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_printable)
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format(c) || is_private_use(c))
}

/// Unicode general category Cf.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

/// Unicode general category Co.
fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}

/// Parses as a float within `[-90, 90]`.
pub fn is_valid_lat(value: &str) -> bool {
    parse_in_range(value, -90.0, 90.0).is_some()
}

/// Parses as a float within `[-180, 180]`.
pub fn is_valid_lon(value: &str) -> bool {
    parse_in_range(value, -180.0, 180.0).is_some()
}

/// Exactly `High`, `Medium` or `Low`.
pub fn is_valid_priority(value: &str) -> bool {
    value.parse::<Priority>().is_ok()
}

/// Parses as a float `>= 0`.
pub fn is_valid_weight(value: &str) -> bool {
    parse_in_range(value, 0.0, f64::INFINITY).is_some()
}

/// Validate a raw row and build the stop, or report the first failing field.
pub fn validate_record(raw: &RawStopRecord) -> Result<DeliveryStop, RejectReason> {
    let customer = raw.customer.trim();
    if !is_valid_name(customer) {
        return Err(RejectReason::InvalidName);
    }
    let lat = parse_in_range(&raw.latitude, -90.0, 90.0).ok_or(RejectReason::InvalidLatitude)?;
    let lon = parse_in_range(&raw.longitude, -180.0, 180.0).ok_or(RejectReason::InvalidLongitude)?;
    let priority = raw
        .priority
        .trim()
        .parse::<Priority>()
        .map_err(|_| RejectReason::InvalidPriority)?;
    let weight_kg = parse_in_range(&raw.weight_kg, 0.0, f64::INFINITY).ok_or(RejectReason::InvalidWeight)?;

    Ok(DeliveryStop::new(customer, GeoPoint::new(lat, lon), priority, weight_kg))
}

// NaN fails the range check, so "nan" is rejected everywhere.
fn parse_in_range(value: &str, min: f64, max: f64) -> Option<f64> {
    let v = value.trim().parse::<f64>().ok()?;
    (min..=max).contains(&v).then_some(v)
}
