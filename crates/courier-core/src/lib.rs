//! `courier-core`: foundational types for the courier route planner.
//!
//! This crate is a dependency of every other `courier-*` crate.  It has no
//! `courier-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance in kilometres          |
//! | [`transport`]   | `TransportMode` presets, `TransportProfile`           |
//! | [`stop`]        | `Priority`, `DeliveryStop`, `Depot`                   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod stop;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
pub use stop::{DeliveryStop, Depot, Priority};
pub use transport::{TransportMode, TransportProfile};
