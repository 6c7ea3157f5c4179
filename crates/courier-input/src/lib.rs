//! `courier-input`: delivery list loading and validation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`validate`]    | Field validators, `RejectReason`, `validate_record`       |
//! | [`reader`]      | `load_stops_csv`, `load_stops_reader`, `LoadedStops`      |
//! | [`synthetic`]   | `synthetic_stops` seeded generator                        |
//! | [`error`]       | `InputError`, `InputResult<T>`                            |
//!
//! Rows that fail validation are never an error: they are returned next to
//! the accepted stops as [`RejectedRow`]s so the caller can persist them.
//! Only I/O and CSV framing failures surface as [`InputError`].

pub mod error;
pub mod reader;
pub mod synthetic;
pub mod validate;


pub use error::{InputError, InputResult};
pub use reader::{LoadedStops, RawStopRecord, RejectedRow, load_stops_csv, load_stops_reader};
pub use synthetic::synthetic_stops;
pub use validate::{
    RejectReason, is_valid_lat, is_valid_lon, is_valid_name, is_valid_priority, is_valid_weight,
    validate_record,
};
