//! Time-axis decoding.
//!
//! Time coordinates store a number of calendar steps since a reference instant,
//! described by the variable's `units` attribute, e.g.
//! `hours since 1970-01-01T00:00:00Z`.

mod decode;
mod units;

pub use decode::{decode_time, DecodedTime, DisplayZone};
pub use units::{parse_timestamp, TimeStep, TimeUnit};
