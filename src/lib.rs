//! ncgrid - axis-indexed reads of gridded netCDF model output.
//!
//! ncgrid opens `time × lat × lon` model files (such as air-quality forecasts),
//! reads single grid points or whole axes of any variable, and decodes CF-style
//! time coordinates (`hours since 1970-01-01T00:00:00Z`) into absolute instants.
//!
//! # Features
//!
//! - Typed point and whole-axis reads with bounds checking
//! - Dedicated `<unit> since <timestamp>` parser
//! - UTC-normalized decoded times with optional local rendering
//! - File handles released on every exit path
//!
//! # Example
//!
//! ```ignore
//! use ncgrid::data::{AxisSelector, Dataset};
//! use ncgrid::time::decode_time;
//!
//! let dataset = Dataset::open("file.nc")?;
//! let time = dataset.find_variable("time")?;
//! let raw = dataset.read_slice(&time, &[AxisSelector::Index(7)])?;
//! let when = decode_time(&time.units, raw.to_f64_vec()[0])?;
//! println!("7th time index equals {}", when);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod time;
pub mod util;

pub use data::{read_slice, AxisSelector, Dataset, RawSample, Scalar, VariableRef};
pub use error::{GridError, Result};
pub use time::{decode_time, DecodedTime, DisplayZone};
