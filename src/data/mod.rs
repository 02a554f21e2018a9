//! Data reading and representation.
//!
//! This module handles opening NetCDF files, resolving variables by name and
//! reading axis-indexed slices of their data.

pub(crate) mod block;
mod dataset;
mod grid;
mod slice;
mod variable;

pub use block::{Block, BlockStorage, Scalar};
pub use dataset::Dataset;
pub use grid::{LAT_VARIABLE, LON_VARIABLE, TIME_VARIABLE};
pub use slice::{read_slice, AxisSelector, RawSample};
pub use variable::{ElementType, VariableRef};
