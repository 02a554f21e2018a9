//! Error types for ncgrid.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ncgrid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while reading grids or decoding time axes.
#[derive(Debug, Error)]
pub enum GridError {
    /// Failed to open a file.
    #[error("Failed to open file {path}: {reason}")]
    FileOpen { path: PathBuf, reason: String },

    /// Failed to read from an open NetCDF file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// No variable with the requested name.
    #[error("Variable not found: {name}")]
    VariableNotFound { name: String },

    /// Variable has an element type the reader cannot return.
    #[error("Variable '{variable}' has unsupported type {dtype}")]
    UnsupportedType { variable: String, dtype: String },

    /// Index outside the extent of an axis.
    #[error("Index {index} out of bounds for axis {axis} of '{variable}' (length {len})")]
    OutOfBounds {
        variable: String,
        axis: usize,
        index: usize,
        len: usize,
    },

    /// Selector count differs from the variable's dimensionality.
    #[error("'{variable}' has {expected} axes but {actual} selectors were given")]
    ShapeMismatch {
        variable: String,
        expected: usize,
        actual: usize,
    },

    /// Units string is not of the form `<unit> since <timestamp>`.
    #[error("Unparsable time units: '{units}'")]
    UnparsableUnits { units: String },

    /// Reference timestamp inside a units string is malformed.
    #[error("Invalid timestamp '{timestamp}': {reason}")]
    InvalidTimestamp { timestamp: String, reason: String },

    /// Decoded instant cannot be represented.
    #[error("Time value {value} in '{units}' is out of range")]
    TimeOutOfRange { value: f64, units: String },
}

impl GridError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a VariableNotFound error.
    pub fn variable_not_found(name: impl Into<String>) -> Self {
        Self::VariableNotFound { name: name.into() }
    }

    /// Create an UnparsableUnits error.
    pub fn unparsable_units(units: impl Into<String>) -> Self {
        Self::UnparsableUnits {
            units: units.into(),
        }
    }

    /// Create an InvalidTimestamp error.
    pub fn invalid_timestamp(timestamp: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            timestamp: timestamp.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the file itself could not be opened or read.
    pub fn is_io_failure(&self) -> bool {
        matches!(self, Self::FileOpen { .. } | Self::NetCDF(_))
    }
}

impl From<netcdf::Error> for GridError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}
