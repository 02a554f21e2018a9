//! Accessors for `time × lat × lon` model grids.

use super::{AxisSelector, Dataset, Scalar};
use crate::error::{GridError, Result};
use crate::time::{decode_time, DecodedTime};

/// Name of the time coordinate variable.
pub const TIME_VARIABLE: &str = "time";
/// Name of the latitude coordinate variable.
pub const LAT_VARIABLE: &str = "lat";
/// Name of the longitude coordinate variable.
pub const LON_VARIABLE: &str = "lon";

impl Dataset {
    /// Read a whole 1-D variable as f64.
    pub fn axis_values(&self, name: &str) -> Result<Vec<f64>> {
        let variable = self.find_variable(name)?;
        Ok(self
            .read_slice(&variable, &[AxisSelector::Full])?
            .to_f64_vec())
    }

    /// Read one element of a 1-D variable as f64.
    pub fn axis_value(&self, name: &str, index: usize) -> Result<f64> {
        let variable = self.find_variable(name)?;
        let sample = self.read_slice(&variable, &[AxisSelector::Index(index)])?;
        sample
            .as_scalar()
            .map(|s| s.as_f64())
            .ok_or_else(|| GridError::NetCDF(format!("Expected one value from '{}'", name)))
    }

    /// Raw values of the time axis.
    pub fn time_values(&self) -> Result<Vec<f64>> {
        self.axis_values(TIME_VARIABLE)
    }

    /// Decoded instant of time step `index`.
    pub fn time_at(&self, index: usize) -> Result<DecodedTime> {
        let variable = self.find_variable(TIME_VARIABLE)?;
        let raw = self
            .read_slice(&variable, &[AxisSelector::Index(index)])?
            .to_f64_vec();
        decode_time(&variable.units, raw[0])
    }

    /// Every time step, decoded.
    pub fn times(&self) -> Result<Vec<DecodedTime>> {
        let variable = self.find_variable(TIME_VARIABLE)?;
        self.read_slice(&variable, &[AxisSelector::Full])?
            .to_f64_vec()
            .into_iter()
            .map(|raw| decode_time(&variable.units, raw))
            .collect()
    }

    /// Latitude at `index`.
    pub fn lat_at(&self, index: usize) -> Result<f64> {
        self.axis_value(LAT_VARIABLE, index)
    }

    /// Longitude at `index`.
    pub fn lon_at(&self, index: usize) -> Result<f64> {
        self.axis_value(LON_VARIABLE, index)
    }

    /// Value of a `time × lat × lon` variable at one grid point.
    pub fn component_value(
        &self,
        name: &str,
        time_index: usize,
        lat_index: usize,
        lon_index: usize,
    ) -> Result<Scalar> {
        let variable = self.find_variable(name)?;
        let sample = self.read_slice(
            &variable,
            &[
                AxisSelector::Index(time_index),
                AxisSelector::Index(lat_index),
                AxisSelector::Index(lon_index),
            ],
        )?;
        sample
            .as_scalar()
            .ok_or_else(|| GridError::NetCDF(format!("Expected one value from '{}'", name)))
    }
}
