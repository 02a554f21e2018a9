//! NetCDF-backed dataset session.

use super::block::array_from_vec;
use super::{read_slice, AxisSelector, Block, BlockStorage, ElementType, RawSample, VariableRef};
use crate::error::{GridError, Result};
use netcdf::Extent;
use std::fmt;
use std::path::{Path, PathBuf};

/// An open, read-only NetCDF file.
///
/// The file handle is released when the dataset is dropped, so every exit path
/// out of a reading session closes it, including early returns through `?`.
pub struct Dataset {
    /// Path to the source file.
    path: PathBuf,
    file: netcdf::File,
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset").field("path", &self.path).finish()
    }
}

impl Dataset {
    /// Open a NetCDF file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = netcdf::open(path).map_err(|e| GridError::file_open(path, e))?;
        tracing::debug!(path = %path.display(), "Opened dataset");

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Close the file. Equivalent to dropping the dataset.
    pub fn close(self) {
        tracing::debug!(path = %self.path.display(), "Closing dataset");
    }

    /// Path to the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of all root-level variables, in the order the file declares them.
    pub fn list_variable_names(&self) -> Vec<String> {
        self.file.variables().map(|var| var.name()).collect()
    }

    /// Resolve a variable by name.
    pub fn find_variable(&self, name: &str) -> Result<VariableRef> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| GridError::variable_not_found(name))?;
        let variable = VariableRef::from_netcdf(&var)?;

        tracing::debug!(
            variable = %variable.name,
            shape = ?variable.shape,
            dtype = %variable.element_type,
            "Resolved variable"
        );
        Ok(variable)
    }

    /// Read the hyper-rectangle of `variable` picked by `selectors`.
    pub fn read_slice(
        &self,
        variable: &VariableRef,
        selectors: &[AxisSelector],
    ) -> Result<RawSample> {
        read_slice(self, variable, selectors)
    }
}

impl BlockStorage for Dataset {
    fn read_block(
        &self,
        variable: &VariableRef,
        origin: &[usize],
        extent: &[usize],
    ) -> Result<Block> {
        let var = self
            .file
            .variable(&variable.name)
            .ok_or_else(|| GridError::variable_not_found(&variable.name))?;

        let extents: Vec<Extent> = origin
            .iter()
            .zip(extent)
            .map(|(&start, &count)| Extent::from(start..start + count))
            .collect();
        let extents = extents.as_slice();

        let block = match variable.element_type {
            ElementType::Byte => {
                let values: Vec<i8> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read i8 data: {}", e)))?;
                Block::Byte(array_from_vec(values, extent)?)
            }
            ElementType::Short => {
                let values: Vec<i16> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read i16 data: {}", e)))?;
                Block::Short(array_from_vec(values, extent)?)
            }
            ElementType::Int => {
                let values: Vec<i32> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read i32 data: {}", e)))?;
                Block::Int(array_from_vec(values, extent)?)
            }
            ElementType::Int64 => {
                let values: Vec<i64> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read i64 data: {}", e)))?;
                Block::Int64(array_from_vec(values, extent)?)
            }
            ElementType::Float => {
                let values: Vec<f32> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read f32 data: {}", e)))?;
                Block::Float(array_from_vec(values, extent)?)
            }
            ElementType::Double => {
                let values: Vec<f64> = var
                    .get_values(extents)
                    .map_err(|e| GridError::NetCDF(format!("Failed to read f64 data: {}", e)))?;
                Block::Double(array_from_vec(values, extent)?)
            }
        };

        Ok(block)
    }
}
