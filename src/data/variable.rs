//! Resolved variable descriptors.

use crate::error::{GridError, Result};
use netcdf::types::{FloatType, IntType, NcVariableType};
use std::fmt;

/// Element type of a readable variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Signed 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Short,
    /// Signed 32-bit integer.
    Int,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
}

impl ElementType {
    /// Map a NetCDF variable type onto a readable element type.
    pub fn from_nc(vartype: &NcVariableType) -> Option<Self> {
        match vartype {
            NcVariableType::Int(IntType::I8) => Some(Self::Byte),
            NcVariableType::Int(IntType::I16) => Some(Self::Short),
            NcVariableType::Int(IntType::I32) => Some(Self::Int),
            NcVariableType::Int(IntType::I64) => Some(Self::Int64),
            NcVariableType::Float(FloatType::F32) => Some(Self::Float),
            NcVariableType::Float(FloatType::F64) => Some(Self::Double),
            _ => None,
        }
    }

    /// Lower-case type name as used in CDL.
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named array in a dataset, bound to its shape, units and element type.
///
/// The descriptor owns its metadata; it does not borrow the file it was
/// resolved from, so it can outlive individual reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    /// Variable name.
    pub name: String,
    /// One length per axis, in storage order.
    pub shape: Vec<usize>,
    /// Value of the `units` attribute, empty when absent.
    pub units: String,
    /// Element type of the stored values.
    pub element_type: ElementType,
}

impl VariableRef {
    /// Create a variable descriptor.
    pub fn new(
        name: impl Into<String>,
        shape: Vec<usize>,
        units: impl Into<String>,
        element_type: ElementType,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            units: units.into(),
            element_type,
        }
    }

    /// Build a descriptor from an open NetCDF variable.
    pub(crate) fn from_netcdf(var: &netcdf::Variable<'_>) -> Result<Self> {
        let name = var.name();
        let vartype = var.vartype();
        let element_type =
            ElementType::from_nc(&vartype).ok_or_else(|| GridError::UnsupportedType {
                variable: name.clone(),
                dtype: format!("{:?}", vartype),
            })?;

        let shape = var.dimensions().iter().map(|d| d.len()).collect();

        let units = match var.attribute_value("units") {
            Some(Ok(netcdf::AttributeValue::Str(s))) => s,
            Some(Ok(netcdf::AttributeValue::Strs(v))) => v.join(" "),
            Some(Ok(_)) | None => String::new(),
            Some(Err(e)) => return Err(e.into()),
        };

        Ok(Self {
            name,
            shape,
            units,
            element_type,
        })
    }

    /// Get the number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get total number of elements.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the variable holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
