//! Dense blocks returned by storage and the typed values taken from them.

use super::{ElementType, VariableRef};
use crate::error::{GridError, Result};
use ndarray::{ArrayD, IxDyn};
use std::fmt;

/// Storage capable of returning the dense block at `origin` with size `extent`.
///
/// `origin` and `extent` carry one entry per axis of `variable`. Implementations
/// must return a block whose shape equals `extent` and whose element type matches
/// `variable.element_type`.
pub trait BlockStorage {
    /// Read one hyper-rectangle of a variable.
    fn read_block(
        &self,
        variable: &VariableRef,
        origin: &[usize],
        extent: &[usize],
    ) -> Result<Block>;
}

/// A dense n-dimensional block of one element type.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// `byte` values.
    Byte(ArrayD<i8>),
    /// `short` values.
    Short(ArrayD<i16>),
    /// `int` values.
    Int(ArrayD<i32>),
    /// `int64` values.
    Int64(ArrayD<i64>),
    /// `float` values.
    Float(ArrayD<f32>),
    /// `double` values.
    Double(ArrayD<f64>),
}

impl Block {
    /// Element type of the block.
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Byte(_) => ElementType::Byte,
            Self::Short(_) => ElementType::Short,
            Self::Int(_) => ElementType::Int,
            Self::Int64(_) => ElementType::Int64,
            Self::Float(_) => ElementType::Float,
            Self::Double(_) => ElementType::Double,
        }
    }

    /// Shape of the block.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Byte(a) => a.shape(),
            Self::Short(a) => a.shape(),
            Self::Int(a) => a.shape(),
            Self::Int64(a) => a.shape(),
            Self::Float(a) => a.shape(),
            Self::Double(a) => a.shape(),
        }
    }

    /// Flatten the block into scalars in row-major order.
    pub fn into_scalars(self) -> Vec<Scalar> {
        fn collect<T: Copy>(array: &ArrayD<T>, wrap: fn(T) -> Scalar) -> Vec<Scalar> {
            array.iter().copied().map(wrap).collect()
        }

        match self {
            Self::Byte(a) => collect(&a, Scalar::Byte),
            Self::Short(a) => collect(&a, Scalar::Short),
            Self::Int(a) => collect(&a, Scalar::Int),
            Self::Int64(a) => collect(&a, Scalar::Int64),
            Self::Float(a) => collect(&a, Scalar::Float),
            Self::Double(a) => collect(&a, Scalar::Double),
        }
    }
}

/// Build an n-dimensional array from flat values and the requested extent.
pub(crate) fn array_from_vec<T>(values: Vec<T>, extent: &[usize]) -> Result<ArrayD<T>> {
    ArrayD::from_shape_vec(IxDyn(extent), values)
        .map_err(|e| GridError::NetCDF(format!("Invalid shape/data size: {}", e)))
}

/// A single typed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// `byte` value.
    Byte(i8),
    /// `short` value.
    Short(i16),
    /// `int` value.
    Int(i32),
    /// `int64` value.
    Int64(i64),
    /// `float` value.
    Float(f32),
    /// `double` value.
    Double(f64),
}

impl Scalar {
    /// Element type of the value.
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Byte(_) => ElementType::Byte,
            Self::Short(_) => ElementType::Short,
            Self::Int(_) => ElementType::Int,
            Self::Int64(_) => ElementType::Int64,
            Self::Float(_) => ElementType::Float,
            Self::Double(_) => ElementType::Double,
        }
    }

    /// Widen to f64. Exact except for `Int64` magnitudes above 2^53.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Byte(v) => f64::from(v),
            Self::Short(v) => f64::from(v),
            Self::Int(v) => f64::from(v),
            Self::Int64(v) => v as f64,
            Self::Float(v) => f64::from(v),
            Self::Double(v) => v,
        }
    }

    /// The value as f32, if stored as `float`.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The value as i32, if stored as `int`.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(v) => write!(f, "{}", v),
            Self::Short(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
        }
    }
}
