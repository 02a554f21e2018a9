//! Axis-indexed reads of variable data.

use super::{BlockStorage, Scalar, VariableRef};
use crate::error::{GridError, Result};

/// Selection along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector {
    /// Exactly one element at this index.
    Index(usize),
    /// Every element of the axis.
    Full,
}

impl AxisSelector {
    /// Check if this selector picks a single index.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl From<usize> for AxisSelector {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Values read by [`read_slice`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawSample {
    /// Every selector was an index.
    Scalar(Scalar),
    /// At least one selector spanned a full axis; values in row-major order.
    Series(Vec<Scalar>),
}

impl RawSample {
    /// Get the scalar, if every selector was an index.
    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Self::Scalar(s) => Some(*s),
            Self::Series(_) => None,
        }
    }

    /// Get the values as a sequence. A scalar becomes a sequence of one.
    pub fn into_series(self) -> Vec<Scalar> {
        match self {
            Self::Scalar(s) => vec![s],
            Self::Series(v) => v,
        }
    }

    /// Get all values widened to f64.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Self::Scalar(s) => vec![s.as_f64()],
            Self::Series(v) => v.iter().map(Scalar::as_f64).collect(),
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Series(v) => v.len(),
        }
    }

    /// Whether the sample holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the hyper-rectangle of `variable` picked by `selectors`.
///
/// There must be exactly one selector per axis, and every `Index` must lie inside
/// its axis. A `Full` selector reads the whole axis; the block is requested from
/// `storage` in a single call and never cached.
pub fn read_slice<S>(
    storage: &S,
    variable: &VariableRef,
    selectors: &[AxisSelector],
) -> Result<RawSample>
where
    S: BlockStorage + ?Sized,
{
    if selectors.len() != variable.ndim() {
        return Err(GridError::ShapeMismatch {
            variable: variable.name.clone(),
            expected: variable.ndim(),
            actual: selectors.len(),
        });
    }

    let mut origin = Vec::with_capacity(selectors.len());
    let mut extent = Vec::with_capacity(selectors.len());
    for (axis, (selector, &len)) in selectors.iter().zip(&variable.shape).enumerate() {
        match *selector {
            AxisSelector::Index(index) => {
                if index >= len {
                    return Err(GridError::OutOfBounds {
                        variable: variable.name.clone(),
                        axis,
                        index,
                        len,
                    });
                }
                origin.push(index);
                extent.push(1);
            }
            AxisSelector::Full => {
                origin.push(0);
                extent.push(len);
            }
        }
    }

    tracing::debug!(
        variable = %variable.name,
        ?origin,
        ?extent,
        "Reading block"
    );

    let block = storage.read_block(variable, &origin, &extent)?;
    let values = block.into_scalars();

    let expected: usize = extent.iter().product();
    if values.len() != expected {
        return Err(GridError::NetCDF(format!(
            "Storage returned {} values for '{}', expected {}",
            values.len(),
            variable.name,
            expected
        )));
    }

    if selectors.iter().all(AxisSelector::is_index) {
        // A block of extent 1 on every axis holds exactly one value.
        Ok(RawSample::Scalar(values[0]))
    } else {
        Ok(RawSample::Series(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::block::array_from_vec;
    use crate::data::{Block, ElementType};
    use ndarray::{ArrayD, IxDyn, Slice};
    use std::cell::Cell;

    /// In-memory storage holding one float variable.
    struct MemoryStorage {
        data: ArrayD<f32>,
        reads: Cell<usize>,
    }

    impl MemoryStorage {
        fn new(shape: &[usize]) -> Self {
            let len: usize = shape.iter().product();
            let values: Vec<f32> = (0..len).map(|i| i as f32 * 0.5).collect();
            Self {
                data: array_from_vec(values, shape).unwrap(),
                reads: Cell::new(0),
            }
        }
    }

    impl BlockStorage for MemoryStorage {
        fn read_block(
            &self,
            _variable: &VariableRef,
            origin: &[usize],
            extent: &[usize],
        ) -> Result<Block> {
            self.reads.set(self.reads.get() + 1);
            let view = self.data.slice_each_axis(|ax| {
                let i = ax.axis.index();
                Slice::from(origin[i]..origin[i] + extent[i])
            });
            Ok(Block::Float(view.to_owned()))
        }
    }

    fn grid() -> (MemoryStorage, VariableRef) {
        let shape = vec![4, 3, 5];
        let storage = MemoryStorage::new(&shape);
        let var = VariableRef::new("index_of_airquality", shape, "1", ElementType::Float);
        (storage, var)
    }

    #[test]
    fn point_read_matches_direct_indexing() {
        let (storage, var) = grid();
        for t in 0..4 {
            for y in 0..3 {
                for x in 0..5 {
                    let sample = read_slice(
                        &storage,
                        &var,
                        &[AxisSelector::Index(t), AxisSelector::Index(y), AxisSelector::Index(x)],
                    )
                    .unwrap();
                    let expected = storage.data[IxDyn(&[t, y, x])];
                    assert_eq!(sample, RawSample::Scalar(Scalar::Float(expected)));
                }
            }
        }
    }

    #[test]
    fn full_axis_read_matches_point_reads() {
        let (storage, var) = grid();
        let series = read_slice(
            &storage,
            &var,
            &[AxisSelector::Index(2), AxisSelector::Full, AxisSelector::Index(4)],
        )
        .unwrap()
        .into_series();
        assert_eq!(series.len(), 3);

        for (i, value) in series.iter().enumerate() {
            let point = read_slice(
                &storage,
                &var,
                &[AxisSelector::Index(2), AxisSelector::Index(i), AxisSelector::Index(4)],
            )
            .unwrap();
            assert_eq!(point.as_scalar(), Some(*value));
        }
    }

    #[test]
    fn multiple_full_axes_flatten_row_major() {
        let (storage, var) = grid();
        let sample = read_slice(
            &storage,
            &var,
            &[AxisSelector::Index(1), AxisSelector::Full, AxisSelector::Full],
        )
        .unwrap();
        assert_eq!(sample.len(), 15);
        assert_eq!(sample.to_f64_vec()[0], f64::from(storage.data[IxDyn(&[1, 0, 0])]));
        assert_eq!(sample.to_f64_vec()[6], f64::from(storage.data[IxDyn(&[1, 1, 1])]));
    }

    #[test]
    fn one_past_the_end_is_out_of_bounds_on_every_axis() {
        let (storage, var) = grid();
        for axis in 0..3 {
            let mut selectors = vec![AxisSelector::Index(0); 3];
            selectors[axis] = AxisSelector::Index(var.shape[axis]);
            match read_slice(&storage, &var, &selectors) {
                Err(GridError::OutOfBounds {
                    axis: a, index, len, ..
                }) => {
                    assert_eq!(a, axis);
                    assert_eq!(index, var.shape[axis]);
                    assert_eq!(len, var.shape[axis]);
                }
                other => panic!("expected OutOfBounds, got {:?}", other),
            }
        }
        assert_eq!(storage.reads.get(), 0);
    }

    #[test]
    fn wrong_selector_count_is_shape_mismatch() {
        let (storage, var) = grid();
        for selectors in [vec![], vec![AxisSelector::Full], vec![AxisSelector::Index(0); 4]] {
            assert!(matches!(
                read_slice(&storage, &var, &selectors),
                Err(GridError::ShapeMismatch { expected: 3, .. })
            ));
        }
    }

    #[test]
    fn repeated_reads_are_bit_identical_and_uncached() {
        let (storage, var) = grid();
        let selectors = [AxisSelector::Full, AxisSelector::Index(1), AxisSelector::Index(2)];
        let first = read_slice(&storage, &var, &selectors).unwrap().to_f64_vec();
        let second = read_slice(&storage, &var, &selectors).unwrap().to_f64_vec();

        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
        assert_eq!(storage.reads.get(), 2);
    }

    /// Storage whose every read fails.
    struct FailingStorage;

    impl BlockStorage for FailingStorage {
        fn read_block(
            &self,
            _variable: &VariableRef,
            _origin: &[usize],
            _extent: &[usize],
        ) -> Result<Block> {
            Err(GridError::NetCDF("HDF error".to_string()))
        }
    }

    /// Storage that always returns a single value, whatever the extent.
    struct TruncatingStorage;

    impl BlockStorage for TruncatingStorage {
        fn read_block(
            &self,
            _variable: &VariableRef,
            _origin: &[usize],
            _extent: &[usize],
        ) -> Result<Block> {
            Ok(Block::Float(array_from_vec(vec![1.0], &[1])?))
        }
    }

    #[test]
    fn storage_errors_propagate_unchanged() {
        let (_, var) = grid();
        let err = read_slice(
            &FailingStorage,
            &var,
            &[AxisSelector::Index(0), AxisSelector::Full, AxisSelector::Index(0)],
        )
        .unwrap_err();

        assert!(err.is_io_failure());
        match err {
            GridError::NetCDF(message) => assert_eq!(message, "HDF error"),
            other => panic!("expected NetCDF error, got {:?}", other),
        }
    }

    #[test]
    fn short_block_is_rejected() {
        let (_, var) = grid();
        let err = read_slice(
            &TruncatingStorage,
            &var,
            &[AxisSelector::Index(0), AxisSelector::Full, AxisSelector::Index(0)],
        )
        .unwrap_err();

        assert!(err.is_io_failure());
        match err {
            GridError::NetCDF(message) => {
                assert!(message.contains("returned 1 values"), "{}", message);
                assert!(message.contains("expected 3"), "{}", message);
            }
            other => panic!("expected NetCDF error, got {:?}", other),
        }
    }

    #[test]
    fn zero_dimensional_variable_reads_a_scalar() {
        let storage = MemoryStorage::new(&[]);
        let var = VariableRef::new("scalar", vec![], "", ElementType::Float);
        let sample = read_slice(&storage, &var, &[]).unwrap();
        assert_eq!(sample, RawSample::Scalar(Scalar::Float(0.0)));
    }
}
