//! Error values for set and group operations.
//!
//! Every fallible operation in this crate returns [`Result`]. A missing
//! capability (a set that is not ordered, say) is never an error: the
//! capability queries on [`Set`](super::traits::Set) return `None`.

/// Two tuple dimensions that were expected to be equal but were not.
///
/// # Example
///
/// ```
/// use abelian::MismatchDimError;
///
/// let err = MismatchDimError { dim1: 3, dim2: 2 };
/// assert_eq!(err.to_string(), "tuple dimension mismatch: 3 != 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("tuple dimension mismatch: {dim1} != {dim2}")]
pub struct MismatchDimError {
    /// Dimension that was supplied.
    pub dim1: usize,
    /// Dimension that was expected.
    pub dim2: usize,
}

/// Errors raised by set construction, tuple arithmetic and intervals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetError {
    /// A tuple's length does not match the dimension of its set.
    #[error("tuple dimension mismatch: {got} != {expected}")]
    DimensionMismatch {
        /// Length of the offending tuple.
        got: usize,
        /// Dimension required by the set.
        expected: usize,
    },

    /// An element of some other concrete kind was handed to a set.
    #[error("{elem} is not an element of {set}")]
    ForeignElem {
        /// Name of the set that rejected the element.
        set: String,
        /// Rendering of the rejected element.
        elem: String,
    },

    /// Interval bounds are inverted on one axis, so the box is empty.
    #[error("interval bound inverted on axis {axis}: {lo} > {hi}")]
    InvertedBound {
        /// Coordinate index of the inverted bound.
        axis: usize,
        /// Lower bound on that axis.
        lo: i64,
        /// Upper bound on that axis.
        hi: i64,
    },

    /// Coordinate-wise arithmetic left the range of `i64`.
    #[error("integer overflow on axis {axis}")]
    Overflow {
        /// Coordinate index that overflowed.
        axis: usize,
    },
}

impl From<MismatchDimError> for SetError {
    fn from(e: MismatchDimError) -> Self {
        Self::DimensionMismatch {
            got: e.dim1,
            expected: e.dim2,
        }
    }
}

impl SetError {
    /// Returns the mismatched dimensions if this is a dimension error.
    #[must_use]
    pub fn mismatch(&self) -> Option<MismatchDimError> {
        match self {
            Self::DimensionMismatch { got, expected } => Some(MismatchDimError {
                dim1: *got,
                dim2: *expected,
            }),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SetError>;
