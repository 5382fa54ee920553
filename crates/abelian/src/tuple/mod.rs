//! The integer tuple sets ℤⁿ.
//!
//! - [`IntTupleSet`]: ℤⁿ for a fixed dimension `n`, ordered and with `+`
//! - [`IntTuple`]: an element of ℤⁿ
//! - [`TupleAdd`]: coordinate-wise addition as a [`BinOp`]
//! - [`IntTupleInterval`], [`IntTupleIter`]: enumerable boxes in ℤⁿ

mod elem;
mod interval;

pub use elem::IntTuple;
pub use interval::{IntTupleInterval, IntTupleIter};

use core::cmp::Ordering;
use core::fmt;

use tracing::debug;

use crate::core::error::{Result, SetError};
use crate::core::traits::{BinOp, Elem, Enumerable, PartialOrdered, Set, StrictOrdered};

/// The set ℤⁿ of integer tuples of a fixed dimension.
///
/// `IntTupleSet::new(1)` is ℤ, `IntTupleSet::new(2)` is ℤxℤ, and
/// `IntTupleSet::new(0)` is the trivial set whose only element is `()`.
///
/// The set is both [`PartialOrdered`] and [`StrictOrdered`] under the
/// lexicographic order of its tuples.
///
/// # Example
///
/// ```
/// use abelian::prelude::*;
///
/// let s = IntTupleSet::new(2);
/// assert_eq!(s.name(), "ℤxℤ");
/// assert_eq!(s.identity().to_string(), "(0,0)");
///
/// let x = s.tuple(&[1, 2])?;
/// let y = s.tuple(&[2, 3])?;
/// assert_eq!(s.add(&x, &y)?.to_string(), "(3,5)");
/// assert!(s.tuple(&[1]).is_err());
/// # Ok::<(), abelian::SetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntTupleSet {
    dimension: usize,
}

impl IntTupleSet {
    /// Creates ℤⁿ with `n = dimension`.
    #[inline]
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    /// Size of every tuple in the set.
    #[inline]
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Creates the tuple with coordinates `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DimensionMismatch`] if `values.len()` is not the
    /// set's dimension.
    pub fn tuple(&self, values: &[i64]) -> Result<IntTuple> {
        self.check(values.len())?;
        Ok(IntTuple::from(values))
    }

    /// The identity `(0,…,0)`.
    #[must_use]
    pub fn zero(&self) -> IntTuple {
        IntTuple::zeros(self.dimension)
    }

    /// True if `x` has this set's dimension.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: &IntTuple) -> bool {
        x.size() == self.dimension
    }

    /// Coordinate-wise sum `x + y`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DimensionMismatch`] if either operand has the
    /// wrong dimension, and [`SetError::Overflow`] if a coordinate sum does
    /// not fit in `i64`.
    pub fn add(&self, x: &IntTuple, y: &IntTuple) -> Result<IntTuple> {
        self.check(x.size())?;
        self.check(y.size())?;
        x.iter()
            .zip(y.iter())
            .enumerate()
            .map(|(axis, (a, b))| a.checked_add(*b).ok_or(SetError::Overflow { axis }))
            .collect::<Result<Vec<_>>>()
            .map(IntTuple::from)
    }

    /// Returns `x < y`. False if either tuple has the wrong dimension.
    #[must_use]
    pub fn less(&self, x: &IntTuple, y: &IntTuple) -> bool {
        self.contains(x) && self.contains(y) && x < y
    }

    /// Returns `x ≤ y`. False if either tuple has the wrong dimension.
    #[must_use]
    pub fn less_equal(&self, x: &IntTuple, y: &IntTuple) -> bool {
        self.contains(x) && self.contains(y) && x <= y
    }

    /// The enumerable box `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DimensionMismatch`] if either bound has the wrong
    /// dimension, and [`SetError::InvertedBound`] if `lo[i] > hi[i]` on some
    /// axis.
    pub fn interval(&self, lo: &IntTuple, hi: &IntTuple) -> Result<IntTupleInterval> {
        self.check(lo.size())?;
        self.check(hi.size())?;
        IntTupleInterval::new(lo.clone(), hi.clone())
    }

    /// The `+` operation of this set, for building groups.
    #[inline]
    #[must_use]
    pub const fn add_op(&self) -> TupleAdd {
        TupleAdd { set: *self }
    }

    fn check(&self, size: usize) -> Result<()> {
        if size == self.dimension {
            return Ok(());
        }
        debug!(got = size, expected = self.dimension, "tuple dimension mismatch");
        Err(SetError::DimensionMismatch {
            got: size,
            expected: self.dimension,
        })
    }

    /// Downcasts `x` to a tuple of this set.
    fn member<'a>(&self, x: &'a dyn Elem) -> Result<&'a IntTuple> {
        let t = x
            .downcast_ref::<IntTuple>()
            .ok_or_else(|| SetError::ForeignElem {
                set: self.name(),
                elem: x.to_string(),
            })?;
        self.check(t.size())?;
        Ok(t)
    }
}

impl fmt::Display for IntTupleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dimension == 0 {
            return f.write_str("∅");
        }
        for i in 0..self.dimension {
            if i != 0 {
                f.write_str("x")?;
            }
            f.write_str("ℤ")?;
        }
        Ok(())
    }
}

impl Set for IntTupleSet {
    fn is_in(&self, x: &dyn Elem) -> bool {
        x.downcast_ref::<IntTuple>()
            .is_some_and(|t| self.contains(t))
    }

    fn name(&self) -> String {
        self.to_string()
    }

    fn identity(&self) -> Box<dyn Elem> {
        Box::new(self.zero())
    }

    fn partial_ordered(&self) -> Option<&dyn PartialOrdered> {
        Some(self)
    }

    fn strict_ordered(&self) -> Option<&dyn StrictOrdered> {
        Some(self)
    }
}

impl PartialOrdered for IntTupleSet {
    fn less_equal(&self, x: &dyn Elem, y: &dyn Elem) -> bool {
        self.is_in(x) && matches!(x.compare(y), Some(Ordering::Less | Ordering::Equal))
    }

    fn interval(&self, lo: &dyn Elem, hi: &dyn Elem) -> Result<Box<dyn Enumerable>> {
        let lo = self.member(lo)?;
        let hi = self.member(hi)?;
        Ok(Box::new(IntTupleInterval::new(lo.clone(), hi.clone())?))
    }
}

impl StrictOrdered for IntTupleSet {
    fn less(&self, x: &dyn Elem, y: &dyn Elem) -> bool {
        self.is_in(x) && x.compare(y) == Some(Ordering::Less)
    }
}

/// Coordinate-wise addition on an [`IntTupleSet`], the group operation of ℤⁿ.
///
/// # Example
///
/// ```
/// use abelian::prelude::*;
///
/// let s = IntTupleSet::new(1);
/// let plus = s.add_op();
/// let sum = plus.apply(&s.tuple(&[1])?, &s.tuple(&[2])?)?;
/// assert_eq!(sum.to_string(), "3");
/// assert_eq!(plus.kind(), "+");
/// # Ok::<(), abelian::SetError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TupleAdd {
    set: IntTupleSet,
}

impl TupleAdd {
    /// The set this operation adds within.
    #[inline]
    #[must_use]
    pub const fn set(&self) -> IntTupleSet {
        self.set
    }
}

impl BinOp for TupleAdd {
    fn apply(&self, x: &dyn Elem, y: &dyn Elem) -> Result<Box<dyn Elem>> {
        let x = self.set.member(x)?;
        let y = self.set.member(y)?;
        Ok(Box::new(self.set.add(x, y)?))
    }

    fn kind(&self) -> &str {
        "+"
    }
}
