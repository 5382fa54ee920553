//! Integer tuples, the elements of ℤⁿ.

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;

use crate::core::traits::Elem;

/// A fixed-length sequence of integers, an element of an
/// [`IntTupleSet`](super::IntTupleSet).
///
/// Tuples order lexicographically: the first differing coordinate decides.
/// A tuple of size 1 renders as a bare integer, any other size as a
/// parenthesised list.
///
/// # Example
///
/// ```
/// use abelian::IntTuple;
///
/// assert_eq!(IntTuple::from(vec![5]).to_string(), "5");
/// assert_eq!(IntTuple::from(vec![1, 2]).to_string(), "(1,2)");
/// assert_eq!(IntTuple::zeros(0).to_string(), "()");
///
/// assert!(IntTuple::from(vec![1, 9]) < IntTuple::from(vec![2, 0]));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IntTuple(Vec<i64>);

impl IntTuple {
    /// The all-zero tuple of the given size.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self(vec![0; size])
    }

    /// Number of coordinates.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Coordinate `i`, if in range.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<i64> {
        self.0.get(i).copied()
    }

    /// Coordinates as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Iterates over the coordinates, left to right.
    pub fn iter(&self) -> core::slice::Iter<'_, i64> {
        self.0.iter()
    }

    /// Consumes the tuple, returning its coordinates.
    #[must_use]
    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }

    pub(crate) fn coords_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

impl From<Vec<i64>> for IntTuple {
    #[inline]
    fn from(v: Vec<i64>) -> Self {
        Self(v)
    }
}

impl From<&[i64]> for IntTuple {
    #[inline]
    fn from(v: &[i64]) -> Self {
        Self(v.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for IntTuple {
    #[inline]
    fn from(v: [i64; N]) -> Self {
        Self(v.to_vec())
    }
}

impl Index<usize> for IntTuple {
    type Output = i64;

    #[inline]
    fn index(&self, i: usize) -> &i64 {
        &self.0[i]
    }
}

impl<'a> IntoIterator for &'a IntTuple {
    type Item = &'a i64;
    type IntoIter = core::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for IntTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntTuple{:?}", self.0)
    }
}

impl fmt::Display for IntTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [x] = self.0.as_slice() {
            return write!(f, "{x}");
        }
        f.write_str("(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str(")")
    }
}

impl Elem for IntTuple {
    /// Lexicographic comparison. Tuples of different sizes, and elements
    /// that are not tuples at all, are incomparable.
    fn compare(&self, other: &dyn Elem) -> Option<Ordering> {
        let other = other.downcast_ref::<IntTuple>()?;
        if self.size() != other.size() {
            return None;
        }
        Some(self.0.cmp(&other.0))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_elem(&self) -> Box<dyn Elem> {
        Box::new(self.clone())
    }
}
