//! Closed boxes of integer tuples and their odometer enumeration.
//!
//! An [`IntTupleInterval`] spans `lo..=hi`. Enumeration walks the box like
//! an odometer: the last coordinate turns fastest, and when it passes
//! `hi[last]` it resets to `lo[last]` and carries into its left neighbour.
//! A carry out of the first coordinate means the box is exhausted.
//!
//! ```
//! use abelian::IntTupleSet;
//!
//! let s = IntTupleSet::new(2);
//! let iv = s.interval(&s.tuple(&[1, 1])?, &s.tuple(&[2, 2])?)?;
//! let seen: Vec<String> = iv.iter().map(|t| t.to_string()).collect();
//! assert_eq!(seen, ["(1,1)", "(1,2)", "(2,1)", "(2,2)"]);
//! # Ok::<(), abelian::SetError>(())
//! ```

use core::cmp::Ordering;
use core::iter::FusedIterator;

use tracing::{debug, trace};

use super::IntTuple;
use crate::core::error::{Result, SetError};
use crate::core::traits::{Elem, Enumerable, Nexter, Set};

/// The finite subset `{ x | lo ≤ x ≤ hi }` of ℤⁿ.
///
/// Membership ([`Set::is_in`]) compares whole tuples lexicographically
/// against the bounds. Enumeration instead walks the per-coordinate box
/// `lo[i] ≤ x[i] ≤ hi[i]`, which [`contains_point`](Self::contains_point)
/// tests. The two disagree on boxes that are not a single lexicographic
/// run: for `(0,1)..(3,2)`, `(1,0)` is in the interval but never
/// enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntTupleInterval {
    lo: IntTuple,
    hi: IntTuple,
}

impl IntTupleInterval {
    /// Creates the interval `lo..=hi`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::DimensionMismatch`] if the bounds differ in
    /// size, and [`SetError::InvertedBound`] if `lo[i] > hi[i]` on any
    /// axis.
    pub fn new(lo: IntTuple, hi: IntTuple) -> Result<Self> {
        if lo.size() != hi.size() {
            debug!(lo = %lo, hi = %hi, "interval bounds differ in dimension");
            return Err(SetError::DimensionMismatch {
                got: hi.size(),
                expected: lo.size(),
            });
        }
        if let Some(axis) = (0..lo.size()).find(|&i| lo[i] > hi[i]) {
            debug!(lo = %lo, hi = %hi, axis, "interval bound inverted");
            return Err(SetError::InvertedBound {
                axis,
                lo: lo[axis],
                hi: hi[axis],
            });
        }
        debug!(lo = %lo, hi = %hi, "interval");
        Ok(Self { lo, hi })
    }

    /// Lower bound.
    #[inline]
    #[must_use]
    pub fn lo(&self) -> &IntTuple {
        &self.lo
    }

    /// Upper bound.
    #[inline]
    #[must_use]
    pub fn hi(&self) -> &IntTuple {
        &self.hi
    }

    /// Size of the tuples in the interval.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lo.size()
    }

    /// True if every coordinate of `x` lies within its axis bounds.
    ///
    /// This is exactly the set of points the interval enumerates.
    #[must_use]
    pub fn contains_point(&self, x: &IntTuple) -> bool {
        x.size() == self.dimension()
            && x
                .iter()
                .zip(self.lo.iter().zip(self.hi.iter()))
                .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }

    /// Odometer over the box, starting at `lo`.
    #[must_use]
    pub fn iter(&self) -> IntTupleIter {
        IntTupleIter {
            lo: self.lo.clone(),
            hi: self.hi.clone(),
            curr: self.lo.clone(),
            done: false,
        }
    }

    /// Every tuple in the box, in enumeration order.
    #[must_use]
    pub fn tuples(&self) -> Vec<IntTuple> {
        self.iter().collect()
    }
}

impl Set for IntTupleInterval {
    fn is_in(&self, x: &dyn Elem) -> bool {
        matches!(
            self.lo.compare(x),
            Some(Ordering::Less | Ordering::Equal)
        ) && matches!(
            self.hi.compare(x),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    fn name(&self) -> String {
        format!("{}≤..≤{}", self.lo, self.hi)
    }

    /// The zero tuple of the ambient ℤⁿ, which need not lie in the box.
    fn identity(&self) -> Box<dyn Elem> {
        Box::new(IntTuple::zeros(self.dimension()))
    }

    fn enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }
}

impl Enumerable for IntTupleInterval {
    fn enumerate(&self) -> Box<dyn Nexter + '_> {
        Box::new(self.iter())
    }
}

impl<'a> IntoIterator for &'a IntTupleInterval {
    type Item = IntTuple;
    type IntoIter = IntTupleIter;

    fn into_iter(self) -> IntTupleIter {
        self.iter()
    }
}

/// Odometer cursor over an [`IntTupleInterval`].
///
/// [`advance`](Self::advance) follows the report-then-stop protocol of
/// [`Nexter`]; the [`Iterator`] impl yields the same sequence and then
/// `None`.
#[derive(Debug, Clone)]
pub struct IntTupleIter {
    lo: IntTuple,
    hi: IntTuple,
    curr: IntTuple,
    done: bool,
}

impl IntTupleIter {
    /// One odometer step from `curr`. Saturates at `hi` on overflow.
    fn step(&self) -> IntTuple {
        let mut next = self.curr.clone();
        let coords = next.coords_mut();
        let mut carry = true;
        for i in (0..coords.len()).rev() {
            if coords[i] >= self.hi[i] {
                coords[i] = self.lo[i];
            } else {
                coords[i] += 1;
                carry = false;
                break;
            }
        }
        if carry {
            return self.hi.clone();
        }
        next
    }

    /// Returns the current tuple and whether another one follows.
    ///
    /// The last tuple comes back paired with `false`. Calling again after
    /// that repeats the last tuple.
    pub fn advance(&mut self) -> (IntTuple, bool) {
        let next = self.step();
        let current = core::mem::replace(&mut self.curr, next);
        let more = current != self.curr;
        if !more {
            trace!(last = %current, "interval exhausted");
        }
        (current, more)
    }
}

impl Nexter for IntTupleIter {
    fn next_elem(&mut self) -> (Box<dyn Elem>, bool) {
        let (t, more) = self.advance();
        (Box::new(t), more)
    }
}

impl Iterator for IntTupleIter {
    type Item = IntTuple;

    fn next(&mut self) -> Option<IntTuple> {
        if self.done {
            return None;
        }
        let (t, more) = self.advance();
        self.done = !more;
        Some(t)
    }
}

impl FusedIterator for IntTupleIter {}
