//! Abelian groups over pluggable carrier sets.
//!
//! An abelian group `〈S, ·〉` is a set `S` with a binary operation `·`
//! that is commutative: `x · y = y · x`. This crate represents `S` by any
//! implementation of [`Set`] and `·` by any [`BinOp`], so a custom group is
//! built by supplying those two pieces.
//!
//! # Capabilities
//!
//! Beyond the base [`Set`] contract, a set may offer optional capabilities
//! that callers discover at runtime:
//!
//! | Capability | Operations | Query |
//! |------------|------------|-------|
//! | [`PartialOrdered`] | `less_equal`, `interval` | [`Set::partial_ordered`] |
//! | [`StrictOrdered`] | `less` | [`Set::strict_ordered`] |
//! | [`Enumerable`] | `enumerate`, `slice` | [`Set::enumerable`] |
//!
//! A missing capability is `None`, not an error.
//!
//! # Integer Tuples
//!
//! [`IntTupleSet`] is ℤⁿ: tuples of `n` integers under coordinate-wise
//! addition, ordered lexicographically. Its intervals are finite boxes
//! enumerated by an odometer, last coordinate fastest.
//!
//! # Example: 〈ℤxℤ, +〉
//!
//! ```
//! use abelian::prelude::*;
//!
//! let s = IntTupleSet::new(2);
//! let g = Group::new(s, s.add_op());
//! assert_eq!(g.to_string(), "〈ℤxℤ, +, (0,0)〉");
//!
//! let sum = g.apply(&s.tuple(&[1, 2])?, &s.tuple(&[2, 3])?)?;
//! assert_eq!(sum.to_string(), "(3,5)");
//! # Ok::<(), abelian::SetError>(())
//! ```
//!
//! # Example: Enumerating an Interval
//!
//! ```
//! use abelian::prelude::*;
//!
//! let s = IntTupleSet::new(2);
//! let g = Group::new(s, s.add_op());
//!
//! let po = g.partial_ordered().expect("ℤxℤ is partially ordered");
//! let iv = po.interval(&s.tuple(&[1, 1])?, &s.tuple(&[2, 2])?)?;
//!
//! let mut cursor = iv.enumerate();
//! let mut seen = Vec::new();
//! loop {
//!     let (next, more) = cursor.next_elem();
//!     seen.push(next.to_string());
//!     if !more {
//!         break;
//!     }
//! }
//! assert_eq!(seen, ["(1,1)", "(1,2)", "(2,1)", "(2,2)"]);
//! assert_eq!(iv.slice().len(), 4);
//! # Ok::<(), abelian::SetError>(())
//! ```
//!
//! # Errors
//!
//! Tuple construction, addition and interval construction are fallible and
//! return [`SetError`]. The library never logs through global state; it
//! emits `tracing` events that are silent unless the embedding program
//! installs a subscriber.

// Core contracts (elem, set, capabilities, binop) and errors
mod core;

// ℤⁿ: integer tuples, their sets and intervals
pub mod tuple;

// Groups 〈S, ·〉 over any set
pub mod group;

pub use crate::core::error;
pub use crate::core::traits;

pub use crate::core::error::{MismatchDimError, Result, SetError};
pub use crate::core::traits::{
    BinOp, Elem, Enumerable, Nexter, PartialOrdered, Set, StrictOrdered,
};
pub use group::{Capabilities, Group};
pub use tuple::{IntTuple, IntTupleInterval, IntTupleIter, IntTupleSet, TupleAdd};

/// Prelude module for convenient imports.
///
/// ```
/// use abelian::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::error::{Result, SetError};
    pub use crate::core::traits::{
        BinOp, Elem, Enumerable, Nexter, PartialOrdered, Set, StrictOrdered,
    };
    pub use crate::group::{Capabilities, Group};
    pub use crate::tuple::{IntTuple, IntTupleInterval, IntTupleIter, IntTupleSet, TupleAdd};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_group() {
        let s = IntTupleSet::new(1);
        let g = Group::new(s, s.add_op());
        let out = g
            .apply(&s.tuple(&[1]).unwrap(), &s.tuple(&[2]).unwrap())
            .unwrap();
        assert_eq!(g.to_string(), "〈ℤ, +, 0〉");
        assert_eq!(out.to_string(), "3");
    }

    #[test]
    fn test_pair_group() {
        let s = IntTupleSet::new(2);
        let g = Group::new(s, s.add_op());
        let out = g
            .apply(&s.tuple(&[1, 2]).unwrap(), &s.tuple(&[2, 3]).unwrap())
            .unwrap();
        assert_eq!(g.to_string(), "〈ℤxℤ, +, (0,0)〉");
        assert_eq!(out.to_string(), "(3,5)");
    }

    #[test]
    fn test_triple_group() {
        let s = IntTupleSet::new(3);
        let g = Group::new(s, s.add_op());
        let out = g
            .apply(&s.tuple(&[1, 2, 3]).unwrap(), &s.tuple(&[3, 4, 5]).unwrap())
            .unwrap();
        assert_eq!(g.to_string(), "〈ℤxℤxℤ, +, (0,0,0)〉");
        assert_eq!(out.to_string(), "(4,6,8)");
    }

    #[test]
    fn test_enumerate_through_group() {
        let s = IntTupleSet::new(2);
        let g = Group::new(s, s.add_op());
        let iv = g
            .partial_ordered()
            .unwrap()
            .interval(&s.tuple(&[1, 1]).unwrap(), &s.tuple(&[2, 2]).unwrap())
            .unwrap();
        let tuples: Vec<String> = iv
            .slice()
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{i} {t}"))
            .collect();
        assert_eq!(tuples, ["0 (1,1)", "1 (1,2)", "2 (2,1)", "3 (2,2)"]);
    }

    #[test]
    fn test_trivial_group() {
        let s = IntTupleSet::new(0);
        let g = Group::new(s, s.add_op());
        assert_eq!(g.to_string(), "〈∅, +, ()〉");
        let e = g.identity();
        let out = g.apply(&*e, &*e).unwrap();
        assert!(out.equals(&*e));
    }
}
