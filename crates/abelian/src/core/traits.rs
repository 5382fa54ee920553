//! Capability contracts for sets, their elements and binary operations.
//!
//! [`Set`] and [`Elem`] are the minimal contracts every carrier and member
//! satisfies. The ordering and enumeration capabilities are optional: a
//! caller holding a `&dyn Set` discovers them through the capability
//! queries on [`Set`], which return `None` unless the concrete set opts in.
//!
//! ```
//! use abelian::prelude::*;
//!
//! let s = IntTupleSet::new(1);
//! let carrier: &dyn Set = &s;
//!
//! let so = carrier.strict_ordered().expect("ℤ is strictly ordered");
//! let one = s.tuple(&[1]).unwrap();
//! let two = s.add(&one, &one).unwrap();
//! assert!(so.less(&one, &two));
//! ```

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;

use super::error::Result;

/// A member of a [`Set`].
///
/// Elements render as text through [`fmt::Display`] and compare three-way
/// against other elements. Comparing against an element of an incompatible
/// concrete kind yields `None` rather than an arbitrary answer.
pub trait Elem: fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// Three-way comparison, `None` if the two elements are incomparable.
    fn compare(&self, other: &dyn Elem) -> Option<Ordering>;

    /// Upcast used for downcasting to the concrete element type.
    fn as_any(&self) -> &dyn Any;

    /// Clones the element behind a fresh box.
    fn clone_elem(&self) -> Box<dyn Elem>;
}

impl dyn Elem {
    /// Returns the concrete element if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Elem>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// True if `self` and `other` compare equal.
    #[inline]
    pub fn equals(&self, other: &dyn Elem) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialEq for dyn Elem {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Clone for Box<dyn Elem> {
    fn clone(&self) -> Self {
        (**self).clone_elem()
    }
}

/// A named, possibly infinite carrier of [`Elem`] values.
///
/// Sets are immutable once constructed and can be shared freely.
pub trait Set: fmt::Debug + Send + Sync {
    /// Tests whether `x` is a member. Foreign or malformed elements are
    /// simply not members.
    fn is_in(&self, x: &dyn Elem) -> bool;

    /// Human-readable name of the set, e.g. `ℤxℤ`.
    fn name(&self) -> String;

    /// The identity element. Every call returns a fresh value.
    fn identity(&self) -> Box<dyn Elem>;

    /// The `≤` capability, if the set supports it.
    fn partial_ordered(&self) -> Option<&dyn PartialOrdered> {
        None
    }

    /// The `<` capability, if the set supports it.
    fn strict_ordered(&self) -> Option<&dyn StrictOrdered> {
        None
    }

    /// The enumeration capability, if the set is finite and enumerable.
    fn enumerable(&self) -> Option<&dyn Enumerable> {
        None
    }
}

/// Sets whose elements are partially ordered (`≤` defined).
///
/// A partially ordered set can also carve out a finite interval for
/// enumeration.
pub trait PartialOrdered: Send + Sync {
    /// Returns `x ≤ y`, or `false` if either element is foreign to the set.
    fn less_equal(&self, x: &dyn Elem, y: &dyn Elem) -> bool;

    /// The finite subset `{ a | lo ≤ a ≤ hi }`.
    ///
    /// # Errors
    ///
    /// Fails if either bound is not a member of the set, or if the bounds
    /// do not describe a non-empty interval.
    fn interval(&self, lo: &dyn Elem, hi: &dyn Elem) -> Result<Box<dyn Enumerable>>;
}

/// Sets whose elements are strictly ordered (`<` defined).
pub trait StrictOrdered: Send + Sync {
    /// Returns `x < y`, or `false` if either element is foreign to the set.
    fn less(&self, x: &dyn Elem, y: &dyn Elem) -> bool;
}

/// A cursor over the elements of an [`Enumerable`] set.
///
/// `next_elem` reports the current element together with whether another
/// element follows. The call that yields the last element returns it with
/// `false`; that element is valid and must be consumed. Calls after that
/// keep returning the last element with `false`.
pub trait Nexter {
    /// Returns the current element and whether more elements follow.
    fn next_elem(&mut self) -> (Box<dyn Elem>, bool);
}

/// A finite set whose members can be ranged over in a fixed order.
pub trait Enumerable: Set {
    /// Lazy, single-pass cursor over the members.
    fn enumerate(&self) -> Box<dyn Nexter + '_>;

    /// All members, in enumeration order.
    fn slice(&self) -> Vec<Box<dyn Elem>> {
        let mut out = Vec::new();
        let mut cursor = self.enumerate();
        loop {
            let (next, more) = cursor.next_elem();
            out.push(next);
            if !more {
                break;
            }
        }
        out
    }
}

/// A binary operation between two elements of a set.
///
/// Any closure `Fn(&dyn Elem, &dyn Elem) -> Result<Box<dyn Elem>>` is a
/// `BinOp`; its [`kind`](BinOp::kind) is the generic `"BinOp"`.
pub trait BinOp: Send + Sync {
    /// Computes `x · y`.
    ///
    /// # Errors
    ///
    /// Fails if the operands are not elements the operation accepts.
    fn apply(&self, x: &dyn Elem, y: &dyn Elem) -> Result<Box<dyn Elem>>;

    /// Label for the operator in formal group descriptions.
    fn kind(&self) -> &str {
        "BinOp"
    }
}

impl<F> BinOp for F
where
    F: Fn(&dyn Elem, &dyn Elem) -> Result<Box<dyn Elem>> + Send + Sync,
{
    #[inline]
    fn apply(&self, x: &dyn Elem, y: &dyn Elem) -> Result<Box<dyn Elem>> {
        self(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Label(&'static str);

    impl fmt::Display for Label {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl Elem for Label {
        fn compare(&self, other: &dyn Elem) -> Option<Ordering> {
            other.downcast_ref::<Label>().map(|o| self.0.cmp(o.0))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn clone_elem(&self) -> Box<dyn Elem> {
            Box::new(self.clone())
        }
    }

    #[derive(Debug)]
    struct Singleton;

    impl Set for Singleton {
        fn is_in(&self, x: &dyn Elem) -> bool {
            x.downcast_ref::<Label>().is_some_and(|l| l.0 == "e")
        }

        fn name(&self) -> String {
            "{e}".into()
        }

        fn identity(&self) -> Box<dyn Elem> {
            Box::new(Label("e"))
        }
    }

    #[test]
    fn capabilities_default_to_absent() {
        let s = Singleton;
        assert!(s.partial_ordered().is_none());
        assert!(s.strict_ordered().is_none());
        assert!(s.enumerable().is_none());
    }

    #[test]
    fn boxed_elems_clone_and_compare() {
        let e = Singleton.identity();
        let f = e.clone();
        assert!(e.equals(&*f));
        assert_eq!(f.to_string(), "e");
        assert!(Singleton.is_in(&*f));
    }

    #[test]
    fn closures_are_binops() {
        let op = |x: &dyn Elem, _y: &dyn Elem| -> Result<Box<dyn Elem>> { Ok(x.clone_elem()) };
        let e = Label("e");
        let r = op.apply(&e, &e).unwrap();
        assert_eq!(r.to_string(), "e");
        assert_eq!(op.kind(), "BinOp");
    }
}
