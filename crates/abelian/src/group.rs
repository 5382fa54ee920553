//! Abelian groups `〈S, ·〉`.
//!
//! A [`Group`] pairs a carrier [`Set`] with a commutative [`BinOp`]. Most of
//! the behaviour lives in the set; the group records which optional
//! capabilities its set offers when it is built.

use core::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::error::Result;
use crate::core::traits::{BinOp, Elem, Enumerable, PartialOrdered, Set, StrictOrdered};

/// Optional capabilities of a carrier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    /// `≤` and intervals are available.
    pub partial_ordered: bool,
    /// `<` is available.
    pub strict_ordered: bool,
    /// The set itself can be enumerated.
    pub enumerable: bool,
}

impl Capabilities {
    /// Probes `set` for each capability.
    #[must_use]
    pub fn of(set: &dyn Set) -> Self {
        Self {
            partial_ordered: set.partial_ordered().is_some(),
            strict_ordered: set.strict_ordered().is_some(),
            enumerable: set.enumerable().is_some(),
        }
    }
}

/// An abelian group `〈S, ·〉`.
///
/// `S` is a possibly infinite set and `·` a binary operation on its
/// elements. Sets are held by shared reference, so several groups may use
/// the same carrier.
///
/// # Example
///
/// ```
/// use abelian::prelude::*;
///
/// let s = IntTupleSet::new(2);
/// let g = Group::new(s, s.add_op());
/// assert_eq!(g.to_string(), "〈ℤxℤ, +, (0,0)〉");
///
/// let sum = g.apply(&s.tuple(&[1, 2])?, &s.tuple(&[2, 3])?)?;
/// assert_eq!(sum.to_string(), "(3,5)");
///
/// // ℤxℤ is strictly ordered.
/// let so = g.strict_ordered().expect("ordered");
/// assert!(so.less(&s.tuple(&[1, 2])?, &s.tuple(&[2, 3])?));
/// # Ok::<(), abelian::SetError>(())
/// ```
#[derive(Clone)]
pub struct Group {
    set: Arc<dyn Set>,
    op: Arc<dyn BinOp>,
    caps: Capabilities,
}

impl Group {
    /// Creates the group `〈set, op〉`.
    pub fn new<S, O>(set: S, op: O) -> Self
    where
        S: Set + 'static,
        O: BinOp + 'static,
    {
        Self::from_shared(Arc::new(set), Arc::new(op))
    }

    /// Creates a group over an already shared set and operation.
    pub fn from_shared(set: Arc<dyn Set>, op: Arc<dyn BinOp>) -> Self {
        let caps = Capabilities::of(&*set);
        debug!(set = %set.name(), op = op.kind(), ?caps, "group");
        Self { set, op, caps }
    }

    /// The carrier set.
    #[inline]
    #[must_use]
    pub fn set(&self) -> &dyn Set {
        &*self.set
    }

    /// A shared handle to the carrier set.
    #[inline]
    #[must_use]
    pub fn shared_set(&self) -> Arc<dyn Set> {
        Arc::clone(&self.set)
    }

    /// The group operation.
    #[inline]
    #[must_use]
    pub fn op(&self) -> &dyn BinOp {
        &*self.op
    }

    /// Computes `x · y`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of the underlying operation.
    #[inline]
    pub fn apply(&self, x: &dyn Elem, y: &dyn Elem) -> Result<Box<dyn Elem>> {
        self.op.apply(x, y)
    }

    /// The identity element of the carrier.
    #[must_use]
    pub fn identity(&self) -> Box<dyn Elem> {
        self.set.identity()
    }

    /// Name of the carrier set.
    #[must_use]
    pub fn name(&self) -> String {
        self.set.name()
    }

    /// Capabilities of the carrier, as probed at construction.
    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// The carrier's `≤` capability.
    #[must_use]
    pub fn partial_ordered(&self) -> Option<&dyn PartialOrdered> {
        if self.caps.partial_ordered {
            self.set.partial_ordered()
        } else {
            None
        }
    }

    /// The carrier's `<` capability.
    #[must_use]
    pub fn strict_ordered(&self) -> Option<&dyn StrictOrdered> {
        if self.caps.strict_ordered {
            self.set.strict_ordered()
        } else {
            None
        }
    }

    /// The carrier's enumeration capability.
    #[must_use]
    pub fn enumerable(&self) -> Option<&dyn Enumerable> {
        if self.caps.enumerable {
            self.set.enumerable()
        } else {
            None
        }
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("set", &self.set)
            .field("op", &self.op.kind())
            .field("caps", &self.caps)
            .finish()
    }
}

impl fmt::Display for Group {
    /// Formal description `〈S, ·, e〉`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "〈{}, {}, {}〉",
            self.set.name(),
            self.op.kind(),
            self.set.identity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SetError;
    use crate::tuple::{IntTuple, IntTupleInterval, IntTupleSet};

    #[test]
    fn display_formal_description() {
        let s = IntTupleSet::new(1);
        assert_eq!(Group::new(s, s.add_op()).to_string(), "〈ℤ, +, 0〉");
        let s3 = IntTupleSet::new(3);
        assert_eq!(
            Group::new(s3, s3.add_op()).to_string(),
            "〈ℤxℤxℤ, +, (0,0,0)〉"
        );
    }

    #[test]
    fn closure_op_is_generic_binop() {
        let s = IntTupleSet::new(1);
        let plus_one = move |x: &dyn Elem, y: &dyn Elem| -> Result<Box<dyn Elem>> {
            let (x, y) = match (x.downcast_ref::<IntTuple>(), y.downcast_ref::<IntTuple>()) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(SetError::ForeignElem {
                        set: s.name(),
                        elem: x.to_string(),
                    })
                }
            };
            let sum = s.add(&s.add(x, y)?, &s.tuple(&[1])?)?;
            Ok(Box::new(sum))
        };
        let g = Group::new(s, plus_one);
        assert_eq!(g.to_string(), "〈ℤ, BinOp, 0〉");
        let r = g
            .apply(&s.tuple(&[1]).unwrap(), &s.tuple(&[2]).unwrap())
            .unwrap();
        assert_eq!(r.to_string(), "4");
    }

    #[test]
    fn capabilities_of_tuple_set() {
        let s = IntTupleSet::new(2);
        let g = Group::new(s, s.add_op());
        assert_eq!(
            g.capabilities(),
            Capabilities {
                partial_ordered: true,
                strict_ordered: true,
                enumerable: false,
            }
        );
        assert!(g.enumerable().is_none());
    }

    #[test]
    fn capabilities_of_interval() {
        let s = IntTupleSet::new(1);
        let iv = IntTupleInterval::new([0].into(), [2].into()).unwrap();
        let g = Group::new(iv, s.add_op());
        let caps = g.capabilities();
        assert!(caps.enumerable);
        assert!(!caps.strict_ordered);
        assert_eq!(g.enumerable().unwrap().slice().len(), 3);
    }

    #[test]
    fn strict_order_through_group() {
        let s = IntTupleSet::new(1);
        let g = Group::new(s, s.add_op());
        let so = g.strict_ordered().unwrap();
        let one = s.tuple(&[1]).unwrap();
        let two = g.apply(&one, &one).unwrap();
        assert!(so.less(&one, &*two));
        assert!(so.less(&*g.identity(), &one));
    }

    #[test]
    fn groups_share_a_set() {
        let s = IntTupleSet::new(2);
        let shared: Arc<dyn Set> = Arc::new(s);
        let plus: Arc<dyn BinOp> = Arc::new(s.add_op());
        let a = Group::from_shared(Arc::clone(&shared), Arc::clone(&plus));
        let b = Group::from_shared(Arc::clone(&shared), plus);
        assert_eq!(a.name(), b.name());
        assert!(Arc::ptr_eq(&a.shared_set(), &b.shared_set()));
        assert!(a.identity().equals(&*b.identity()));
    }
}
