use std::fmt;

use crate::bindings::{BindingSet, Bindings, NonEmpty};
use crate::tuple::{HasLength, List, Tuple};
use crate::tuple_like::TupleLike;
use crate::unary::Unary;

/// A fixed, ordered set of mutable borrows, which can be assigned from any [`TupleLike`] value
/// with the same number of elements, each convertible into the variable at its position.
///
/// An `Assign` is constructed from a tuple of mutable references `(&mut a, &mut b, ...)`, usually
/// with [`assign()`] or [`tie!`](crate::tie). It holds those references, not the variables, so it
/// cannot outlive them, and the variables cannot be used otherwise while it is alive.
///
/// # Examples
///
/// ```
/// use tie::assign;
///
/// let mut a = 0;
/// let mut b = String::new();
///
/// let mut ab = assign((&mut a, &mut b));
/// ab.set((42, "hello"));
/// ab.set((7, "world"));
/// drop(ab);
///
/// assert_eq!(a, 7);
/// assert_eq!(b, "world");
/// ```
///
/// A source with the wrong number of elements does not compile:
///
/// ```compile_fail
/// let mut a = 0;
/// let mut b = 0;
/// tie::assign((&mut a, &mut b)).set((1, 2, 3));
/// ```
///
/// Nor does one with an element that can't be converted into its variable:
///
/// ```compile_fail
/// let mut a = 0i32;
/// tie::assign((&mut a,)).set(("forty-two",));
/// ```
///
/// At least one variable must be bound:
///
/// ```compile_fail
/// tie::assign(()).set(());
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = "Refs::AsList: fmt::Debug"))]
pub struct Assign<Refs>
where
    Refs: Tuple,
    Refs::AsList: BindingSet + NonEmpty,
{
    bindings: Refs::AsList,
}

impl<Refs> Assign<Refs>
where
    Refs: Tuple,
    Refs::AsList: BindingSet + NonEmpty,
{
    /// The number of variables bound, which is also the number of elements every source must have.
    pub const ARITY: usize = <<Refs::AsList as HasLength>::Length as Unary>::VALUE;

    /// Bind the places borrowed by `refs`, in order.
    ///
    /// This performs no checks beyond those of the type system, which has already ensured that
    /// each element of `refs` is a mutable borrow.
    pub fn new(refs: Refs) -> Self {
        Assign {
            bindings: refs.into_list(),
        }
    }

    /// Assign each element of `source` to the variable at the same position, first to last.
    ///
    /// The elements are moved out of `source`, converted with [`Into`], and stored. Every bound
    /// variable is overwritten, so nothing from an earlier assignment survives. A `source` of the
    /// wrong length, or with any element that doesn't convert, is a compile error.
    ///
    /// Returns `self`, so assignments can be chained.
    pub fn set<Source>(&mut self, source: Source) -> &mut Self
    where
        Source: TupleLike,
        Refs::AsList: Bindings<Source::Elements>,
    {
        self.bindings.bind(source.into_elements());
        self
    }

    /// Like [`set`](Assign::set), but clones `source` instead of consuming it.
    pub fn set_cloned<Source>(&mut self, source: &Source) -> &mut Self
    where
        Source: TupleLike + Clone,
        Refs::AsList: Bindings<Source::Elements>,
    {
        self.set(source.clone())
    }

    /// The number of variables bound.
    pub fn arity(&self) -> usize {
        Self::ARITY
    }

    /// Give back the mutable borrows this was constructed from.
    pub fn into_bindings(self) -> Refs {
        self.bindings.into_tuple()
    }
}

/// Bind a tuple of mutable borrows for destructuring assignment.
///
/// Writing the bindings and the source together keeps the whole assignment in one expression:
///
/// ```
/// let (mut x, mut y, mut label) = (0.0, 0.0, String::new());
///
/// tie::assign((&mut x, &mut y, &mut label)).set((1.5, -2.0, "origin"));
///
/// assert_eq!((x, y, label.as_str()), (1.5, -2.0, "origin"));
/// ```
pub fn assign<Refs>(refs: Refs) -> Assign<Refs>
where
    Refs: Tuple,
    Refs::AsList: BindingSet + NonEmpty,
{
    Assign::new(refs)
}
