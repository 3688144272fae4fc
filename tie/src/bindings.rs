//! The binding set: an inductive list of mutable borrows, and the compile-time contract deciding
//! which element lists it may be assigned from.

use crate::tuple::{HasLength, List};

/// An inductive list `(&mut V0, (&mut V1, (..., ())))` of mutable borrows of caller-owned places.
///
/// A binding set never owns what it refers to. The lifetime of each borrow ties any value holding
/// the set to the variables it binds.
pub trait BindingSet: List + HasLength {}

impl BindingSet for () {}

impl<'a, V: 'a, Vs> BindingSet for (&'a mut V, Vs)
where
    Vs: BindingSet,
    (&'a mut V, Vs): List,
{
}

/// A binding set with at least one variable. Only these can be held by an [`Assign`](crate::Assign).
#[diagnostic::on_unimplemented(
    message = "`{Self}` binds no variables",
    label = "at least one variable must be bound"
)]
pub trait NonEmpty: BindingSet {}

impl<'a, V: 'a, Vs> NonEmpty for (&'a mut V, Vs)
where
    Vs: BindingSet,
    (&'a mut V, Vs): List,
{
}

/// A binding set which can be assigned, position by position, from the element list `Elements`.
///
/// This holds exactly when both lists have the same length and every element converts with
/// [`Into`] into the variable at the same position. The two conditions are checked together: an
/// element list that is too long, too short, or has a single incompatible element is simply not
/// an assignable source, and any attempt to use it fails to compile before anything is assigned.
#[diagnostic::on_unimplemented(
    message = "the variables `{Self}` cannot be assigned from the elements `{Elements}`",
    label = "lengths differ, or some element does not convert into its variable",
    note = "element `i` must implement `Into<V>` for the variable `&mut V` at position `i`, and there must be exactly one element per variable"
)]
pub trait Bindings<Elements>: BindingSet {
    /// Assign every element to the variable at the same position, from first to last.
    fn bind(&mut self, elements: Elements);
}

impl Bindings<()> for () {
    fn bind(&mut self, (): ()) {}
}

impl<'a, V: 'a, Vs, T, Ts> Bindings<(T, Ts)> for (&'a mut V, Vs)
where
    T: Into<V>,
    Vs: Bindings<Ts>,
    (&'a mut V, Vs): List,
{
    fn bind(&mut self, (head, tail): (T, Ts)) {
        *self.0 = head.into();
        self.1.bind(tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    type Two = (&'static mut i64, (&'static mut String, ()));

    assert_impl_all!((): BindingSet, Bindings<()>);
    assert_impl_all!(Two: BindingSet);
    assert_not_impl_any!((i64, (String, ())): BindingSet);
    assert_not_impl_any!((&'static i64, ()): BindingSet);

    assert_impl_all!(Two: NonEmpty);
    assert_impl_all!((&'static mut u8, ()): NonEmpty);
    assert_not_impl_any!((): NonEmpty);

    // Exact types, and conversions through `Into`.
    assert_impl_all!(Two: Bindings<(i64, (String, ()))>);
    assert_impl_all!(Two: Bindings<(i32, (&'static str, ()))>);
    assert_impl_all!(Two: Bindings<(u8, (char, ()))>);

    // Too few, too many.
    assert_not_impl_any!(Two: Bindings<()>, Bindings<(i64, ())>);
    assert_not_impl_any!(Two: Bindings<(i64, (String, (bool, ())))>);

    // One bad element spoils the lot, wherever it is.
    assert_not_impl_any!(Two: Bindings<(&'static str, (String, ()))>);
    assert_not_impl_any!(Two: Bindings<(i64, (i64, ()))>);
    assert_not_impl_any!(Two: Bindings<(u64, (String, ()))>);

    #[test]
    fn binds_in_order() {
        let mut a = 0i64;
        let mut b = String::new();
        let mut set = (&mut a, (&mut b, ()));
        set.bind((42i64, ("hello", ())));
        assert_eq!(a, 42);
        assert_eq!(b, "hello");
    }

    #[test]
    fn empty_binds_nothing() {
        ().bind(());
    }
}
