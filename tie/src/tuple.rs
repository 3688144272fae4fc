//! Conversions back and forth between flat tuples like `(P, Q, R)` and their corresponding
//! inductive structures like `(P, (Q, (R, ())))`.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of tuples, for readability. The traits here convert between the two equivalent
//! representations, at both the type and the value level.
//!
//! At present, tuples up to size 64 are supported.

use crate::tuple_like::TupleLike;
use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Rearrange this tuple into its inductive list, without copying or cloning any element.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Rearrange this inductive list into its tuple, without copying or cloning any element.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Positional access to the element at index `N` of an inductive list, counting from [`Z`].
///
/// Indices past the end of the list have no implementation, so they are rejected at compile time.
///
/// # Examples
///
/// ```
/// use tie::tuple::{Get, Tuple};
/// use tie::unary::UnaryOf;
///
/// let mut list = (1u8, "two", 3.0f64).into_list();
/// assert_eq!(*Get::<UnaryOf<1>>::get(&list), "two");
///
/// *Get::<UnaryOf<2>>::get_mut(&mut list) += 1.0;
/// assert_eq!(Get::<UnaryOf<2>>::into_element(list), 4.0);
/// ```
///
/// ```compile_fail
/// use tie::tuple::{Get, Tuple};
/// use tie::unary::UnaryOf;
///
/// let list = (1u8, "two").into_list();
/// let _ = Get::<UnaryOf<2>>::get(&list);
/// ```
pub trait Get<N: Unary> {
    /// The type of the element at index `N`.
    type Element;

    /// Borrow the element at index `N`.
    fn get(&self) -> &Self::Element;

    /// Mutably borrow the element at index `N`.
    fn get_mut(&mut self) -> &mut Self::Element;

    /// Move out the element at index `N`, dropping the rest.
    fn into_element(self) -> Self::Element;
}

impl<T, Ts> Get<Z> for (T, Ts) {
    type Element = T;

    fn get(&self) -> &T {
        &self.0
    }

    fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_element(self) -> T {
        self.0
    }
}

impl<N: Unary, T, Ts: Get<N>> Get<S<N>> for (T, Ts) {
    type Element = Ts::Element;

    fn get(&self) -> &Ts::Element {
        self.1.get()
    }

    fn get_mut(&mut self) -> &mut Ts::Element {
        self.1.get_mut()
    }

    fn into_element(self) -> Ts::Element {
        self.1.into_element()
    }
}

tie_macro::impl_tuples!(64);
