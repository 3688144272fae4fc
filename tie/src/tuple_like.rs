//! The contract a value must satisfy to be destructured: a length fixed at compile time, and
//! positional, type-preserving access to each of its elements.

use crate::tuple::{Get, HasLength};
use crate::unary::*;

/// A fixed-size, heterogeneous, ordered aggregate.
///
/// Implemented for every tuple and every array of up to 64 elements. Structs can opt in with
/// `#[derive(TupleLike)]`, which takes their fields in declaration order. Values whose length is
/// only known at runtime, such as slices and `Vec`s, are deliberately not tuple-like.
///
/// # Examples
///
/// ```
/// use tie::TupleLike;
///
/// assert_eq!(<(u8, String, bool)>::LEN, 3);
/// assert_eq!(<[char; 4]>::LEN, 4);
///
/// assert_eq!((1, "a", 'b').element::<1>(), "a");
/// assert_eq!([10, 20, 30].element::<2>(), 30);
/// ```
///
/// Asking for an element past the end does not compile:
///
/// ```compile_fail
/// use tie::TupleLike;
///
/// let _ = (1, "a").element::<2>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not tuple-like",
    label = "expected a tuple, an array, or a struct deriving `TupleLike`",
    note = "only values whose number of elements is fixed at compile time can be destructured"
)]
pub trait TupleLike: Sized {
    /// The elements of this value, as an inductive list `(T0, (T1, (..., ())))`.
    type Elements: HasLength;

    /// The number of elements.
    const LEN: usize = <LengthOf<Self> as Unary>::VALUE;

    /// Take this value apart into its elements, in order.
    fn into_elements(self) -> Self::Elements;

    /// Move out the element at index `I`, dropping the rest.
    fn element<const I: usize>(self) -> ElementOf<Self, I>
    where
        Number<I>: ToUnary,
        Self::Elements: Get<UnaryOf<I>>,
    {
        Get::<UnaryOf<I>>::into_element(self.into_elements())
    }
}

/// The number of elements of a [`TupleLike`] type, as a unary type-level number.
pub type LengthOf<T> = <<T as TupleLike>::Elements as HasLength>::Length;

/// The type of the element at index `I` of a [`TupleLike`] type.
pub type ElementOf<T, const I: usize> = <<T as TupleLike>::Elements as Get<UnaryOf<I>>>::Element;

tie_macro::impl_arrays!(64);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_impl_all!((): TupleLike);
    assert_impl_all!((u8,): TupleLike);
    assert_impl_all!((u8, String, Vec<bool>): TupleLike);
    assert_impl_all!([String; 0]: TupleLike);
    assert_impl_all!([String; 64]: TupleLike);

    assert_not_impl_any!(u8: TupleLike);
    assert_not_impl_any!(String: TupleLike);
    assert_not_impl_any!(Vec<u8>: TupleLike);
    assert_not_impl_any!(&'static [u8]: TupleLike);
    assert_not_impl_any!([u8; 65]: TupleLike);

    assert_type_eq_all!(LengthOf<(u8, u16, u32)>, UnaryOf<3>);
    assert_type_eq_all!(LengthOf<[u8; 5]>, UnaryOf<5>);
    assert_type_eq_all!(ElementOf<(u8, u16, u32), 1>, u16);
    assert_type_eq_all!(ElementOf<[char; 3], 2>, char);
    assert_type_eq_all!(<[i64; 2] as TupleLike>::Elements, (i64, (i64, ())));

    #[test]
    fn lengths() {
        assert_eq!(<()>::LEN, 0);
        assert_eq!(<(u8,)>::LEN, 1);
        assert_eq!(<(u8, &str, [u8; 3])>::LEN, 3);
        assert_eq!(<[u8; 0]>::LEN, 0);
        assert_eq!(<[u8; 64]>::LEN, 64);
    }

    #[test]
    fn array_elements_keep_index_order() {
        let words = ["zero".to_owned(), "one".to_owned(), "two".to_owned()];
        assert_eq!(
            words.into_elements(),
            (
                "zero".to_owned(),
                ("one".to_owned(), ("two".to_owned(), ()))
            )
        );
    }

    #[test]
    fn element_moves_out() {
        let owned = (String::from("kept"), vec![1, 2, 3]);
        let v: Vec<i32> = owned.element::<1>();
        assert_eq!(v, [1, 2, 3]);
    }
}
