/*!
Assign to several existing variables at once, from the elements of a tuple, an array, or any other
[`TupleLike`] value, with every mismatch caught at compile time.

```
use tie::tie;

let mut a: i32 = 0;
let mut b = String::new();

tie!(a, b).set((42, "hello"));
assert_eq!((a, b.as_str()), (42, "hello"));
```

Rust's own destructuring assignment (`(a, b) = (1, 2);`) covers literal tuples whose types match
their variables exactly. This crate generalizes it in three directions:

- the source can be **any tuple-like value**: tuples, arrays, and structs which
  `#[derive(TupleLike)]`;
- each element is converted into its variable with [`Into`], so `&str` can be assigned to a
  `String`, or a `u8` to an `i64`;
- the **binding set is a value** which can be stored, passed around, and assigned from again and
  again.

What it never does is check anything at runtime. An [`Assign`] will only accept a source with
exactly as many elements as it has variables, each of which converts into the variable at the same
position. Anything else is not a program:

```compile_fail
let (mut a, mut b) = (0, 0);
tie::tie!(a, b).set((1, 2, 3)); // three elements for two variables
```

```compile_fail
let mut a = 0i32;
tie::tie!(a).set(("not a number",)); // no `From<&str>` for `i32`
```

[`tie!`] only binds places. A field or index of a temporary would be assigned and then dropped, so
it is rejected as well:

```compile_fail
struct Point { x: i64 }
fn origin() -> Point { Point { x: 0 } }

tie::tie!(origin().x).set((5,));
```

A `const` is indistinguishable from a variable by syntax, so `tie!(CONST)` is left to rustc, which
warns about mutating a `const` item.

## Quick reference

- [`assign()`] takes a tuple of mutable references `(&mut a, &mut b, ...)` and returns an
  [`Assign`] bound to them; [`tie!`] does the same from a list of places, `tie!(a, b.field,
  c[0])`.
- [`Assign::set`] moves each element of a source into its variable, in order, and returns the
  assigner so it can be used again. [`Assign::set_cloned`] clones the source first.
- [`TupleLike`] is the contract sources implement: [`TupleLike::LEN`] elements, available by
  position with [`TupleLike::element`].
- The [`tuple`] and [`unary`] modules hold the type-level machinery underneath: tuples as inductive
  lists, and the unary numbers that measure and index them.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod bindings;
pub mod tuple;
pub mod tuple_like;
pub mod unary;

mod assign;

pub use assign::{assign, Assign};
pub use tuple_like::{ElementOf, LengthOf, TupleLike};

// `tie-macro` is always a dependency, since the tuple and array impls are generated by it.
// The `derive` feature only controls whether its public macros are re-exported.
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use tie_macro::{tie, TupleLike};

/// The prelude module for quickly getting started with `tie`.
///
/// This module is designed to be imported as `use tie::prelude::*;`.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{assign, Assign, TupleLike};
    #[cfg(feature = "derive")]
    #[doc(no_inline)]
    pub use tie_macro::tie;
}
