extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput},
    tie_compiler::{Arity, Invocation},
};

/// Bind a list of places for destructuring assignment. See the `tie` crate for documentation.
#[proc_macro]
pub fn tie(input: TokenStream) -> TokenStream {
    let invocation = parse_macro_input!(input as Invocation);
    match invocation.compile() {
        Ok(tokens) => tokens.into(),
        Err(errors) => tie_compiler::into_syn_error(errors)
            .to_compile_error()
            .into(),
    }
}

/// Derive `TupleLike` for a struct, taking its fields in declaration order.
///
/// The generated `into_elements` moves every field out of the struct, so it can't be derived for a
/// struct that implements `Drop` and has a field which isn't `Copy`:
///
/// ```compile_fail
/// use tie::TupleLike;
///
/// #[derive(TupleLike)]
/// struct Guard {
///     name: String,
/// }
///
/// impl Drop for Guard {
///     fn drop(&mut self) {}
/// }
/// ```
///
/// Enums and unions are rejected. A unit struct has no elements.
#[proc_macro_derive(TupleLike)]
pub fn derive_tuple_like(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match tie_compiler::derive::tuple_like(&input) {
        Ok(tokens) => tokens.into(),
        Err(errors) => tie_compiler::into_syn_error(errors)
            .to_compile_error()
            .into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let Arity(max) = parse_macro_input!(input as Arity);
    tie_compiler::generate::tuples(max).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_arrays(input: TokenStream) -> TokenStream {
    let Arity(max) = parse_macro_input!(input as Arity);
    tie_compiler::generate::arrays(max).into()
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let Arity(max) = parse_macro_input!(input as Arity);
    tie_compiler::generate::unary_conversions(max).into()
}
