//! Generation of the fixed-arity impls the `tie` crate provides for every size up to some bound.
//!
//! The generated impls name the traits they implement without a path, so each macro must be
//! invoked in a module where those names are in scope.

use {
    proc_macro2::{Literal, TokenStream},
    quote::{format_ident, quote},
    syn::Ident,
};

/// The right-nested list type `(T0, (T1, (..., ())))` over the given element types.
fn nested(items: &[TokenStream]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

fn idents(prefix: &str, count: usize) -> Vec<Ident> {
    (0..count).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

/// `Tuple`, `List`, and `TupleLike` impls for every tuple of arity `0..=max`.
pub fn tuples(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for arity in 0..=max {
        let params = idents("T", arity);
        let vars = idents("t", arity);
        let list_ty = nested(&params.iter().map(|p| quote!(#p)).collect::<Vec<_>>());
        let list_pat = nested(&vars.iter().map(|v| quote!(#v)).collect::<Vec<_>>());

        impls.extend(quote! {
            impl<#(#params),*> Tuple for (#(#params,)*) {
                type AsList = #list_ty;

                fn into_list(self) -> Self::AsList {
                    let (#(#vars,)*) = self;
                    #list_pat
                }
            }

            impl<#(#params),*> List for #list_ty {
                type AsTuple = (#(#params,)*);

                fn into_tuple(self) -> Self::AsTuple {
                    let #list_pat = self;
                    (#(#vars,)*)
                }
            }

            impl<#(#params),*> TupleLike for (#(#params,)*) {
                type Elements = #list_ty;

                fn into_elements(self) -> Self::Elements {
                    Tuple::into_list(self)
                }
            }
        });
    }
    impls
}

/// `TupleLike` impls for every array `[T; N]` with `N` in `0..=max`, whose elements are taken in
/// index order.
pub fn arrays(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    for len in 0..=max {
        let vars = idents("t", len);
        let n = Literal::usize_unsuffixed(len);
        let list_ty = nested(&vec![quote!(T); len]);
        let list_pat = nested(&vars.iter().map(|v| quote!(#v)).collect::<Vec<_>>());

        impls.extend(quote! {
            impl<T> TupleLike for [T; #n] {
                type Elements = #list_ty;

                fn into_elements(self) -> Self::Elements {
                    let [#(#vars),*] = self;
                    #list_pat
                }
            }
        });
    }
    impls
}

/// `ToUnary` and `ToConstant` impls linking `Number<N>` with its unary encoding, for every `N` in
/// `0..=max`.
pub fn unary_conversions(max: usize) -> TokenStream {
    let mut impls = TokenStream::new();
    let mut unary = quote!(Z);
    for n in 0..=max {
        let n_lit = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#n_lit> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#n_lit>;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls
}
