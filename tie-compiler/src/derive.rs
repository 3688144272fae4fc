//! `#[derive(TupleLike)]`: expose a struct's fields, in declaration order, as tuple elements.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote},
    syn::{Data, DeriveInput, Fields},
};

use crate::{tie_crate, CompileError, Spanned};

pub fn tuple_like(input: &DeriveInput) -> Result<TokenStream, Vec<Spanned<CompileError>>> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(vec![Spanned::new(
                CompileError::UnsupportedShape("enum"),
                data.enum_token.span,
            )])
        }
        Data::Union(data) => {
            return Err(vec![Spanned::new(
                CompileError::UnsupportedShape("union"),
                data.union_token.span,
            )])
        }
    };

    let tie = tie_crate(Span::call_site());
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let types = fields.iter().map(|field| &field.ty).collect::<Vec<_>>();
    let vars = (0..fields.len())
        .map(|i| format_ident!("field_{}", i))
        .collect::<Vec<_>>();

    let pattern = match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|field| &field.ident);
            quote!(Self { #(#names: #vars),* })
        }
        Fields::Unnamed(_) => quote!(Self(#(#vars),*)),
        Fields::Unit => quote!(_),
    };

    let elements_ty = types
        .iter()
        .rev()
        .fold(quote!(()), |rest, ty| quote!((#ty, #rest)));
    let elements = vars
        .iter()
        .rev()
        .fold(quote!(()), |rest, var| quote!((#var, #rest)));

    Ok(quote! {
        impl #impl_generics #tie::TupleLike for #name #ty_generics #where_clause {
            type Elements = #elements_ty;

            fn into_elements(self) -> Self::Elements {
                let #pattern = self;
                #elements
            }
        }
    })
}
