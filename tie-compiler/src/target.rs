//! The output of the `tie!` macro, produced by the compiler.

use {
    proc_macro2::TokenStream,
    quote::{quote_spanned, ToTokens},
    std::fmt,
    syn::Expr,
};

use crate::{tie_crate, Spanned};

/// A call to the `assign` factory, borrowing each place mutably in order.
///
/// Every `&mut` is emitted at the span of the place it borrows, so that borrow-checker errors
/// (for instance, binding the same variable through two different paths) point at the user's
/// source.
#[derive(Clone, Debug)]
pub struct Target {
    pub places: Vec<Spanned<Expr>>,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "assign((")?;
        for place in &self.places {
            write!(f, "&mut {}, ", place.inner.to_token_stream())?;
        }
        write!(f, "))")
    }
}

impl ToTokens for Target {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let borrows = self.places.iter().map(|place| {
            let span = place.span;
            quote_spanned!(span=> &mut #place)
        });

        let span = self
            .places
            .first()
            .map(|place| place.span)
            .unwrap_or_else(proc_macro2::Span::call_site);
        let tie = tie_crate(span);
        quote_spanned!(span=> #tie::assign((#(#borrows,)*))).to_tokens(tokens)
    }
}
