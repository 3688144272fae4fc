use {
    syn::{
        parse::{Parse, ParseStream, Result},
        punctuated::Punctuated,
        spanned::Spanned as _,
        Expr, LitInt, Token,
    },
};

use crate::{Invocation, Spanned};

/// The single argument to the impl-generating macros: the largest arity to generate for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity(pub usize);

impl Parse for Arity {
    fn parse(input: ParseStream) -> Result<Self> {
        let max = input.parse::<LitInt>()?.base10_parse::<usize>()?;
        Ok(Arity(max))
    }
}

impl Parse for Invocation {
    fn parse(input: ParseStream) -> Result<Self> {
        // Parsing each binding as a full expression lets us report non-places ourselves, with a
        // better message than a parse error would give.
        let bindings = Punctuated::<Expr, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|expr| {
                let span = expr.span();
                Spanned::new(expr, span)
            })
            .collect();
        Ok(Invocation { bindings })
    }
}
