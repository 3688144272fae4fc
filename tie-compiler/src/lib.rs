//! The compiler behind the `tie` crate's procedural macros.
//!
//! Everything here is ordinary library code operating on [`proc_macro2`] token streams, so that it
//! can be tested without going through a `proc-macro = true` crate. The `tie-macro` crate is a
//! thin shim which parses its input with the types defined here and hands the result back to
//! `rustc`.

use {
    lazy_static::lazy_static,
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::FoundCrate,
    quote::ToTokens,
    std::fmt,
    syn::Ident,
    thiserror::Error,
};

pub mod derive;
pub mod generate;
mod parse;
mod syntax;
mod target;

pub use parse::Arity;
pub use syntax::Invocation;
pub use target::Target;

/// An error detected while expanding one of the `tie` macros.
///
/// None of these can happen at runtime: they are reported by the macro as a `compile_error!` at
/// the span of the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum CompileError {
    #[error("`tie!` requires at least one variable to bind")]
    EmptyBindings,
    #[error("`{0}` is bound more than once in the same `tie!`")]
    DuplicateBinding(String),
    #[error(
        "`{0}` is not an assignable place: expected a variable, field, index, or dereference"
    )]
    NotAPlace(String),
    #[error("`TupleLike` can only be derived for structs, not {0}s")]
    UnsupportedShape(&'static str),
}

/// Some `T` paired with the [`Span`] of the source it came from.
#[derive(Clone, Copy)]
pub struct Spanned<T> {
    pub inner: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

impl<T: fmt::Debug> fmt::Debug for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T: fmt::Display> fmt::Display for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<T> From<T> for Spanned<T> {
    fn from(inner: T) -> Self {
        Spanned {
            inner,
            span: Span::call_site(),
        }
    }
}

impl<T: ToTokens> ToTokens for Spanned<T> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.inner.to_tokens(tokens)
    }
}

/// Fold a list of errors into a single [`syn::Error`], preserving every message and span.
pub fn into_syn_error(errors: Vec<Spanned<CompileError>>) -> syn::Error {
    let mut errors = errors
        .into_iter()
        .map(|error| syn::Error::new(error.span, error.inner));
    let mut combined = errors.next().unwrap_or_else(|| {
        syn::Error::new(Span::call_site(), "macro expansion failed without a reported cause")
    });
    for error in errors {
        combined.combine(error);
    }
    combined
}

/// The name under which the `tie` crate is visible to the code being expanded.
///
/// When the expansion happens inside the `tie` crate's own tests and doctests, or when the crate
/// can't be found at all (as in this crate's tests), this falls back to `tie`.
pub(crate) fn tie_crate(span: Span) -> Ident {
    lazy_static! {
        static ref CRATE_NAME: String = match proc_macro_crate::crate_name("tie") {
            Ok(FoundCrate::Name(name)) => name,
            Ok(FoundCrate::Itself) | Err(_) => "tie".to_owned(),
        };
    }

    Ident::new(&**CRATE_NAME, span)
}
