use {
    proc_macro2::{Span, TokenStream},
    quote::ToTokens,
    std::collections::HashSet,
    syn::Expr,
};

use crate::{target::Target, CompileError, Spanned};

/// The surface syntax of a `tie!` invocation: a comma-separated list of places to bind, in the
/// order their values will be assigned.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub bindings: Vec<Spanned<Expr>>,
}

impl Invocation {
    /// Check that every binding is a distinct assignable place, producing the [`Target`] that
    /// constructs the assigner.
    ///
    /// All errors are collected rather than stopping at the first, so that one expansion reports
    /// every bad binding at once.
    pub fn to_target(&self) -> Result<Target, Vec<Spanned<CompileError>>> {
        if self.bindings.is_empty() {
            return Err(vec![Spanned::new(
                CompileError::EmptyBindings,
                Span::call_site(),
            )]);
        }

        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        for binding in &self.bindings {
            let rendered = binding.inner.to_token_stream().to_string();
            if !is_place(&binding.inner) {
                errors.push(Spanned::new(CompileError::NotAPlace(rendered), binding.span));
            } else if !seen.insert(rendered.clone()) {
                errors.push(Spanned::new(
                    CompileError::DuplicateBinding(rendered),
                    binding.span,
                ));
            }
        }

        if errors.is_empty() {
            Ok(Target {
                places: self.bindings.clone(),
            })
        } else {
            Err(errors)
        }
    }

    /// Compile the invocation all the way to tokens.
    pub fn compile(&self) -> Result<TokenStream, Vec<Spanned<CompileError>>> {
        self.to_target().map(|target| target.into_token_stream())
    }
}

/// Whether `expr` denotes a memory location, i.e. something `&mut` can be applied to without
/// creating a temporary.
///
/// Fields and indices are places only when their base is. A path naming a `const` can't be told
/// apart from a variable by syntax alone, so it is accepted here and left to rustc.
fn is_place(expr: &Expr) -> bool {
    match expr {
        Expr::Path(path) => path.qself.is_none(),
        Expr::Field(field) => is_place(&field.base),
        Expr::Index(index) => is_place(&index.expr),
        Expr::Unary(unary) => matches!(unary.op, syn::UnOp::Deref(_)),
        Expr::Paren(paren) => is_place(&paren.expr),
        Expr::Group(group) => is_place(&group.expr),
        _ => false,
    }
}
