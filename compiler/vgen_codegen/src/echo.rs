//! Source echo: pair an expression's value with its own text.
//!
//! `source_echo!(a + b)` expands to `(a + b, "a + b")`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Expr;
use vgen_diagnostic::{invalid_argument, Diagnostic};

use crate::span_of;

/// How the echoed text is cased.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum EchoCase {
    #[default]
    Verbatim,
    Upper,
}

/// Build the `(expr, "text")` tuple for `tokens`.
///
/// The text is the expression's source when the host can provide it, and
/// otherwise the tokens as `proc_macro2` renders them.
pub fn source_echo(tokens: TokenStream, case: EchoCase) -> Result<TokenStream, Diagnostic> {
    let expr: Expr = syn::parse2(tokens.clone()).map_err(|err| {
        invalid_argument(
            span_of(err.span()),
            format!("source echo expects one expression: {err}"),
        )
    })?;

    let text = source_text(&tokens).unwrap_or_else(|| tokens.to_string());
    let text = match case {
        EchoCase::Verbatim => text,
        EchoCase::Upper => text.to_uppercase(),
    };
    tracing::trace!(text = %text, "source echo");
    Ok(quote! { (#expr, #text) })
}

/// Original text covering every token, if spans can be joined.
fn source_text(tokens: &TokenStream) -> Option<String> {
    let mut iter = tokens.clone().into_iter();
    let first = iter.next()?.span();
    let span = match iter.last() {
        Some(last) => first.join(last.span())?,
        None => first,
    };
    span.source_text()
}
