//! Shared helpers for turning pass diagnostics into compiler errors.

use proc_macro2::Span;
use quote::ToTokens;
use vgen_diagnostic::{Diagnostic, ErrorCode};

/// One `syn::Error` per diagnostic, combined and attached to `tokens`.
///
/// Declaration offsets are not meaningful inside a macro expansion, so the
/// whole annotated item is highlighted and labels are folded into the text.
pub fn diagnostics_to_error<T: ToTokens>(tokens: &T, diagnostics: &[Diagnostic]) -> syn::Error {
    let mut errors = diagnostics
        .iter()
        .map(|diag| syn::Error::new_spanned(tokens, render(diag)));
    let Some(mut combined) = errors.next() else {
        return syn::Error::new_spanned(tokens, "code generation failed");
    };
    for err in errors {
        combined.combine(err);
    }
    combined
}

/// A diagnostic reported at the macro call site.
pub fn diagnostic_to_error(diag: &Diagnostic) -> syn::Error {
    syn::Error::new(Span::call_site(), render(diag))
}

/// A rejected attribute argument as `E0003`, kept at the argument.
pub fn argument_error(err: &syn::Error) -> syn::Error {
    let diag = Diagnostic::error(ErrorCode::E0003).with_message(err.to_string());
    syn::Error::new(err.span(), render(&diag))
}

/// `[E2003] message (note: ...; help: ...)`, on one line so rustc prints
/// it as a single error message.
fn render(diag: &Diagnostic) -> String {
    let secondary = diag.labels.iter().filter(|l| !l.is_primary);
    let trailers: Vec<String> = secondary
        .map(|l| &l.message)
        .chain(&diag.notes)
        .map(|note| format!("note: {note}"))
        .chain(diag.suggestions.iter().map(|help| format!("help: {help}")))
        .collect();
    if trailers.is_empty() {
        format!("[{}] {}", diag.code, diag.message)
    } else {
        format!("[{}] {} ({})", diag.code, diag.message, trailers.join("; "))
    }
}
