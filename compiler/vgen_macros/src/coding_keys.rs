//! `CodingKeys` derive macro implementation.

use proc_macro::TokenStream;
use syn::parse_macro_input;

use crate::utils::diagnostics_to_error;

/// Main entry point for the `CodingKeys` derive macro.
pub fn derive_coding_keys(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match vgen_codegen::coding_keys::derive(&input) {
        Ok(tokens) => tokens.into(),
        Err(diag) => diagnostics_to_error(&input, &[diag])
            .to_compile_error()
            .into(),
    }
}
