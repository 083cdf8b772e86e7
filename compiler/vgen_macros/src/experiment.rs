//! `#[consumable_experiment]` attribute implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use vgen_codegen::{generate, parse_args, HostDecl};

use crate::utils::{argument_error, diagnostics_to_error};

/// Main entry point for the attribute.
pub fn consumable_experiment(args: TokenStream, input: TokenStream) -> TokenStream {
    let item = TokenStream2::from(input);
    match expand(args.into(), &item) {
        Ok(tokens) => tokens.into(),
        Err(err) => {
            let error = err.to_compile_error();
            quote! { #item #error }.into()
        }
    }
}

fn expand(args: TokenStream2, item: &TokenStream2) -> syn::Result<TokenStream2> {
    let config = parse_args(args).map_err(|err| argument_error(&err))?;
    let parsed: syn::Item = syn::parse2(item.clone())?;
    let decl = HostDecl::from_item(&parsed)
        .map_err(|diag| diagnostics_to_error(&parsed, &[diag]))?;
    let generated =
        generate(&decl, &config).map_err(|diags| diagnostics_to_error(&parsed, &diags))?;
    let artifact = generated.artifact;
    Ok(quote! {
        #item
        #artifact
    })
}
