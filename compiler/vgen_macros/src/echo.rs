//! `source_echo!` and `source_echo_upper!`.

use proc_macro::TokenStream;
use vgen_codegen::echo::EchoCase;

use crate::utils::diagnostic_to_error;

pub fn source_echo(input: TokenStream, case: EchoCase) -> TokenStream {
    match vgen_codegen::echo::source_echo(input.into(), case) {
        Ok(tokens) => tokens.into(),
        Err(diag) => diagnostic_to_error(&diag).to_compile_error().into(),
    }
}
