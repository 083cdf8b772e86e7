//! Procedural macros for variant catalogs.
//!
//! # Consumable experiments
//!
//! ```text
//! #[consumable_experiment]
//! #[derive(Debug, Clone, PartialEq)]
//! pub enum FeatureXExperiment {
//!     on,
//!     off,
//!     variationA { headerMessage: String },
//!     variationB { headerMessage: String },
//! }
//!
//! // Generated:
//! //   pub enum ConsumableFeatureXExperiment { variationA { .. }, variationB { .. } }
//! //   impl FeatureXExperiment {
//! //       pub fn get_variation(..) -> Option<ConsumableFeatureXExperiment>
//! //   }
//! ```
//!
//! The enum itself is left untouched. Its attributes (other than the
//! marker and doc comments) and the attributes of retained variants are
//! copied onto the projected enum; `Default` leaves the derive list when
//! the `#[default]` variant is excluded. On any error the enum is still
//! emitted, followed by a `compile_error!` and nothing else.
//!
//! # Siblings
//!
//! - `source_echo!(expr)` expands to `(expr, "expr")`.
//! - `source_echo_upper!(expr)` expands to `(expr, "EXPR")`.
//! - `#[derive(CodingKeys)]` builds `{Struct}CodingKeys` naming each stored
//!   field.

mod coding_keys;
mod echo;
mod experiment;
mod utils;

use proc_macro::TokenStream;
use vgen_codegen::echo::EchoCase;

/// Generate the projected enum and its dispatcher for a variant catalog.
///
/// # Arguments
///
/// - `exclude(a, b)` - variants to drop (default `on`, `off`).
/// - `lexer = "shallow" | "structural"` - field-list lexer (default
///   `"shallow"`, which splits on every comma).
/// - `name = "Type"` - projected enum name (default `Consumable{Enum}`).
/// - `dispatch_fn = "name"` - dispatcher name (default `get_variation`).
#[proc_macro_attribute]
pub fn consumable_experiment(args: TokenStream, input: TokenStream) -> TokenStream {
    experiment::consumable_experiment(args, input)
}

/// `(expr, "expr")`: the value together with its source text.
#[proc_macro]
pub fn source_echo(input: TokenStream) -> TokenStream {
    echo::source_echo(input, EchoCase::Verbatim)
}

/// `(expr, "EXPR")`: like `source_echo!` with the text upper-cased.
#[proc_macro]
pub fn source_echo_upper(input: TokenStream) -> TokenStream {
    echo::source_echo(input, EchoCase::Upper)
}

/// Derive `{Struct}CodingKeys`, one variant per stored named field.
///
/// Mark a field `#[coding_keys(skip)]` to leave it out.
#[proc_macro_derive(CodingKeys, attributes(coding_keys))]
pub fn derive_coding_keys(input: TokenStream) -> TokenStream {
    coding_keys::derive_coding_keys(input)
}
