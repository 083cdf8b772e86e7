//! Generation-time configuration.
//!
//! Everything here is fixed for one pass. The label default (empty string)
//! is not configurable.

use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::parse::Parser;
use syn::{Ident, LitStr, Token};
use vgen_ir::ExclusionSet;
use vgen_lexer::LexMode;

/// Name of the dispatcher function unless configured otherwise.
pub const DEFAULT_DISPATCH_FN: &str = "get_variation";

/// Settings for one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Variant names removed by projection.
    pub exclude: ExclusionSet,
    /// Field-list lexer used on each variant's clause.
    pub lex_mode: LexMode,
    /// Name of the projected enum; `Consumable{Catalog}` when `None`.
    pub consumable_name: Option<String>,
    /// Name of the generated dispatcher function.
    pub dispatch_fn: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            exclude: ExclusionSet::control_markers(),
            lex_mode: LexMode::Shallow,
            consumable_name: None,
            dispatch_fn: DEFAULT_DISPATCH_FN.to_string(),
        }
    }
}

impl GenConfig {
    #[must_use]
    pub fn with_exclude(mut self, exclude: ExclusionSet) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub fn with_lex_mode(mut self, lex_mode: LexMode) -> Self {
        self.lex_mode = lex_mode;
        self
    }

    #[must_use]
    pub fn with_consumable_name(mut self, name: impl Into<String>) -> Self {
        self.consumable_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_dispatch_fn(mut self, name: impl Into<String>) -> Self {
        self.dispatch_fn = name.into();
        self
    }

    /// The projected enum's name for a catalog called `catalog`.
    pub fn consumable_name_for(&self, catalog: &str) -> String {
        match &self.consumable_name {
            Some(name) => name.clone(),
            None => format!("Consumable{catalog}"),
        }
    }
}

/// Parse `#[consumable_experiment(...)]` arguments.
///
/// Accepts `exclude(a, b)`, `lexer = "shallow" | "structural"`,
/// `name = "Type"` and `dispatch_fn = "name"`. Empty input yields the
/// default configuration.
pub fn parse_args(args: TokenStream) -> syn::Result<GenConfig> {
    let mut config = GenConfig::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("exclude") {
            let content;
            syn::parenthesized!(content in meta.input);
            let names = content.parse_terminated(Ident::parse_any, Token![,])?;
            config.exclude = ExclusionSet::new(names.iter().map(|n| n.unraw().to_string()));
            Ok(())
        } else if meta.path.is_ident("lexer") {
            let lit: LitStr = meta.value()?.parse()?;
            config.lex_mode = lit.value().parse().map_err(|()| {
                syn::Error::new(lit.span(), "expected \"shallow\" or \"structural\"")
            })?;
            Ok(())
        } else if meta.path.is_ident("name") {
            let lit: LitStr = meta.value()?.parse()?;
            config.consumable_name = Some(lit.value());
            Ok(())
        } else if meta.path.is_ident("dispatch_fn") {
            let lit: LitStr = meta.value()?.parse()?;
            config.dispatch_fn = lit.value();
            Ok(())
        } else {
            Err(meta.error("unsupported consumable_experiment argument"))
        }
    });
    parser.parse2(args)?;
    Ok(config)
}
