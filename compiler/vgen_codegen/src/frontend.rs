//! Host declaration front-end over `syn`.
//!
//! Recognizes which item a generator is attached to and extracts what the
//! pass needs from it: the catalog name, each variant's name and raw
//! field-clause text, and the bits of the declaration that are mirrored on
//! the projected enum (visibility, container attributes and variant
//! attributes such as `#[default]` or `#[serde(...)]`).
//!
//! Field clauses are rebuilt as text, `(label: Type, ...)` or
//! `(Type, ...)`, so the field-list lexer sees the same shape regardless of
//! how the variant was written. Field attributes are dropped.

use proc_macro2::{Delimiter, Spacing, TokenStream, TokenTree};
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, Item, ItemEnum, Visibility};
use vgen_diagnostic::{unsupported_declaration, Diagnostic, ErrorCode};
use vgen_ir::{Span, Variant, VariantCatalog};
use vgen_lexer::{parse_fields_with, LexMode};

use crate::config::{parse_args, GenConfig};
use crate::span_of;

/// Name of the attribute that marks a catalog in source files.
pub const MARKER_ATTRIBUTE: &str = "consumable_experiment";

/// A variant as the host declared it, before field lexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawVariant {
    pub name: String,
    /// Raw field-clause text, `None` for a unit variant.
    pub clause: Option<String>,
    /// Outer attributes written on the variant.
    pub attrs: Vec<Attribute>,
    pub span: Span,
}

/// A catalog declaration recognized by the front-end.
#[derive(Clone, Debug)]
pub struct HostDecl {
    pub name: String,
    pub variants: Vec<RawVariant>,
    pub vis: Visibility,
    /// Attributes of the source enum re-emitted on the projected enum:
    /// everything except the marker and doc comments.
    pub attrs: Vec<Attribute>,
    pub span: Span,
}

impl HostDecl {
    /// Recognize a catalog declaration.
    ///
    /// Only non-generic enums are catalogs; every other item is `E0001`.
    pub fn from_item(item: &Item) -> Result<Self, Diagnostic> {
        match item {
            Item::Enum(item_enum) => Self::from_enum(item_enum),
            other => Err(unsupported_declaration(span_of(other.span()), item_kind(other))),
        }
    }

    /// Recognize a catalog declaration from tokens, as handed to an
    /// attribute macro.
    pub fn from_tokens(tokens: TokenStream) -> Result<Self, Diagnostic> {
        match syn::parse2::<Item>(tokens) {
            Ok(item) => Self::from_item(&item),
            Err(err) => Err(unsupported_declaration(
                span_of(err.span()),
                "tokens that are not an item",
            )),
        }
    }

    pub fn from_enum(item: &ItemEnum) -> Result<Self, Diagnostic> {
        if !item.generics.params.is_empty() {
            return Err(unsupported_declaration(span_of(item.generics.span()), "a generic enum"));
        }

        let variants = item
            .variants
            .iter()
            .map(|variant| RawVariant {
                name: variant.ident.unraw().to_string(),
                clause: field_clause(&variant.fields),
                attrs: variant.attrs.clone(),
                span: span_of(variant.span()),
            })
            .collect();

        Ok(HostDecl {
            name: item.ident.unraw().to_string(),
            variants,
            vis: item.vis.clone(),
            attrs: item
                .attrs
                .iter()
                .filter(|attr| !is_marker(attr) && !attr.path().is_ident("doc"))
                .cloned()
                .collect(),
            span: span_of(item.ident.span()),
        })
    }

    /// Each variant's attributes keyed by its exact name.
    pub fn variant_attrs(&self) -> Vec<(String, Vec<Attribute>)> {
        self.variants
            .iter()
            .filter(|raw| !raw.attrs.is_empty())
            .map(|raw| (raw.name.clone(), raw.attrs.clone()))
            .collect()
    }

    /// Lex every variant's clause and build the catalog.
    pub fn catalog(&self, mode: LexMode) -> VariantCatalog {
        let variants = self
            .variants
            .iter()
            .map(|raw| {
                let fields = raw
                    .clause
                    .as_deref()
                    .map(|clause| parse_fields_with(clause, mode))
                    .unwrap_or_default();
                Variant::with_fields(raw.name.clone(), fields).at(raw.span)
            })
            .collect();
        VariantCatalog::from_variants(self.name.clone(), variants).at(self.span)
    }
}

/// A catalog found in a source file, with the configuration written on its
/// marker attribute.
#[derive(Clone, Debug)]
pub struct MarkedDecl {
    pub decl: HostDecl,
    pub config: GenConfig,
}

/// Find every enum marked `#[consumable_experiment]` in a Rust source file,
/// including enums inside inline modules.
///
/// Returns the marked catalogs in source order plus the diagnostics for
/// marked items that could not be used.
pub fn catalogs_in_file(source: &str) -> Result<(Vec<MarkedDecl>, Vec<Diagnostic>), Diagnostic> {
    let file = syn::parse_file(source).map_err(|err| {
        Diagnostic::error(ErrorCode::E0002)
            .with_message(format!("cannot parse source: {err}"))
            .with_label(span_of(err.span()), "here")
    })?;

    let mut found = Vec::new();
    let mut problems = Vec::new();
    collect_marked(&file.items, &mut found, &mut problems);
    tracing::debug!(
        catalogs = found.len(),
        problems = problems.len(),
        "scanned source file"
    );
    Ok((found, problems))
}

fn collect_marked(items: &[Item], found: &mut Vec<MarkedDecl>, problems: &mut Vec<Diagnostic>) {
    for item in items {
        if let Item::Mod(module) = item {
            if let Some((_, nested)) = &module.content {
                collect_marked(nested, found, problems);
            }
            continue;
        }

        let Some(marker) = item_attrs(item).iter().find(|attr| is_marker(attr)) else {
            continue;
        };

        let config = match marker_args(marker) {
            Ok(config) => config,
            Err(err) => {
                problems.push(vgen_diagnostic::invalid_argument(
                    span_of(err.span()),
                    err.to_string(),
                ));
                continue;
            }
        };

        match HostDecl::from_item(item) {
            Ok(decl) => found.push(MarkedDecl { decl, config }),
            Err(diag) => problems.push(diag),
        }
    }
}

fn marker_args(attr: &Attribute) -> syn::Result<GenConfig> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(GenConfig::default()),
        syn::Meta::List(list) => parse_args(list.tokens.clone()),
        syn::Meta::NameValue(nv) => Err(syn::Error::new_spanned(
            nv,
            "expected `#[consumable_experiment]` or `#[consumable_experiment(...)]`",
        )),
    }
}

/// `#[consumable_experiment]` or any path ending in it.
fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|seg| seg.ident == MARKER_ATTRIBUTE)
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Enum(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Const(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        _ => &[],
    }
}

/// Rebuild a variant's field clause as text.
fn field_clause(fields: &Fields) -> Option<String> {
    let parts: Vec<String> = match fields {
        Fields::Unit => return None,
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let label = field
                    .ident
                    .as_ref()
                    .map(|ident| ident.unraw().to_string())
                    .unwrap_or_default();
                format!("{label}: {}", type_text(&field.ty))
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .map(|field| type_text(&field.ty))
            .collect(),
    };
    Some(format!("({})", parts.join(", ")))
}

/// A field type as text, spelled the same inside and outside a proc-macro:
/// one space between tokens, none after joint punctuation (`::`, `'a`).
fn type_text(ty: &syn::Type) -> String {
    let mut text = String::new();
    push_tokens(ty.to_token_stream(), &mut text);
    text
}

fn push_tokens(tokens: TokenStream, text: &mut String) {
    let mut glued = true;
    for tree in tokens {
        if !glued {
            text.push(' ');
        }
        glued = false;
        match tree {
            TokenTree::Group(group) => {
                let (open, close) = match group.delimiter() {
                    Delimiter::Parenthesis => ("(", ")"),
                    Delimiter::Bracket => ("[", "]"),
                    Delimiter::Brace => ("{ ", " }"),
                    Delimiter::None => ("", ""),
                };
                text.push_str(open);
                push_tokens(group.stream(), text);
                text.push_str(close);
            }
            TokenTree::Punct(punct) => {
                text.push(punct.as_char());
                glued = punct.spacing() == Spacing::Joint;
            }
            TokenTree::Ident(ident) => text.push_str(&ident.to_string()),
            TokenTree::Literal(literal) => text.push_str(&literal.to_string()),
        }
    }
}

/// Human-readable item kind for E0001.
fn item_kind(item: &Item) -> &'static str {
    match item {
        Item::Struct(_) => "a struct",
        Item::Union(_) => "a union",
        Item::Fn(_) => "a function",
        Item::Trait(_) => "a trait",
        Item::Impl(_) => "an impl block",
        Item::Type(_) => "a type alias",
        Item::Const(_) => "a constant",
        Item::Static(_) => "a static",
        Item::Mod(_) => "a module",
        _ => "an unsupported item",
    }
}

#[cfg(test)]
mod tests;
