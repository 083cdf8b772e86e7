//! Rust emission of a projected catalog and its dispatcher.
//!
//! The artifact is two items:
//!
//! ```text
//! #[derive(..)]                     // copied from the source enum
//! pub enum ConsumableFeatureX { variationA { headerMessage: String }, .. }
//!
//! impl FeatureX {
//!     pub fn get_variation<S: BuildHasher>(
//!         variation_name: &str,
//!         variables: &HashMap<String, String, S>,
//!     ) -> Option<ConsumableFeatureX> { .. }
//! }
//! ```
//!
//! The function body is an if-chain over the dispatcher's arms in order,
//! so it returns exactly what [`Dispatcher::dispatch`] would.
//!
//! All identifier handling lives here: keywords become raw identifiers and
//! names that cannot be identifiers at all are reported. Earlier stages
//! never see sanitized names.

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, ItemEnum, ItemImpl, Path, Token, Type, Visibility};
use vgen_diagnostic::{
    internal_error, invalid_field_type, invalid_identifier, mixed_field_kinds, Diagnostic,
};
use vgen_ir::{ProjectedCatalog, Span, Variant};

use crate::config::DEFAULT_DISPATCH_FN;
use crate::dispatch::{DispatchArm, Dispatcher};

/// Host-facing choices for one emission.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    /// Name of the projected enum.
    pub consumable_name: String,
    /// Name of the dispatcher function.
    pub dispatch_fn: String,
    /// Visibility of the projected enum and the dispatcher function.
    pub vis: Visibility,
    /// Attributes placed on the projected enum.
    pub attrs: Vec<Attribute>,
    /// Attributes placed on retained variants, by exact variant name.
    pub variant_attrs: Vec<(String, Vec<Attribute>)>,
}

impl EmitOptions {
    /// Private items, no attributes, the default dispatcher name.
    pub fn new(consumable_name: impl Into<String>) -> Self {
        EmitOptions {
            consumable_name: consumable_name.into(),
            dispatch_fn: DEFAULT_DISPATCH_FN.to_string(),
            vis: Visibility::Inherited,
            attrs: Vec::new(),
            variant_attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dispatch_fn(mut self, name: impl Into<String>) -> Self {
        self.dispatch_fn = name.into();
        self
    }

    #[must_use]
    pub fn with_vis(mut self, vis: Visibility) -> Self {
        self.vis = vis;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: Vec<Attribute>) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub fn with_variant_attrs(mut self, variant_attrs: Vec<(String, Vec<Attribute>)>) -> Self {
        self.variant_attrs = variant_attrs;
        self
    }

    fn attrs_of(&self, variant: &str) -> &[Attribute] {
        self.variant_attrs
            .iter()
            .find(|(name, _)| name == variant)
            .map(|(_, attrs)| attrs.as_slice())
            .unwrap_or_default()
    }
}

/// The projected enum plus the impl block holding the dispatcher.
#[derive(Clone, Debug)]
pub struct EmittedArtifact {
    projected_type: ItemEnum,
    dispatcher: ItemImpl,
}

impl EmittedArtifact {
    pub fn projected_type(&self) -> &ItemEnum {
        &self.projected_type
    }

    pub fn dispatcher(&self) -> &ItemImpl {
        &self.dispatcher
    }

    /// Both items as one token stream, enum first.
    pub fn tokens(&self) -> TokenStream {
        self.to_token_stream()
    }

    /// Both items as formatted Rust source.
    pub fn to_source(&self) -> String {
        let file = syn::File {
            shebang: None,
            attrs: Vec::new(),
            items: vec![
                syn::Item::Enum(self.projected_type.clone()),
                syn::Item::Impl(self.dispatcher.clone()),
            ],
        };
        prettyplease::unparse(&file)
    }
}

impl ToTokens for EmittedArtifact {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.projected_type.to_tokens(tokens);
        self.dispatcher.to_tokens(tokens);
    }
}

/// Emit the projected enum and the dispatcher function.
///
/// Every problem in the catalog is reported, not only the first.
pub fn emit(
    projected: &ProjectedCatalog,
    dispatcher: &Dispatcher,
    options: &EmitOptions,
) -> Result<EmittedArtifact, Vec<Diagnostic>> {
    if projected.len() != dispatcher.arms().len() {
        return Err(vec![internal_error(format!(
            "dispatcher for `{}` has {} arms but the projected catalog has {} variants",
            dispatcher.catalog(),
            dispatcher.arms().len(),
            projected.len(),
        ))]);
    }

    let mut errors = Vec::new();
    let catalog_ident = checked_ident(projected.name(), projected.span(), "catalog", &mut errors);
    let consumable_ident = checked_ident(
        &options.consumable_name,
        projected.span(),
        "projected type name",
        &mut errors,
    );
    let dispatch_fn = checked_ident(
        &options.dispatch_fn,
        projected.span(),
        "dispatcher function name",
        &mut errors,
    );

    let shapes: Vec<Option<VariantShape>> = projected
        .variants()
        .iter()
        .map(|variant| {
            VariantShape::lower(variant, options.attrs_of(&variant.name), &mut errors)
        })
        .collect();

    let (Some(catalog_ident), Some(consumable_ident), Some(dispatch_fn)) =
        (catalog_ident, consumable_ident, dispatch_fn)
    else {
        return Err(errors);
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    let shapes: Vec<VariantShape> = shapes.into_iter().flatten().collect();

    let vis = &options.vis;
    let attrs = container_attrs(&options.attrs, shapes.iter().any(VariantShape::is_default));
    let variants = shapes.iter().map(VariantShape::declaration);
    let enum_tokens = quote! {
        #(#attrs)*
        #[allow(non_camel_case_types, non_snake_case)]
        #vis enum #consumable_ident {
            #(#variants,)*
        }
    };

    let arms = shapes
        .iter()
        .zip(dispatcher.arms())
        .map(|(shape, arm)| shape.arm(&consumable_ident, arm));
    let impl_tokens = quote! {
        impl #catalog_ident {
            #[allow(unused_variables)]
            #vis fn #dispatch_fn<S: ::std::hash::BuildHasher>(
                variation_name: &str,
                variables: &::std::collections::HashMap<::std::string::String, ::std::string::String, S>,
            ) -> ::std::option::Option<#consumable_ident> {
                let variation_name = variation_name.to_lowercase();
                #(#arms)*
                ::std::option::Option::None
            }
        }
    };

    let projected_type = syn::parse2::<ItemEnum>(enum_tokens)
        .map_err(|err| vec![internal_error(format!("emitted enum does not parse: {err}"))])?;
    let dispatcher_impl = syn::parse2::<ItemImpl>(impl_tokens)
        .map_err(|err| vec![internal_error(format!("emitted impl does not parse: {err}"))])?;

    tracing::debug!(
        catalog = projected.name(),
        projected_type = %options.consumable_name,
        variants = shapes.len(),
        "artifact emitted"
    );
    Ok(EmittedArtifact {
        projected_type,
        dispatcher: dispatcher_impl,
    })
}

/// A variant lowered to Rust syntax.
struct VariantShape {
    ident: Ident,
    fields: FieldsShape,
    attrs: Vec<Attribute>,
}

enum FieldsShape {
    Unit,
    /// `label: Type` fields.
    Named(Vec<(Ident, Type)>),
    /// Unlabeled fields; each label is the type.
    Tuple(Vec<Type>),
}

impl VariantShape {
    fn lower(variant: &Variant, attrs: &[Attribute], errors: &mut Vec<Diagnostic>) -> Option<Self> {
        let ident = checked_ident(&variant.name, variant.span, "variant name", errors);

        let unlabeled = variant.fields.iter().filter(|f| f.is_unlabeled()).count();
        let fields = if variant.fields.is_empty() {
            Some(FieldsShape::Unit)
        } else if unlabeled == variant.fields.len() {
            let types: Vec<Type> = variant
                .fields
                .iter()
                .filter_map(|field| checked_type(variant, &field.label, &field.label, errors))
                .collect();
            (types.len() == variant.fields.len()).then_some(FieldsShape::Tuple(types))
        } else if unlabeled == 0 {
            let mut named = Vec::new();
            for field in &variant.fields {
                let label = checked_ident(&field.label, variant.span, "field label", errors);
                let ty = checked_type(variant, &field.label, &field.type_text, errors);
                if let (Some(label), Some(ty)) = (label, ty) {
                    named.push((label, ty));
                }
            }
            (named.len() == variant.fields.len()).then_some(FieldsShape::Named(named))
        } else {
            errors.push(mixed_field_kinds(variant.span, &variant.name));
            None
        };

        Some(VariantShape {
            ident: ident?,
            fields: fields?,
            attrs: attrs.to_vec(),
        })
    }

    /// Marked `#[default]` for `derive(Default)`.
    fn is_default(&self) -> bool {
        self.attrs.iter().any(|a| a.path().is_ident("default"))
    }

    fn declaration(&self) -> TokenStream {
        let ident = &self.ident;
        let attrs = &self.attrs;
        match &self.fields {
            FieldsShape::Unit => quote! { #(#attrs)* #ident },
            FieldsShape::Named(fields) => {
                let labels = fields.iter().map(|(label, _)| label);
                let types = fields.iter().map(|(_, ty)| ty);
                quote! { #(#attrs)* #ident { #(#labels: #types),* } }
            }
            FieldsShape::Tuple(types) => quote! { #(#attrs)* #ident ( #(#types),* ) },
        }
    }

    /// `if variation_name == "key" { return Some(..); }`
    fn arm(&self, consumable: &Ident, arm: &DispatchArm) -> TokenStream {
        let ident = &self.ident;
        let key = &arm.key;
        let lookups = arm.labels.iter().map(|label| {
            quote! {
                ::std::convert::Into::into(
                    variables.get(#label).cloned().unwrap_or_default()
                )
            }
        });
        let construct = match &self.fields {
            FieldsShape::Unit => quote! { #consumable::#ident },
            FieldsShape::Named(fields) => {
                let labels = fields.iter().map(|(label, _)| label);
                quote! { #consumable::#ident { #(#labels: #lookups),* } }
            }
            FieldsShape::Tuple(_) => quote! { #consumable::#ident ( #(#lookups),* ) },
        };
        quote! {
            if variation_name == #key {
                return ::std::option::Option::Some(#construct);
            }
        }
    }
}

/// The projected enum's attributes.
///
/// `derive(Default)` needs a `#[default]` variant, so `Default` is removed
/// from the derive lists when that variant was excluded.
fn container_attrs(attrs: &[Attribute], has_default_variant: bool) -> Vec<Attribute> {
    if has_default_variant {
        return attrs.to_vec();
    }
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("derive") {
                return Some(attr.clone());
            }
            let parser = Punctuated::<Path, Token![,]>::parse_terminated;
            let Ok(paths) = attr.parse_args_with(parser) else {
                return Some(attr.clone());
            };
            let kept: Vec<&Path> = paths.iter().filter(|p| !is_default_derive(p)).collect();
            if kept.len() == paths.len() {
                Some(attr.clone())
            } else if kept.is_empty() {
                None
            } else {
                Some(syn::parse_quote!(#[derive(#(#kept),*)]))
            }
        })
        .collect()
}

/// `Default`, `std::default::Default` and the like.
fn is_default_derive(path: &Path) -> bool {
    path.segments
        .last()
        .is_some_and(|segment| segment.ident == "Default")
}

/// Sanitize `name` into an identifier, recording `E2001` when impossible.
fn checked_ident(
    name: &str,
    span: Span,
    what: &str,
    errors: &mut Vec<Diagnostic>,
) -> Option<Ident> {
    let ident = sanitize_ident(name);
    if ident.is_none() {
        errors.push(invalid_identifier(span, what, name));
    }
    ident
}

/// `name` as an identifier; keywords become raw identifiers.
///
/// Returns `None` for text that is not an identifier, and for the keywords
/// that cannot be raw (`self`, `Self`, `super`, `crate`, `_`).
pub(crate) fn sanitize_ident(name: &str) -> Option<Ident> {
    if matches!(name, "self" | "Self" | "super" | "crate" | "_") || !single_token(name) {
        return None;
    }
    if let Ok(ident) = syn::parse_str::<Ident>(name) {
        return Some(ident);
    }
    // Only keywords reach this point with a word-like name.
    syn::parse_str::<Ident>(&format!("r#{name}")).ok()
}

/// Reparse `type_text` as a type, recording `E2003` when it does not parse.
fn checked_type(
    variant: &Variant,
    label: &str,
    type_text: &str,
    errors: &mut Vec<Diagnostic>,
) -> Option<Type> {
    let ty = balanced(type_text)
        .then(|| syn::parse_str::<Type>(type_text).ok())
        .flatten();
    if ty.is_none() {
        errors.push(invalid_field_type(variant.span, &variant.name, label, type_text));
    }
    ty
}

/// Whether `text` has no characters that could not start or continue an
/// identifier, so it can only lex as one token.
fn single_token(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c == '_' || c == '#' || c.is_alphanumeric())
}

/// Whether `()`, `[]` and `{}` pair up, so tokenizing cannot fail on an
/// unclosed delimiter.
fn balanced(text: &str) -> bool {
    let mut open = Vec::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if open.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    open.is_empty()
}
