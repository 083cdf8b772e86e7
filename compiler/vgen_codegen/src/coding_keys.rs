//! Field-key enumeration for structs.
//!
//! `#[derive(CodingKeys)]` on `struct Profile { user_name: String }`
//! produces `ProfileCodingKeys::UserName` whose `as_str()` is
//! `"user_name"`. Fields marked `#[coding_keys(skip)]` are not stored keys
//! and get no variant.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident};
use vgen_diagnostic::{duplicate_variant, invalid_argument, unsupported_declaration, Diagnostic};

use crate::span_of;

/// Helper attribute name.
pub const HELPER_ATTRIBUTE: &str = "coding_keys";

/// Stored named fields of `input`, in declaration order.
pub fn stored_fields(input: &DeriveInput) -> Result<Vec<&Field>, Diagnostic> {
    let span = span_of(input.ident.span());
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) => return Err(unsupported_declaration(span, "a tuple struct")),
            Fields::Unit => return Err(unsupported_declaration(span, "a unit struct")),
        },
        Data::Enum(_) => return Err(unsupported_declaration(span, "an enum")),
        Data::Union(_) => return Err(unsupported_declaration(span, "a union")),
    };

    let mut stored = Vec::new();
    for field in fields {
        if !is_skipped(field)? {
            stored.push(field);
        }
    }
    Ok(stored)
}

fn is_helper(attr: &Attribute) -> bool {
    attr.path().is_ident(HELPER_ATTRIBUTE)
}

fn is_skipped(field: &Field) -> Result<bool, Diagnostic> {
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| is_helper(a)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported coding_keys attribute, expected `skip`"))
            }
        })
        .map_err(|err| invalid_argument(span_of(err.span()), err.to_string()))?;
    }
    Ok(skip)
}

/// Build the `{Struct}CodingKeys` enum and its impls.
pub fn derive(input: &DeriveInput) -> Result<TokenStream, Diagnostic> {
    let fields = stored_fields(input)?;
    let keys_ident = format_ident!("{}CodingKeys", input.ident.unraw());
    let vis = &input.vis;

    let mut variants: Vec<Ident> = Vec::with_capacity(fields.len());
    let mut keys: Vec<String> = Vec::with_capacity(fields.len());
    for field in &fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let key = ident.unraw().to_string();
        let variant = format_ident!("{}", upper_camel(&key), span = ident.span());
        if let Some(pos) = variants.iter().position(|v| *v == variant) {
            return Err(duplicate_variant(
                &keys_ident.to_string(),
                &variant.to_string(),
                span_of(fields[pos].span()),
                span_of(field.span()),
            ));
        }
        variants.push(variant);
        keys.push(key);
    }

    tracing::debug!(
        target_type = %input.ident,
        keys = keys.len(),
        "coding keys derived"
    );
    Ok(quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #vis enum #keys_ident {
            #(#variants,)*
        }

        impl #keys_ident {
            /// Every key, in field declaration order.
            pub const ALL: &'static [Self] = &[#(Self::#variants,)*];

            /// The field name this key stands for.
            pub fn as_str(self) -> &'static str {
                match self {
                    #(Self::#variants => #keys,)*
                }
            }
        }

        impl ::std::fmt::Display for #keys_ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    })
}

/// `user_name` -> `UserName`, `headerMessage` -> `HeaderMessage`.
fn upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if out == "Self" {
        out.push('_');
    }
    out
}
