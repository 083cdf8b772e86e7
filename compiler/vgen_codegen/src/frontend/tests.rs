#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use syn::parse_quote;
use vgen_diagnostic::ErrorCode;
use vgen_ir::FieldSpec;
use vgen_lexer::LexMode;

use super::*;

fn feature_x() -> Item {
    parse_quote! {
        #[derive(Debug, Clone)]
        pub enum FeatureXExperiment {
            on,
            off,
            variationA { headerMessage: String },
            variationB { headerMessage: String },
        }
    }
}

#[test]
fn extracts_names_and_clauses_in_order() {
    let decl = HostDecl::from_item(&feature_x()).unwrap();
    assert_eq!(decl.name, "FeatureXExperiment");
    let names: Vec<_> = decl.variants.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["on", "off", "variationA", "variationB"]);
    assert_eq!(decl.variants[0].clause, None);
    assert_eq!(
        decl.variants[2].clause.as_deref(),
        Some("(headerMessage: String)")
    );
}

#[test]
fn carries_visibility_and_derives() {
    let decl = HostDecl::from_item(&feature_x()).unwrap();
    assert!(matches!(decl.vis, Visibility::Public(_)));
    assert_eq!(decl.attrs.len(), 1);
    assert!(decl.attrs[0].path().is_ident("derive"));
}

#[test]
fn marker_and_docs_are_not_carried() {
    let item: Item = parse_quote! {
        /// Docs.
        #[vgen_macros::consumable_experiment(exclude(off))]
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        enum E { a }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    let paths: Vec<String> = decl
        .attrs
        .iter()
        .map(|attr| attr.path().to_token_stream().to_string())
        .collect();
    assert_eq!(paths, ["derive", "serde"]);
}

#[test]
fn variant_attributes_are_kept_by_name() {
    let item: Item = parse_quote! {
        #[derive(Default)]
        enum Flag {
            on,
            #[default]
            off,
            #[serde(rename = "a")]
            variationA { headerMessage: String },
        }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    assert!(decl.variants[0].attrs.is_empty());
    assert!(decl.variants[1].attrs[0].path().is_ident("default"));

    let by_name: Vec<String> = decl.variant_attrs().into_iter().map(|(n, _)| n).collect();
    assert_eq!(by_name, ["off", "variationA"]);
}

#[test]
fn tuple_variants_give_unlabeled_clause() {
    let item: Item = parse_quote! {
        enum E { pair(String, u32) }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    assert_eq!(decl.variants[0].clause.as_deref(), Some("(String, u32)"));
    let catalog = decl.catalog(LexMode::Shallow);
    assert_eq!(
        catalog.variants()[0].fields,
        vec![FieldSpec::unlabeled("String"), FieldSpec::unlabeled("u32")]
    );
}

#[test]
fn raw_identifiers_are_unrawed() {
    let item: Item = parse_quote! {
        enum E { r#match { r#type: String } }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    assert_eq!(decl.variants[0].name, "match");
    assert_eq!(decl.variants[0].clause.as_deref(), Some("(type: String)"));
}

#[test]
fn field_attributes_are_dropped() {
    let item: Item = parse_quote! {
        enum E {
            v {
                /// The greeting.
                #[allow(dead_code)]
                greeting: String,
            }
        }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    assert_eq!(
        decl.variants[0].clause.as_deref(),
        Some("(greeting: String)")
    );
}

#[test]
fn type_text_is_spaced_per_token() {
    let item: Item = parse_quote! {
        enum E {
            v { m: std::collections::HashMap<String, Vec<u8>> },
            t([u8; 4], &'static str),
        }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    assert_eq!(
        decl.variants[0].clause.as_deref(),
        Some("(m: std::collections::HashMap < String , Vec < u8 > >)")
    );
    assert_eq!(
        decl.variants[1].clause.as_deref(),
        Some("([u8 ; 4], & 'static str)")
    );
}

#[test]
fn catalog_uses_requested_lexer() {
    let item: Item = parse_quote! {
        enum E { v { m: HashMap<String, u32> } }
    };
    let decl = HostDecl::from_item(&item).unwrap();
    let field_count = |mode| decl.catalog(mode).variants()[0].fields.len();
    assert_eq!(field_count(LexMode::Shallow), 2);
    assert_eq!(field_count(LexMode::Structural), 1);
}

#[test]
fn struct_is_unsupported() {
    let item: Item = parse_quote! {
        struct NotACatalog { a: String }
    };
    let err = HostDecl::from_item(&item).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0001);
    assert!(err.message.contains("a struct"));
}

#[test]
fn generic_enum_is_unsupported() {
    let item: Item = parse_quote! {
        enum E<T> { v { t: T } }
    };
    let err = HostDecl::from_item(&item).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0001);
    assert!(err.message.contains("generic"));
}

#[test]
fn from_tokens_rejects_non_items() {
    let err = HostDecl::from_tokens(quote::quote! { 1 + 2 }).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0001);
}

// === catalogs_in_file ===

#[test]
fn finds_marked_enums_including_nested_modules() {
    let source = r#"
        use vgen_macros::consumable_experiment;

        #[consumable_experiment]
        enum Top { on, a }

        enum Unmarked { x }

        mod inner {
            #[vgen_macros::consumable_experiment(exclude(none), lexer = "structural")]
            pub enum Nested { none, b { m: Vec<String> } }
        }
    "#;
    let (found, problems) = catalogs_in_file(source).unwrap();
    assert!(problems.is_empty());
    let names: Vec<_> = found.iter().map(|m| m.decl.name.as_str()).collect();
    assert_eq!(names, ["Top", "Nested"]);
    assert_eq!(found[0].config, GenConfig::default());
    assert_eq!(found[1].config.lex_mode, LexMode::Structural);
    assert!(found[1].config.exclude.excludes("none"));
}

#[test]
fn marked_struct_is_a_problem_not_a_failure() {
    let source = r"
        #[consumable_experiment]
        struct S { a: String }

        #[consumable_experiment]
        enum E { a }
    ";
    let (found, problems) = catalogs_in_file(source).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].code, ErrorCode::E0001);
}

#[test]
fn bad_marker_arguments_are_e0003() {
    let source = r#"
        #[consumable_experiment(lexer = "deep")]
        enum E { a }
    "#;
    let (found, problems) = catalogs_in_file(source).unwrap();
    assert!(found.is_empty());
    assert_eq!(problems[0].code, ErrorCode::E0003);
}

#[test]
fn syntax_error_is_e0002() {
    let err = catalogs_in_file("enum {").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0002);
}
