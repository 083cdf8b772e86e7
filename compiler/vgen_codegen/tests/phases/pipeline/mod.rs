//! End-to-end runs of the generation pass.

use pretty_assertions::assert_eq;
use vgen_codegen::GenConfig;
use vgen_diagnostic::ErrorCode;
use vgen_ir::{variables_from_pairs, ConstructedValue, ExclusionSet, VariableMap};
use vgen_lexer::LexMode;

use crate::common::{decl, generated, generation_errors, variant_names, BAND_GREETING, FEATURE_X};

#[test]
fn feature_x_end_to_end() {
    let out = generated(FEATURE_X, &GenConfig::default());

    assert_eq!(variant_names(&out), ["variantA", "variantB"]);

    let vars = variables_from_pairs([("headerMessage", "Welcome")]);
    assert_eq!(
        out.dispatcher.dispatch("variantB", &vars),
        Some(ConstructedValue::new("variantB").with_field("headerMessage", "Welcome"))
    );
    assert_eq!(out.dispatcher.dispatch("on", &VariableMap::default()), None);
    assert!(out.warnings.is_empty());
}

#[test]
fn emitted_source_mirrors_the_declaration() {
    let out = generated(FEATURE_X, &GenConfig::default());
    let source = out.artifact.to_source();
    assert!(source.contains("#[derive(Debug, Clone, PartialEq)]"));
    assert!(source.contains("pub enum ConsumableFeatureXExperiment"));
    assert!(source.contains("impl FeatureXExperiment"));
    assert!(source.contains("pub fn get_variation<S: ::std::hash::BuildHasher>("));
    assert!(!source.contains("\"on\""));
    let a = source.find("\"varianta\"").expect("arm for variantA");
    let b = source.find("\"variantb\"").expect("arm for variantB");
    assert!(a < b, "arms must keep declaration order");
}

#[test]
fn configuration_flows_into_the_artifact() {
    let config = GenConfig::default()
        .with_exclude(ExclusionSet::new(["theBeatles"]))
        .with_consumable_name("Greeting")
        .with_dispatch_fn("greeting_for");
    let out = generated(BAND_GREETING, &config);
    assert_eq!(variant_names(&out), ["on", "off", "theRollingStones"]);
    assert_eq!(out.artifact.projected_type().ident, "Greeting");
    assert!(out.artifact.to_source().contains("fn greeting_for<"));
}

#[test]
fn regenerating_recomputes_the_same_artifact() {
    let first = generated(BAND_GREETING, &GenConfig::default());
    let second = generated(BAND_GREETING, &GenConfig::default());
    assert_eq!(first.artifact.to_source(), second.artifact.to_source());
    assert_eq!(first.dispatcher, second.dispatcher);
}

#[test]
fn case_shadowed_variant_generates_with_warning() {
    let out = generated("enum Shadow { Hero, hero }", &GenConfig::default());
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].code, ErrorCode::W1001);
    let value = out.dispatcher.dispatch("HERO", &VariableMap::default());
    assert_eq!(value.map(|v| v.variant), Some("Hero".to_string()));
}

#[test]
fn nested_generic_needs_structural_lexer() {
    let source = "enum Nested { v { counts: HashMap<String, u32> } }";

    let errors = generation_errors(source, &GenConfig::default());
    let codes: Vec<ErrorCode> = errors.iter().map(|d| d.code).collect();
    assert!(codes.contains(&ErrorCode::E2002) || codes.contains(&ErrorCode::E2003));

    let structural = GenConfig::default().with_lex_mode(LexMode::Structural);
    let out = generated(source, &structural);
    assert_eq!(out.projected.variants()[0].fields.len(), 1);
    assert_eq!(out.dispatcher.arms()[0].labels, ["counts"]);
}

#[test]
fn keyword_labels_emit_raw_identifiers() {
    let source = "enum Kw { r#match { r#type: String } }";
    let out = generated(source, &GenConfig::default());
    let tokens = out.artifact.tokens().to_string();
    assert!(tokens.contains("r#match"));
    assert!(tokens.contains("r#type"));
    let value = out
        .dispatcher
        .dispatch("MATCH", &variables_from_pairs([("type", "t")]));
    assert_eq!(
        value.and_then(|v| v.field("type").map(str::to_string)),
        Some("t".to_string())
    );
}

#[test]
fn everything_excluded_still_generates() {
    let out = generated("enum Toggle { on, off }", &GenConfig::default());
    assert!(out.projected.is_empty());
    assert!(out.dispatcher.is_empty());
    assert!(out.artifact.projected_type().variants.is_empty());
}

#[test]
fn duplicate_variant_stops_the_pass() {
    // syn accepts duplicate variant names; rustc would reject them later.
    let errors = generation_errors("enum Dup { a, b, a }", &GenConfig::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code, ErrorCode::E1001);
}

#[test]
fn lexers_agree_on_plain_catalogs() {
    let host = decl(BAND_GREETING);
    assert_eq!(
        host.catalog(LexMode::Shallow),
        host.catalog(LexMode::Structural)
    );
}
