use std::collections::HashMap;

use pretty_assertions::assert_eq;
use vgen_ir::{
    variables_from_pairs, ExclusionSet, FieldSpec, Variant, VariableMap, VariantCatalog,
};

use super::*;
use crate::project;

fn dispatcher_for(catalog: &VariantCatalog, exclude: &ExclusionSet) -> Dispatcher {
    match project(catalog, exclude) {
        Ok(projected) => Dispatcher::synthesize(&projected),
        Err(diag) => panic!("projection failed: {diag}"),
    }
}

fn band_greeting() -> VariantCatalog {
    VariantCatalog::new("FTUXMusicBandGreeting")
        .with_variant(Variant::bare("on"))
        .with_variant(Variant::bare("off"))
        .with_variant(Variant::with_fields(
            "theRollingStones",
            vec![
                FieldSpec::new("preferredMember", "String"),
                FieldSpec::new("song", "String"),
            ],
        ))
        .with_variant(Variant::with_fields(
            "theBeatles",
            vec![
                FieldSpec::new("preferredMember", "String"),
                FieldSpec::new("song", "String"),
            ],
        ))
}

#[test]
fn arms_follow_catalog_order() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let keys: Vec<_> = dispatcher.arms().iter().map(|a| a.key.as_str()).collect();
    assert_eq!(keys, ["therollingstones", "thebeatles"]);
    assert_eq!(dispatcher.arms()[0].labels, ["preferredMember", "song"]);
    assert_eq!(dispatcher.catalog(), "FTUXMusicBandGreeting");
}

#[test]
fn binds_every_declared_field() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let vars = variables_from_pairs([("preferredMember", "Mick"), ("song", "Angie")]);
    let expected = ConstructedValue::new("theRollingStones")
        .with_field("preferredMember", "Mick")
        .with_field("song", "Angie");
    let value = dispatcher.dispatch("theRollingStones", &vars);
    assert_eq!(value, Some(expected));
}

#[test]
fn missing_fields_default_to_empty_string() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let value = dispatcher.dispatch("theBeatles", &VariableMap::default());
    let expected = ConstructedValue::new("theBeatles")
        .with_field("preferredMember", "")
        .with_field("song", "");
    assert_eq!(value, Some(expected));
}

#[test]
fn extra_variables_are_ignored() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let vars = variables_from_pairs([("song", "Help!"), ("unrelated", "x")]);
    let value = dispatcher
        .dispatch("theBeatles", &vars)
        .map(|v| v.fields.len());
    assert_eq!(value, Some(2));
}

#[test]
fn matching_ignores_case_and_reports_declared_name() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let value = dispatcher.dispatch("THEBEATLES", &VariableMap::default());
    assert_eq!(value.map(|v| v.variant), Some("theBeatles".to_string()));
}

#[test]
fn first_match_wins_for_case_only_duplicates() {
    let catalog = VariantCatalog::new("Case")
        .with_variant(Variant::with_fields("A", vec![FieldSpec::new("first", "String")]))
        .with_variant(Variant::with_fields("a", vec![FieldSpec::new("second", "String")]));
    let dispatcher = dispatcher_for(&catalog, &ExclusionSet::none());
    for requested in ["A", "a"] {
        let value = dispatcher.dispatch(requested, &VariableMap::default());
        assert_eq!(value.map(|v| v.variant), Some("A".to_string()));
    }
}

#[test]
fn excluded_and_unknown_names_yield_none() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let vars = variables_from_pairs([("song", "x")]);
    assert_eq!(dispatcher.dispatch("on", &vars), None);
    assert_eq!(dispatcher.dispatch("Nonexistent", &vars), None);
    assert_eq!(dispatcher.dispatch("", &VariableMap::default()), None);
}

#[test]
fn empty_dispatcher_never_matches() {
    let catalog = VariantCatalog::new("E")
        .with_variant(Variant::bare("on"))
        .with_variant(Variant::bare("off"));
    let dispatcher = dispatcher_for(&catalog, &ExclusionSet::control_markers());
    assert!(dispatcher.is_empty());
    assert_eq!(dispatcher.dispatch("on", &VariableMap::default()), None);
    assert_eq!(dispatcher.select("anything"), None);
}

#[test]
fn bare_variant_binds_no_fields() {
    let catalog = VariantCatalog::new("E").with_variant(Variant::bare("plain"));
    let dispatcher = dispatcher_for(&catalog, &ExclusionSet::none());
    let value = dispatcher.dispatch("Plain", &VariableMap::default());
    assert_eq!(value, Some(ConstructedValue::new("plain")));
}

#[test]
fn accepts_std_hash_maps() {
    let dispatcher = dispatcher_for(&band_greeting(), &ExclusionSet::control_markers());
    let mut vars = HashMap::new();
    vars.insert("song".to_string(), "Yesterday".to_string());
    let value = dispatcher.dispatch("thebeatles", &vars);
    assert_eq!(
        value.as_ref().and_then(|v| v.field("song")),
        Some("Yesterday")
    );
    assert_eq!(
        value.as_ref().and_then(|v| v.field("preferredMember")),
        Some("")
    );
}
