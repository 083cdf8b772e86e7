//! Property tests for projection and dispatch.

use proptest::prelude::*;
use vgen_codegen::{project, Dispatcher};
use vgen_ir::{
    names_match, variables_from_pairs, ExclusionSet, FieldSpec, ProjectedCatalog, Variant,
    VariableMap, VariantCatalog,
};

/// Catalogs with exact-unique names; case-only collisions are allowed.
fn catalog_strategy() -> impl Strategy<Value = VariantCatalog> {
    prop::collection::vec(
        (
            "[a-cA-C][a-c0-9]{0,3}",
            prop::collection::vec("[a-z]{1,4}", 0..3),
        ),
        0..8,
    )
    .prop_map(|raw| {
        let mut catalog = VariantCatalog::new("Generated");
        for (name, labels) in raw {
            if catalog.find_exact(&name).is_some() {
                continue;
            }
            let mut fields: Vec<FieldSpec> = Vec::new();
            for label in labels {
                if fields.iter().all(|f| f.label != label) {
                    fields.push(FieldSpec::new(label, "String"));
                }
            }
            catalog = catalog.with_variant(Variant::with_fields(name, fields));
        }
        catalog
    })
}

fn exclusion_strategy() -> impl Strategy<Value = ExclusionSet> {
    prop::collection::vec("[a-cA-C][a-c0-9]{0,3}", 0..4).prop_map(ExclusionSet::new)
}

fn projected(catalog: &VariantCatalog, exclude: &ExclusionSet) -> ProjectedCatalog {
    project(catalog, exclude).expect("generated catalogs have unique names")
}

proptest! {
    #[test]
    fn projection_preserves_order(catalog in catalog_strategy(), exclude in exclusion_strategy()) {
        let projected = projected(&catalog, &exclude);
        let expected: Vec<&Variant> = catalog
            .variants()
            .iter()
            .filter(|v| !exclude.excludes(&v.name))
            .collect();
        let actual: Vec<&Variant> = projected.variants().iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn projection_is_idempotent(catalog in catalog_strategy(), exclude in exclusion_strategy()) {
        let once = projected(&catalog, &exclude);
        let twice = projected(once.as_catalog(), &exclude);
        prop_assert_eq!(once.as_catalog(), twice.as_catalog());
        prop_assert!(twice.removed().is_empty());
    }

    #[test]
    fn dispatch_binds_declared_fields(catalog in catalog_strategy(), value in "[ -~]{0,8}") {
        let projected = projected(&catalog, &ExclusionSet::none());
        let dispatcher = Dispatcher::synthesize(&projected);
        for variant in projected.variants() {
            let vars = variables_from_pairs(variant.labels().map(|l| (l, value.as_str())));
            let Some(built) = dispatcher.dispatch(&variant.name, &vars) else {
                return Err(TestCaseError::fail(format!("no match for {}", variant.name)));
            };
            // the first case-insensitive match wins, which may be an earlier variant
            let winner = projected
                .variants()
                .iter()
                .find(|v| names_match(&v.name, &variant.name))
                .expect("variant matches itself");
            prop_assert_eq!(&built.variant, &winner.name);
            if winner.name == variant.name {
                prop_assert_eq!(built.fields.len(), variant.fields.len());
                prop_assert!(built.fields.iter().all(|f| f.value == value));
            }
        }
    }

    #[test]
    fn missing_fields_bind_empty_strings(catalog in catalog_strategy()) {
        let projected = projected(&catalog, &ExclusionSet::none());
        let dispatcher = Dispatcher::synthesize(&projected);
        for variant in projected.variants() {
            if let Some(built) = dispatcher.dispatch(&variant.name, &VariableMap::default()) {
                prop_assert!(built.fields.iter().all(|f| f.value.is_empty()));
            }
        }
    }

    #[test]
    fn dispatch_ignores_requested_case(catalog in catalog_strategy()) {
        let projected = projected(&catalog, &ExclusionSet::none());
        let dispatcher = Dispatcher::synthesize(&projected);
        for variant in projected.variants() {
            let upper = dispatcher.dispatch(&variant.name.to_uppercase(), &VariableMap::default());
            let lower = dispatcher.dispatch(&variant.name.to_lowercase(), &VariableMap::default());
            prop_assert_eq!(upper, lower);
        }
    }

    #[test]
    fn unknown_names_never_match(catalog in catalog_strategy(), name in "[x-z]{1,5}") {
        let projected = projected(&catalog, &ExclusionSet::none());
        let dispatcher = Dispatcher::synthesize(&projected);
        prop_assert_eq!(dispatcher.dispatch(&name, &VariableMap::default()), None);
    }

    #[test]
    fn fully_excluded_catalog_never_matches(catalog in catalog_strategy(), name in "[a-cA-C][a-c0-9]{0,3}") {
        let everything = ExclusionSet::new(catalog.variants().iter().map(|v| v.name.clone()));
        let dispatcher = Dispatcher::synthesize(&projected(&catalog, &everything));
        prop_assert!(dispatcher.is_empty());
        prop_assert_eq!(dispatcher.dispatch(&name, &VariableMap::default()), None);
    }
}
