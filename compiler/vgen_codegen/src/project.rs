//! Projection engine.
//!
//! Removes excluded variants from a catalog, keeping declaration order.

use vgen_diagnostic::{duplicate_variant, unreachable_variant, Diagnostic};
use vgen_ir::{ExclusionSet, ProjectedCatalog, VariantCatalog};

/// Project `catalog` through `exclude`.
///
/// Every variant whose name matches an excluded name (ignoring case) is
/// dropped; the rest keep their order. Excluding everything is not an error.
///
/// A catalog with two variants of the exact same name is rejected with
/// `E1001` before anything is filtered, even when the duplicate would have
/// been excluded.
pub fn project(
    catalog: &VariantCatalog,
    exclude: &ExclusionSet,
) -> Result<ProjectedCatalog, Diagnostic> {
    if let Some(dup) = catalog.duplicate_names().first() {
        let first = catalog
            .find_exact(&dup.name)
            .map_or(dup.span, |first| first.span);
        return Err(duplicate_variant(catalog.name(), &dup.name, first, dup.span));
    }

    let mut retained = VariantCatalog::new(catalog.name()).at(catalog.span());
    let mut removed = Vec::new();
    for variant in catalog.variants() {
        if exclude.excludes(&variant.name) {
            removed.push(variant.name.clone());
        } else {
            retained = retained.with_variant(variant.clone());
        }
    }

    tracing::debug!(
        catalog = catalog.name(),
        retained = retained.len(),
        removed = removed.len(),
        "catalog projected"
    );
    Ok(ProjectedCatalog::new(retained, removed))
}

/// `W1001` for each projected variant that an earlier variant shadows.
///
/// Dispatch is first-match over names compared without case, so in
/// `[A, a]` the second variant is never returned. This only reports the
/// hazard; dispatch itself is unchanged.
pub fn shadow_warnings(projected: &ProjectedCatalog) -> Vec<Diagnostic> {
    projected
        .as_catalog()
        .shadowed_variants()
        .into_iter()
        .map(|(first, later)| {
            tracing::warn!(
                catalog = projected.name(),
                variant = %later.name,
                shadowed_by = %first.name,
                "unreachable variant"
            );
            unreachable_variant(&later.name, later.span, &first.name, first.span)
        })
        .collect()
}
