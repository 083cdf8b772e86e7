//! Dispatcher synthesis.
//!
//! A [`Dispatcher`] is an ordered list of arms, one per projected variant.
//! Dispatch lowercases the requested name once and walks the arms in order;
//! the first arm whose key is equal wins. It is deliberately not a map: two
//! variants that differ only by case stay in the list, and the later one is
//! simply never reached.

use std::collections::HashMap;
use std::hash::BuildHasher;

use vgen_ir::{match_key, ConstructedValue, ProjectedCatalog};

/// One arm of a dispatcher.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DispatchArm {
    /// Declared variant name.
    pub variant: String,
    /// Lowercased name the requested name is compared with.
    pub key: String,
    /// Field labels to look up, in declaration order.
    pub labels: Vec<String>,
}

impl DispatchArm {
    /// Build the value for this arm. Labels missing from `variables` bind
    /// the empty string.
    pub fn bind<S: BuildHasher>(&self, variables: &HashMap<String, String, S>) -> ConstructedValue {
        self.labels
            .iter()
            .fold(ConstructedValue::new(&self.variant), |value, label| {
                let bound = variables.get(label).cloned().unwrap_or_default();
                value.with_field(label, bound)
            })
    }
}

/// First-match dispatcher over a projected catalog.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Dispatcher {
    catalog: String,
    arms: Vec<DispatchArm>,
}

impl Dispatcher {
    /// Build the arms for every projected variant, in catalog order.
    ///
    /// An empty catalog yields a dispatcher that never matches.
    pub fn synthesize(projected: &ProjectedCatalog) -> Self {
        let arms: Vec<DispatchArm> = projected
            .variants()
            .iter()
            .map(|variant| {
                let arm = DispatchArm {
                    variant: variant.name.clone(),
                    key: match_key(&variant.name),
                    labels: variant.labels().map(str::to_string).collect(),
                };
                tracing::trace!(
                    variant = %arm.variant,
                    key = %arm.key,
                    fields = arm.labels.len(),
                    "dispatch arm"
                );
                arm
            })
            .collect();

        tracing::debug!(
            catalog = projected.name(),
            arms = arms.len(),
            "dispatcher synthesized"
        );
        Dispatcher {
            catalog: projected.name().to_string(),
            arms,
        }
    }

    /// Name of the catalog this dispatcher was built from.
    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn arms(&self) -> &[DispatchArm] {
        &self.arms
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// The arm `variation_name` selects, if any.
    pub fn select(&self, variation_name: &str) -> Option<&DispatchArm> {
        let key = match_key(variation_name);
        self.arms.iter().find(|arm| arm.key == key)
    }

    /// Construct the value for `variation_name`.
    ///
    /// Returns `None` when no arm matches; this is an expected outcome for
    /// unknown variation names, not an error.
    pub fn dispatch<S: BuildHasher>(
        &self,
        variation_name: &str,
        variables: &HashMap<String, String, S>,
    ) -> Option<ConstructedValue> {
        let value = self.select(variation_name).map(|arm| arm.bind(variables));
        tracing::trace!(
            catalog = %self.catalog,
            requested = variation_name,
            matched = value.as_ref().map(|v| v.variant.as_str()),
            "dispatch"
        );
        value
    }
}

#[cfg(test)]
mod tests;
