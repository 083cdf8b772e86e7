//! vgen IR - Declaration model for variant catalogs.
//!
//! This crate contains the data structures shared by every stage of the
//! generation pass:
//! - [`Span`] for declaration locations
//! - [`VariantCatalog`], [`Variant`] and [`FieldSpec`] describing the input
//! - [`ExclusionSet`] and [`ProjectedCatalog`] describing the projection
//! - [`VariableMap`] and [`ConstructedValue`] used at dispatch time
//!
//! Catalogs are read-only once built. A projection or a dispatcher is always
//! derived from scratch; nothing here is memoized between passes.

mod catalog;
mod name;
mod span;
mod value;

pub use catalog::{ExclusionSet, FieldSpec, ProjectedCatalog, Variant, VariantCatalog};
pub use name::{match_key, names_match};
pub use span::{Span, SpanError};
pub use value::{variables_from_pairs, BoundField, ConstructedValue, VariableMap};
