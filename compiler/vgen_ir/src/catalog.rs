//! Variant catalogs and their projections.
//!
//! A [`VariantCatalog`] is the tagged-union declaration the host hands to the
//! generation pass. It is built once and then only read. A
//! [`ProjectedCatalog`] is the catalog with the excluded control variants
//! removed, in original order.

use std::fmt;

use crate::{names_match, Span};

/// One field of a variant.
///
/// `type_text` is opaque: it is never interpreted by the pass, only carried
/// so the projected declaration can re-emit it. An unlabeled field has its
/// whole text in `label` and an empty `type_text`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    pub label: String,
    pub type_text: String,
}

impl FieldSpec {
    /// Create a labeled field.
    pub fn new(label: impl Into<String>, type_text: impl Into<String>) -> Self {
        FieldSpec {
            label: label.into(),
            type_text: type_text.into(),
        }
    }

    /// Create a field that had no `label:` prefix.
    pub fn unlabeled(text: impl Into<String>) -> Self {
        FieldSpec {
            label: text.into(),
            type_text: String::new(),
        }
    }

    /// Whether the field came from a segment without a colon.
    pub fn is_unlabeled(&self) -> bool {
        self.type_text.is_empty()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlabeled() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}: {}", self.label, self.type_text)
        }
    }
}

/// A single case of a catalog.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub name: String,
    /// Fields in declaration order; empty for a bare variant.
    pub fields: Vec<FieldSpec>,
    pub span: Span,
}

impl Variant {
    /// Create a variant without fields.
    pub fn bare(name: impl Into<String>) -> Self {
        Variant {
            name: name.into(),
            fields: Vec::new(),
            span: Span::DUMMY,
        }
    }

    /// Create a variant with the given fields.
    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Variant {
            name: name.into(),
            fields,
            span: Span::DUMMY,
        }
    }

    /// Attach a declaration span.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Field labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.label.as_str())
    }

    pub fn is_bare(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}")?;
        }
        write!(f, ")")
    }
}

/// An ordered, named list of variants.
///
/// Names are expected to be unique under case-sensitive comparison. This is
/// not enforced on construction; projection rejects duplicates.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantCatalog {
    name: String,
    variants: Vec<Variant>,
    span: Span,
}

impl VariantCatalog {
    /// Create an empty catalog.
    pub fn new(name: impl Into<String>) -> Self {
        VariantCatalog {
            name: name.into(),
            variants: Vec::new(),
            span: Span::DUMMY,
        }
    }

    /// Create a catalog from a list of variants.
    pub fn from_variants(name: impl Into<String>, variants: Vec<Variant>) -> Self {
        VariantCatalog {
            name: name.into(),
            variants,
            span: Span::DUMMY,
        }
    }

    /// Append a variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Attach a declaration span.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Find a variant by exact (case-sensitive) name.
    pub fn find_exact(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Variants whose exact name already appeared earlier in the catalog.
    ///
    /// Each returned variant is a later occurrence; the first declaration of
    /// a name is never reported.
    pub fn duplicate_names(&self) -> Vec<&Variant> {
        self.variants
            .iter()
            .enumerate()
            .filter(|(i, v)| self.variants[..*i].iter().any(|prev| prev.name == v.name))
            .map(|(_, v)| v)
            .collect()
    }

    /// Pairs `(first, later)` whose names differ only by case.
    ///
    /// Under first-match dispatch `later` can never be selected.
    pub fn shadowed_variants(&self) -> Vec<(&Variant, &Variant)> {
        let mut pairs = Vec::new();
        for (i, later) in self.variants.iter().enumerate() {
            let first = self.variants[..i]
                .iter()
                .find(|prev| prev.name != later.name && names_match(&prev.name, &later.name));
            if let Some(first) = first {
                pairs.push((first, later));
            }
        }
        pairs
    }
}

impl fmt::Display for VariantCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.name)?;
        for (i, variant) in self.variants.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {variant}")?;
        }
        write!(f, " }}")
    }
}

/// Variant names removed by projection, compared case-insensitively.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// The two control markers of experiment catalogs: `on` and `off`.
    pub fn control_markers() -> Self {
        ExclusionSet::new(["on", "off"])
    }

    /// An exclusion set that removes nothing.
    pub fn none() -> Self {
        ExclusionSet { names: Vec::new() }
    }

    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExclusionSet {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` matches any excluded name, ignoring case.
    pub fn excludes(&self, name: &str) -> bool {
        self.names.iter().any(|n| names_match(n, name))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        ExclusionSet::control_markers()
    }
}

/// A catalog with its excluded variants removed.
///
/// Built by the projection engine; never mutated afterwards.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedCatalog {
    catalog: VariantCatalog,
    removed: Vec<String>,
}

impl ProjectedCatalog {
    /// Wrap an already-filtered catalog together with the names it dropped.
    pub fn new(catalog: VariantCatalog, removed: Vec<String>) -> Self {
        ProjectedCatalog { catalog, removed }
    }

    /// Name of the source catalog.
    pub fn name(&self) -> &str {
        self.catalog.name()
    }

    pub fn variants(&self) -> &[Variant] {
        self.catalog.variants()
    }

    /// The retained variants viewed as a plain catalog.
    pub fn as_catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    /// Names of the variants projection removed, in source order.
    pub fn removed(&self) -> &[String] {
        &self.removed
    }

    pub fn span(&self) -> Span {
        self.catalog.span()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl fmt::Display for ProjectedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.catalog)
    }
}
