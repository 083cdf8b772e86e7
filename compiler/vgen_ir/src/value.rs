//! Dispatch-time values.

use std::fmt;

use rustc_hash::FxHashMap;

/// Field label to field value, supplied by the caller of a dispatcher.
pub type VariableMap = FxHashMap<String, String>;

/// Build a [`VariableMap`] from key/value pairs. Later keys overwrite earlier ones.
pub fn variables_from_pairs<I, K, V>(pairs: I) -> VariableMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// A field bound during dispatch.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundField {
    pub label: String,
    pub value: String,
}

/// A value of the projected catalog built by a dispatcher.
///
/// `variant` is the declared name (not the requested spelling). Fields
/// appear in declaration order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructedValue {
    pub variant: String,
    pub fields: Vec<BoundField>,
}

impl ConstructedValue {
    pub fn new(variant: impl Into<String>) -> Self {
        ConstructedValue {
            variant: variant.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(BoundField {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Value bound to `label`, if the variant declares it.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

impl fmt::Display for ConstructedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variant)?;
        if self.fields.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:?}", field.label, field.value)?;
        }
        write!(f, ")")
    }
}
