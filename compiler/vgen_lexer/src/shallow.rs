//! The shallow field-list lexer.
//!
//! Every comma ends a field and the first colon of a field separates label
//! from type. Nothing else is recognized.

use vgen_ir::FieldSpec;

use crate::strip_parens;

pub(crate) fn parse(clause: &str) -> Vec<FieldSpec> {
    let inner = strip_parens(clause);
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(field_from_segment).collect()
}

fn field_from_segment(segment: &str) -> FieldSpec {
    match segment.split_once(':') {
        Some((label, type_text)) => FieldSpec::new(label.trim(), type_text.trim()),
        None => FieldSpec::unlabeled(segment.trim()),
    }
}
