//! Field-list lexer for variant field clauses.
//!
//! Turns the raw text of a variant's field clause, such as
//! `(preferredMember: String, song: String)`, into an ordered list of
//! [`FieldSpec`]s.
//!
//! Two lexers are provided:
//!
//! - [`LexMode::Shallow`] (the default) splits on every comma and on the
//!   first colon of each segment. It has no notion of nesting, so a comma
//!   inside `HashMap<K, V>`, a tuple type or a string literal ends the field
//!   early. Existing catalogs depend on this behavior, so it stays the
//!   default.
//! - [`LexMode::Structural`] only splits at nesting depth zero and skips
//!   `::` path separators when looking for the label colon.
//!
//! Neither lexer ever fails. Text it cannot make sense of becomes an
//! unlabeled or empty-label field for later stages to report.

mod shallow;
mod structural;

use std::fmt;
use std::str::FromStr;

use vgen_ir::FieldSpec;

/// Which field-list lexer to run.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LexMode {
    /// Split on every comma. Compatible default.
    #[default]
    Shallow,
    /// Split on top-level commas only.
    Structural,
}

impl LexMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LexMode::Shallow => "shallow",
            LexMode::Structural => "structural",
        }
    }
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shallow" => Ok(LexMode::Shallow),
            "structural" => Ok(LexMode::Structural),
            _ => Err(()),
        }
    }
}

/// Parse a field clause with the shallow lexer.
pub fn parse_fields(clause: &str) -> Vec<FieldSpec> {
    parse_fields_with(clause, LexMode::Shallow)
}

/// Parse a field clause with the given lexer.
pub fn parse_fields_with(clause: &str, mode: LexMode) -> Vec<FieldSpec> {
    let fields = match mode {
        LexMode::Shallow => shallow::parse(clause),
        LexMode::Structural => structural::parse(clause),
    };
    for field in &fields {
        tracing::trace!(
            mode = mode.as_str(),
            label = %field.label,
            type_text = %field.type_text,
            "lexed field"
        );
    }
    fields
}

/// Remove one leading `(` and one trailing `)` if present.
///
/// The two ends are stripped independently, so unbalanced clauses lose
/// whichever parenthesis they have.
fn strip_parens(clause: &str) -> &str {
    let trimmed = clause.trim();
    let trimmed = trimmed.strip_prefix('(').unwrap_or(trimmed);
    trimmed.strip_suffix(')').unwrap_or(trimmed)
}
