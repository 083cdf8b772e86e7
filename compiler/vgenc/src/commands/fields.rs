//! The `fields` command: show what the field-list lexer makes of a clause.

use vgen_lexer::{parse_fields_with, LexMode};

use super::CliOptions;

/// Lex `clause` and print one line per field.
pub fn show_fields(clause: &str, options: &CliOptions) {
    let mode = options.lex_mode().unwrap_or(LexMode::Shallow);
    let fields = parse_fields_with(clause, mode);
    let plural = if fields.len() == 1 { "" } else { "s" };
    println!("{} field{plural} ({mode})", fields.len());
    for (i, field) in fields.iter().enumerate() {
        if field.is_unlabeled() {
            println!("  {i}: {:?} (unlabeled)", field.label);
        } else {
            println!("  {i}: {:?}: {:?}", field.label, field.type_text);
        }
    }
}
