//! Diagnostic system for the generation pass.
//!
//! Every stage reports problems as a [`Diagnostic`]:
//! - Error codes for searchability (`vgen explain E1001`)
//! - A message saying what went wrong
//! - A primary label saying where
//! - Notes and suggestions saying why and how to fix it
//!
//! Nothing in the pass panics on user input. A declaration that cannot be
//! generated yields error diagnostics and no artifact.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{
    duplicate_variant, internal_error, invalid_argument, invalid_field_type, invalid_identifier,
    mixed_field_kinds, unreachable_variant, unsupported_declaration, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

/// Whether any diagnostic in the slice is an error.
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(Diagnostic::is_error)
}
