//! Long-form explanations behind `vgen explain <code>`.
//!
//! One markdown file per code lives next to this module and is compiled in
//! with `include_str!`. A new code needs a file here and a row in `DOCS`;
//! the tests fail for any code in [`ErrorCode::ALL`] without one.

use crate::ErrorCode;

pub struct ErrorDocs;

impl ErrorDocs {
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter()
            .find_map(|&(documented, text)| (documented == code).then_some(text))
    }

    /// Codes with an explanation, in table order.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|&(code, _)| code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        Self::get(code).is_some()
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Front-end errors (E0xxx)
    (ErrorCode::E0001, include_str!("E0001.md")),
    (ErrorCode::E0002, include_str!("E0002.md")),
    (ErrorCode::E0003, include_str!("E0003.md")),
    (ErrorCode::E0004, include_str!("E0004.md")),
    // Projection errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    // Emission errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
    (ErrorCode::E2002, include_str!("E2002.md")),
    (ErrorCode::E2003, include_str!("E2003.md")),
    // Internal errors (E9xxx)
    (ErrorCode::E9001, include_str!("E9001.md")),
    // Warnings
    (ErrorCode::W1001, include_str!("W1001.md")),
];
