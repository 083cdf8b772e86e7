#![allow(dead_code, non_snake_case)]

//! Runtime tests for `source_echo!`, `source_echo_upper!` and
//! `#[derive(CodingKeys)]`.

use pretty_assertions::assert_eq;
use vgen_macros::{source_echo, source_echo_upper, CodingKeys};

#[test]
fn echo_pairs_value_and_text() {
    let (value, text) = source_echo!(1 + 2);
    assert_eq!(value, 3);
    assert_eq!(text, "1 + 2");
}

#[test]
fn echo_upper_cases_the_text() {
    let greeting = "hi";
    let (value, text) = source_echo_upper!(greeting);
    assert_eq!(value, "hi");
    assert_eq!(text, "GREETING");
}

#[derive(CodingKeys)]
pub struct Profile {
    user_name: String,
    headerMessage: String,
    #[coding_keys(skip)]
    cached_len: usize,
    r#type: u8,
}

#[test]
fn coding_keys_follow_field_order() {
    assert_eq!(
        ProfileCodingKeys::ALL,
        &[
            ProfileCodingKeys::UserName,
            ProfileCodingKeys::HeaderMessage,
            ProfileCodingKeys::Type,
        ]
    );
}

#[test]
fn coding_keys_name_the_fields() {
    let names: Vec<&str> = ProfileCodingKeys::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["user_name", "headerMessage", "type"]);
    assert_eq!(ProfileCodingKeys::Type.to_string(), "type");
}

#[derive(CodingKeys)]
struct Empty {}

#[test]
fn struct_without_fields_has_no_keys() {
    assert!(EmptyCodingKeys::ALL.is_empty());
}
