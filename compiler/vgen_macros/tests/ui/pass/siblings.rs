//! Source echo and coding keys together.

#![allow(dead_code)]

use vgen_macros::{source_echo, source_echo_upper, CodingKeys};

#[derive(CodingKeys)]
struct Settings {
    theme: String,
    #[coding_keys(skip)]
    dirty: bool,
}

fn main() {
    let (sum, text): (i32, &str) = source_echo!(40 + 2);
    let (_, upper) = source_echo_upper!(sum);
    let key: SettingsCodingKeys = SettingsCodingKeys::Theme;
    let _ = (text, upper, key.as_str(), SettingsCodingKeys::ALL.len());
}
