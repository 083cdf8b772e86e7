#![allow(dead_code)]

use vgen_macros::consumable_experiment;

#[consumable_experiment]
struct NotAnEnum;

fn main() {}
