#![allow(dead_code, non_camel_case_types)]

use std::collections::HashMap;

use vgen_macros::consumable_experiment;

#[consumable_experiment]
enum Counts { on, off, Tally(HashMap<String, u32>) }

fn main() {}
