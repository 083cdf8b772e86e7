#![allow(dead_code, non_camel_case_types)]

use vgen_macros::consumable_experiment;

#[consumable_experiment(frobnicate = 1)]
enum Flag { on, off, variationA }

fn main() {}
