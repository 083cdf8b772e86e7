//! The two catalogs the macro was first written for.

#![allow(dead_code, non_camel_case_types, non_snake_case)]

use std::collections::HashMap;

use vgen_macros::consumable_experiment;

#[consumable_experiment]
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureXExperiment {
    on,
    off,
    variationA { headerMessage: String },
    variationB { headerMessage: String },
}

#[consumable_experiment]
enum FTUXMusicBandGreeting {
    on,
    off,
    theRollingStones { preferredMember: String, song: String },
    theBeatles { preferredMember: String, song: String },
}

fn main() {
    let vars: HashMap<String, String> = HashMap::new();
    let feature = FeatureXExperiment::get_variation("variationA", &vars);
    let _: Option<ConsumableFeatureXExperiment> = feature;
    let greeting = FTUXMusicBandGreeting::get_variation("theBeatles", &vars);
    let _: Option<ConsumableFTUXMusicBandGreeting> = greeting;
}
