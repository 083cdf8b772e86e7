//! Every generator argument at once.

#![allow(dead_code, non_camel_case_types)]

use std::borrow::Cow;
use std::collections::HashMap;

use vgen_macros::consumable_experiment;

#[consumable_experiment(
    exclude(control, holdout),
    lexer = "structural",
    name = "Live",
    dispatch_fn = "pick"
)]
pub enum Checkout {
    control,
    holdout,
    express { label: Cow<'static, str>, bytes: Vec<u8> },
}

fn main() {
    let vars: HashMap<String, String> = HashMap::new();
    let picked: Option<Live> = Checkout::pick("EXPRESS", &vars);
    if let Some(Live::express { label, bytes }) = picked {
        let _ = (label.len(), bytes.len());
    }
}
