//! Config section builder.
//!
//! Line 0 is special-cased: its value is the chassis configuration.
//! Every other line is key:value, normalized and matched against the
//! known config fields; unrecognized labels are ignored.

use crate::parser::fields::{camel_key, coerce_int, key_value};
use crate::types::Config;

pub fn build_config(lines: &[&str]) -> Config {
    let mut config = Config::default();

    for (index, line) in lines.iter().enumerate() {
        let (label, value) = key_value(Some(line));

        if index == 0 {
            config.configuration = value.to_string();
            continue;
        }

        match camel_key(label).as_str() {
            "configuration" => config.configuration = value.to_string(),
            "techBase" => config.tech_base = value.to_string(),
            "era" => config.era = value.to_string(),
            "rulesLevel" => config.rules_level = coerce_int(value).unwrap_or(0),
            _ => {}
        }
    }

    config
}
