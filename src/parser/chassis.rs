//! Chassis section builder.
//!
//! Every line is key:value. Only `mass` goes through numeric coercion
//! (left at its 0 default on failure); the engine, structure, and myomer
//! fields keep the raw string value unconditionally.

use crate::parser::fields::{camel_key, coerce_int, key_value};
use crate::types::Chassis;

pub fn build_chassis(lines: &[&str]) -> Chassis {
    let mut chassis = Chassis::default();

    for line in lines {
        let (label, value) = key_value(Some(line));

        match camel_key(label).as_str() {
            "mass" => {
                if let Some(mass) = coerce_int(value) {
                    chassis.mass = mass;
                }
            }
            "engine" => chassis.engine = value.to_string(),
            "structure" => chassis.structure = value.to_string(),
            "myomer" => chassis.myomer = value.to_string(),
            _ => {}
        }
    }

    chassis
}
