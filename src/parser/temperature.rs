//! Temperature section builder.
//!
//! Line 0 carries both values: `Heat Sinks:<count> <type>`. The count is
//! coerced (default 0) and the type token is stored raw. Remaining lines
//! are movement points, updated only when coercion succeeds so a garbled
//! value never overwrites the default.

use crate::parser::fields::{camel_key, coerce_int, key_value};
use crate::types::{Temperature, NOT_AVAILABLE};

pub fn build_temperature(lines: &[&str]) -> Temperature {
    let mut temperature = Temperature::default();

    for (index, line) in lines.iter().enumerate() {
        let (label, value) = key_value(Some(line));

        if index == 0 {
            let (count, kind) = value.split_once(' ').unwrap_or((value, NOT_AVAILABLE));
            if let Some(count) = coerce_int(count) {
                temperature.heat_sinks_count = count;
            }
            temperature.heat_sinks_type = kind.to_string();
            continue;
        }

        let Some(points) = coerce_int(value) else {
            continue;
        };
        match camel_key(label).as_str() {
            "walkMp" | "walkMovement" => temperature.walk_movement = points,
            "jumpMp" | "jumpMovement" => temperature.jump_movement = points,
            _ => {}
        }
    }

    temperature
}
