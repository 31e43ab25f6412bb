//! Armor section builder.
//!
//! Line 0's value is the armor type, stored raw. Every other line is a
//! location count: the label normalizes to one of the eleven facing keys
//! and the value is written only when coercion succeeds.

use crate::parser::fields::{camel_key, coerce_int, key_value};
use crate::types::Armor;

pub fn build_armor(lines: &[&str]) -> Armor {
    let mut armor = Armor::default();

    for (index, line) in lines.iter().enumerate() {
        let (label, value) = key_value(Some(line));

        if index == 0 {
            armor.kind = value.to_string();
            continue;
        }

        let Some(points) = coerce_int(value) else {
            continue;
        };
        match camel_key(label).as_str() {
            "laArmor" => armor.left_arm = points,
            "raArmor" => armor.right_arm = points,
            "ltArmor" => armor.left_torso = points,
            "rtArmor" => armor.right_torso = points,
            "ctArmor" => armor.center_torso = points,
            "hdArmor" => armor.head = points,
            "llArmor" => armor.left_leg = points,
            "rlArmor" => armor.right_leg = points,
            "rtlArmor" => armor.rear_left_torso = points,
            "rtrArmor" => armor.rear_right_torso = points,
            "rtcArmor" => armor.rear_center_torso = points,
            _ => {}
        }
    }

    armor
}
