//! Critical-slot section builder.
//!
//! The first line's label names the body location; every following line
//! is one equipment entry in physical slot order. The `-Empty-` sentinel
//! marks an unoccupied slot and is excluded, so the output can be shorter
//! than the physical slot count. A first line naming no known location
//! drops the whole group.

use crate::parser::fields::{camel_key, key_value};
use crate::types::Location;

/// Literal marking an unoccupied slot in the source.
const EMPTY_SLOT: &str = "-Empty-";

pub fn build_slots(lines: &[&str]) -> Option<(Location, Vec<String>)> {
    let (label, _) = key_value(lines.first().copied());
    let location = Location::from_key(&camel_key(label))?;

    let entries = lines
        .iter()
        .skip(1)
        .filter(|&&line| line != EMPTY_SLOT)
        .map(|line| line.to_string())
        .collect();

    Some((location, entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slots_excluded_order_preserved() {
        let result = build_slots(&[
            "Left Arm:",
            "Shoulder",
            "Upper Arm Actuator",
            "-Empty-",
            "Hand Actuator",
        ]);

        let (location, entries) = result.unwrap();
        assert_eq!(location, Location::LeftArm);
        assert_eq!(entries, ["Shoulder", "Upper Arm Actuator", "Hand Actuator"]);
    }

    #[test]
    fn test_label_without_colon() {
        let (location, entries) = build_slots(&["Head", "Cockpit", "Sensors"]).unwrap();

        assert_eq!(location, Location::Head);
        assert_eq!(entries, ["Cockpit", "Sensors"]);
    }

    #[test]
    fn test_unknown_location_dropped() {
        assert!(build_slots(&["Turret:", "Machine Gun"]).is_none());
    }

    #[test]
    fn test_all_empty_slots() {
        let (_, entries) =
            build_slots(&["Right Leg:", "-Empty-", "-Empty-"]).unwrap();
        assert!(entries.is_empty());
    }
}
