//! Armor attributes.

use serde::Serialize;

use crate::types::NOT_AVAILABLE;

/// Armor type and point counts for the eleven armored facings.
///
/// The eight body locations each carry a count, plus the three rear torso
/// facings. Counts default to 0 when the source omits or garbles them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    /// Armor technology, e.g. `Standard(Inner Sphere)`.
    #[serde(rename = "type")]
    pub kind: String,
    pub left_arm: i32,
    pub right_arm: i32,
    pub left_torso: i32,
    pub right_torso: i32,
    pub center_torso: i32,
    pub head: i32,
    pub left_leg: i32,
    pub right_leg: i32,
    pub rear_left_torso: i32,
    pub rear_right_torso: i32,
    pub rear_center_torso: i32,
}

impl Default for Armor {
    fn default() -> Self {
        Self {
            kind: NOT_AVAILABLE.to_string(),
            left_arm: 0,
            right_arm: 0,
            left_torso: 0,
            right_torso: 0,
            center_torso: 0,
            head: 0,
            left_leg: 0,
            right_leg: 0,
            rear_left_torso: 0,
            rear_right_torso: 0,
            rear_center_torso: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline() {
        let armor = Armor::default();
        assert_eq!(armor.kind, NOT_AVAILABLE);
        assert_eq!(armor.center_torso, 0);
        assert_eq!(armor.rear_center_torso, 0);
    }

    #[test]
    fn test_serialize_type_key() {
        let armor = Armor {
            kind: "Standard(Inner Sphere)".to_string(),
            center_torso: 47,
            ..Armor::default()
        };

        let value = serde_json::to_value(&armor).unwrap();
        assert_eq!(value["type"], "Standard(Inner Sphere)");
        assert_eq!(value["centerTorso"], 47);
        assert_eq!(value["rearLeftTorso"], 0);
    }
}
