//! The assembled mech record and its scalar attribute sets.
//!
//! `Mech::default()` is the baseline every parse starts from: a document
//! missing a section leaves that section's defaults untouched, so the
//! record always carries all seven sections.

use serde::Serialize;

use crate::types::{Armor, Slots, Weapon};

/// Sentinel substituted for any string field whose source data is absent
/// or unparsable.
pub const NOT_AVAILABLE: &str = "not-available";

/// Identification block: format version plus chassis name and model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    pub version: String,
    pub name: String,
    pub model: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: NOT_AVAILABLE.to_string(),
            name: NOT_AVAILABLE.to_string(),
            model: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Configuration block: chassis layout, tech base, era, rules level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub configuration: String,
    pub tech_base: String,
    pub era: String,
    /// Defaults to 0 when the source value is not a plain integer.
    pub rules_level: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            configuration: NOT_AVAILABLE.to_string(),
            tech_base: NOT_AVAILABLE.to_string(),
            era: NOT_AVAILABLE.to_string(),
            rules_level: 0,
        }
    }
}

/// Chassis block: tonnage plus engine, structure, and myomer types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chassis {
    pub mass: i32,
    pub engine: String,
    pub structure: String,
    pub myomer: String,
}

impl Default for Chassis {
    fn default() -> Self {
        Self {
            mass: 0,
            engine: NOT_AVAILABLE.to_string(),
            structure: NOT_AVAILABLE.to_string(),
            myomer: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Heat and movement block: heat sink count/type and movement points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub heat_sinks_count: i32,
    pub heat_sinks_type: String,
    pub walk_movement: i32,
    pub jump_movement: i32,
}

impl Default for Temperature {
    fn default() -> Self {
        Self {
            heat_sinks_count: 0,
            heat_sinks_type: NOT_AVAILABLE.to_string(),
            walk_movement: 0,
            jump_movement: 0,
        }
    }
}

/// A fully assembled stat block record.
///
/// Built in one pass over the source document and not mutated afterwards.
/// Serializes directly to the JSON shape the CLI writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mech {
    pub info: Info,
    pub config: Config,
    pub chassis: Chassis,
    pub temperature: Temperature,
    pub armor: Armor,
    pub weapons: Vec<Weapon>,
    pub slots: Slots,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_has_all_sections() {
        let mech = Mech::default();

        assert_eq!(mech.info.name, NOT_AVAILABLE);
        assert_eq!(mech.config.rules_level, 0);
        assert_eq!(mech.chassis.mass, 0);
        assert_eq!(mech.temperature.heat_sinks_type, NOT_AVAILABLE);
        assert_eq!(mech.armor.kind, NOT_AVAILABLE);
        assert!(mech.weapons.is_empty());
        assert_eq!(mech.slots.total(), 0);
    }

    #[test]
    fn test_serialize_camel_case_keys() {
        let value = serde_json::to_value(Mech::default()).unwrap();

        assert_eq!(value["config"]["techBase"], NOT_AVAILABLE);
        assert_eq!(value["config"]["rulesLevel"], 0);
        assert_eq!(value["temperature"]["heatSinksCount"], 0);
        assert_eq!(value["temperature"]["walkMovement"], 0);
        assert!(value["slots"]["leftArm"].as_array().unwrap().is_empty());
        assert!(value["weapons"].as_array().unwrap().is_empty());
    }
}
