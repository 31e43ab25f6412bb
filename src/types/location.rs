//! Body locations and equipment slot lists.
//!
//! A mech has eight structural segments. Critical-slot sections and weapon
//! records both reference them, so the enum lives here and everything else
//! matches against it.

use serde::Serialize;

/// One of the eight structural segments of a mech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    LeftArm,
    RightArm,
    LeftTorso,
    RightTorso,
    CenterTorso,
    Head,
    LeftLeg,
    RightLeg,
}

impl Location {
    /// All eight locations, in the order slot sections conventionally
    /// appear in a stat block.
    pub const ALL: [Location; 8] = [
        Location::LeftArm,
        Location::RightArm,
        Location::LeftTorso,
        Location::RightTorso,
        Location::CenterTorso,
        Location::Head,
        Location::LeftLeg,
        Location::RightLeg,
    ];

    /// Match a normalized (lower-camel) label against a location.
    ///
    /// Returns `None` for anything that is not one of the eight known
    /// segments; callers drop such input rather than failing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "leftArm" => Some(Location::LeftArm),
            "rightArm" => Some(Location::RightArm),
            "leftTorso" => Some(Location::LeftTorso),
            "rightTorso" => Some(Location::RightTorso),
            "centerTorso" => Some(Location::CenterTorso),
            "head" => Some(Location::Head),
            "leftLeg" => Some(Location::LeftLeg),
            "rightLeg" => Some(Location::RightLeg),
            _ => None,
        }
    }

    /// The normalized key for this location (the JSON name).
    pub fn key(self) -> &'static str {
        match self {
            Location::LeftArm => "leftArm",
            Location::RightArm => "rightArm",
            Location::LeftTorso => "leftTorso",
            Location::RightTorso => "rightTorso",
            Location::CenterTorso => "centerTorso",
            Location::Head => "head",
            Location::LeftLeg => "leftLeg",
            Location::RightLeg => "rightLeg",
        }
    }
}

/// Equipment slot lists, one ordered sequence per body location.
///
/// All eight lists are always present; a location with no parsed slot
/// section stays empty. Entries preserve the physical slot order from the
/// source, except that `-Empty-` slots are dropped rather than recorded
/// as holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slots {
    pub left_arm: Vec<String>,
    pub right_arm: Vec<String>,
    pub left_torso: Vec<String>,
    pub right_torso: Vec<String>,
    pub center_torso: Vec<String>,
    pub head: Vec<String>,
    pub left_leg: Vec<String>,
    pub right_leg: Vec<String>,
}

impl Slots {
    /// Get the slot list for a location.
    pub fn get(&self, location: Location) -> &[String] {
        match location {
            Location::LeftArm => &self.left_arm,
            Location::RightArm => &self.right_arm,
            Location::LeftTorso => &self.left_torso,
            Location::RightTorso => &self.right_torso,
            Location::CenterTorso => &self.center_torso,
            Location::Head => &self.head,
            Location::LeftLeg => &self.left_leg,
            Location::RightLeg => &self.right_leg,
        }
    }

    /// Get the mutable slot list for a location.
    pub fn get_mut(&mut self, location: Location) -> &mut Vec<String> {
        match location {
            Location::LeftArm => &mut self.left_arm,
            Location::RightArm => &mut self.right_arm,
            Location::LeftTorso => &mut self.left_torso,
            Location::RightTorso => &mut self.right_torso,
            Location::CenterTorso => &mut self.center_torso,
            Location::Head => &mut self.head,
            Location::LeftLeg => &mut self.left_leg,
            Location::RightLeg => &mut self.right_leg,
        }
    }

    /// Total number of occupied slots across all locations.
    pub fn total(&self) -> usize {
        Location::ALL.iter().map(|&loc| self.get(loc).len()).sum()
    }
}
