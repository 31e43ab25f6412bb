//! Weapon records.

use serde::Serialize;

use crate::types::Location;

/// A single weapon mount parsed from the weapons section.
///
/// `quantity` and `ammo_count` are present only when the source line
/// supplies them (a leading count digit and an `Ammo:` token); absent
/// values are omitted from the serialized output entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Weapon name with any leading count digit stripped.
    pub name: String,

    /// The body location the weapon is mounted in.
    pub body_location: Location,

    /// Mount count, from a leading digit on the weapon token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    /// Rounds of ammunition, from a trailing `Ammo:` token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ammo_count: Option<i32>,
}
