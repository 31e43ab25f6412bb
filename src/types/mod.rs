//! Core data types for parsed stat blocks.
//!
//! Everything here is plain owned data with serde `Serialize` derives;
//! the parser builds these once per document and never mutates them
//! afterwards.

mod armor;
mod location;
mod mech;
mod weapon;

pub use armor::Armor;
pub use location::{Location, Slots};
pub use mech::{Chassis, Config, Info, Mech, Temperature, NOT_AVAILABLE};
pub use weapon::Weapon;
