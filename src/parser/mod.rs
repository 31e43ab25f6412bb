//! Stat-block parser.
//!
//! Converts a line-oriented MTF stat block into a [`Mech`] record. The
//! document is split into blank-line-separated sections, each section is
//! classified by its first line, and one builder per section kind turns
//! the lines into typed attributes layered over a fully-defaulted record.
//!
//! Parsing is best-effort and total: malformed lines degrade to defaults
//! and unknown sections are dropped, so `parse_mech` never fails.
//!
//! # Usage
//!
//! ```ignore
//! use mtf2json::parse_mech;
//!
//! let source = std::fs::read_to_string("mechs/Atlas AS7-D.mtf")?;
//! let mech = parse_mech(&source);
//!
//! println!("{} {}", mech.info.name, mech.info.model);
//! ```

mod armor;
mod chassis;
mod config;
mod info;
mod slots;
mod temperature;
mod weapons;
pub mod fields;
pub mod section;

pub use fields::{camel_key, coerce_int, key_value};
pub use section::{group_sections, SectionKind};

use crate::types::Mech;

/// Parse a stat block into an assembled record.
///
/// Pure and side-effect free; lines are consumed strictly in source
/// order. Both `\r\n` and `\n` terminators are accepted. Sections may
/// appear in any order; a section kind that never occurs leaves its
/// defaults untouched.
pub fn parse_mech(source: &str) -> Mech {
    let lines: Vec<&str> = source.lines().collect();
    let groups = group_sections(&lines);

    let mut mech = Mech::default();
    for group in &groups {
        apply_section(group, &mut mech);
    }

    mech
}

/// Classify one section and overlay its attributes onto the record.
fn apply_section(lines: &[&str], mech: &mut Mech) {
    let Some(first_line) = lines.first() else {
        return;
    };

    match SectionKind::classify(first_line) {
        SectionKind::Info => mech.info = info::build_info(lines),
        SectionKind::Config => mech.config = config::build_config(lines),
        SectionKind::Chassis => mech.chassis = chassis::build_chassis(lines),
        SectionKind::Temperature => mech.temperature = temperature::build_temperature(lines),
        SectionKind::Armor => mech.armor = armor::build_armor(lines),
        SectionKind::Weapons => mech.weapons = weapons::build_weapons(lines),
        SectionKind::Slots => {
            if let Some((location, entries)) = slots::build_slots(lines) {
                *mech.slots.get_mut(location) = entries;
            }
        }
    }
}
