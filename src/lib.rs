//! mtf2json - MegaMek stat block converter
//!
//! A library for transforming line-oriented MTF stat blocks into
//! structured, strongly-typed records suitable for JSON serialization.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use discovery::{is_mtf_file, scan_directory};
pub use error::{MtfError, Result};
pub use parser::{parse_mech, SectionKind};
pub use types::{
    Armor, Chassis, Config, Info, Location, Mech, Slots, Temperature, Weapon, NOT_AVAILABLE,
};
