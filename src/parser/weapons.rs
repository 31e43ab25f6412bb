//! Weapons section builder.
//!
//! Line 0 is the `Weapons:<n>` header and is discarded. Each remaining
//! line is a comma-space-delimited record of up to three tokens:
//! weapon, body location, and an optional `Ammo:` token. A single
//! leading digit on the weapon token is a mount count.

use crate::parser::fields::{camel_key, coerce_int, key_value};
use crate::types::{Location, Weapon};

pub fn build_weapons(lines: &[&str]) -> Vec<Weapon> {
    lines.iter().skip(1).filter_map(|line| build_weapon(line)).collect()
}

/// Parse one weapon record. Lines whose location token does not name one
/// of the eight body locations are dropped.
fn build_weapon(line: &str) -> Option<Weapon> {
    let mut tokens = line.splitn(3, ", ");
    let weapon_token = tokens.next()?;
    let location_token = tokens.next()?;
    let ammo_token = tokens.next();

    let body_location = Location::from_key(&camel_key(location_token))?;

    let (_, ammo_value) = key_value(ammo_token);
    let ammo_count = coerce_int(ammo_value);

    let quantity = weapon_token
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|d| d as i32);
    let name = match quantity {
        Some(_) => weapon_token[1..].trim(),
        None => weapon_token,
    };

    Some(Weapon {
        name: name.to_string(),
        body_location,
        quantity,
        ammo_count,
    })
}
