//! Line-level field helpers: key:value splitting, numeric coercion, and
//! label normalization.
//!
//! These never fail. A missing or malformed line degrades to the
//! `not-available` sentinel, and numeric coercion returns an explicit
//! `Option` so each section builder decides its own fallback policy.

use crate::types::NOT_AVAILABLE;

/// Split a line on its first colon into a trimmed `(label, value)` pair.
///
/// An absent or empty line yields the sentinel for both halves; a line
/// with no colon yields the whole line as the label and the sentinel as
/// the value. Callers treat the sentinel as a recoverable default.
pub fn key_value(line: Option<&str>) -> (&str, &str) {
    let Some(line) = line.filter(|l| !l.is_empty()) else {
        return (NOT_AVAILABLE, NOT_AVAILABLE);
    };

    match line.split_once(':') {
        Some((label, value)) => (label.trim(), value.trim()),
        None => (line.trim(), NOT_AVAILABLE),
    }
}

/// Parse a decimal integer, rejecting any trailing garbage.
///
/// Accepts an optional leading sign followed by digits only, so
/// `"5 tons"` is a failure rather than 5. What to substitute on failure
/// (usually 0, sometimes nothing) is the caller's decision.
pub fn coerce_int(value: &str) -> Option<i32> {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Normalize a source label to lower-camel form.
///
/// Words split on non-alphanumeric runs and on case transitions:
/// `"Rules Level"` → `rulesLevel`, `"TechBase"` → `techBase`,
/// `"RTL Armor"` → `rtlArmor`, `"Walk MP"` → `walkMp`.
pub fn camel_key(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let chars: Vec<char> = label.chars().collect();
    let mut word_start = true;

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            word_start = true;
            continue;
        }

        // Case transitions open a new word: aB, and the A in "RTLArmor".
        if !word_start && i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_lower) {
                word_start = true;
            }
        }

        if word_start && !out.is_empty() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c.to_ascii_lowercase());
        }
        word_start = false;
    }

    out
}
