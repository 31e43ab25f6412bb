//! Info section builder.
//!
//! Reads exactly three positional lines: the `Version:` line, then the
//! chassis name, then the model designation. Missing lines degrade to
//! the `not-available` sentinel.

use crate::parser::fields::key_value;
use crate::types::{Info, NOT_AVAILABLE};

pub fn build_info(lines: &[&str]) -> Info {
    let (_, version) = key_value(lines.first().copied());

    Info {
        version: version.to_string(),
        name: raw_line(lines, 1),
        model: raw_line(lines, 2),
    }
}

fn raw_line(lines: &[&str], index: usize) -> String {
    lines
        .get(index)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |l| l.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_section() {
        let info = build_info(&["Version:1.0", "Atlas", "AS7-D"]);

        assert_eq!(info.version, "1.0");
        assert_eq!(info.name, "Atlas");
        assert_eq!(info.model, "AS7-D");
    }

    #[test]
    fn test_short_section_degrades_to_sentinel() {
        let info = build_info(&["Version:1.1"]);

        assert_eq!(info.version, "1.1");
        assert_eq!(info.name, NOT_AVAILABLE);
        assert_eq!(info.model, NOT_AVAILABLE);
    }

    #[test]
    fn test_version_line_without_colon() {
        let info = build_info(&["Version", "Atlas", "AS7-D"]);

        assert_eq!(info.version, NOT_AVAILABLE);
        assert_eq!(info.name, "Atlas");
    }
}
