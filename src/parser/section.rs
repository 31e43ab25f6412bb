//! Section grouping and classification.
//!
//! A stat block is a sequence of blank-line-separated sections. Grouping
//! is a single left-to-right pass; classification looks only at a group's
//! first line and dispatches on fixed marker substrings. Anything that
//! matches no marker is assumed to be a body-location slot list.

/// The section kinds recognized in a stat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Info,
    Config,
    Chassis,
    Temperature,
    Armor,
    Weapons,
    /// Fallback: a body-location equipment list, or an unknown section
    /// that the slots builder will silently drop.
    Slots,
}

/// Marker substrings checked against a section's first line, in order.
const MARKERS: [(&str, SectionKind); 6] = [
    ("Version", SectionKind::Info),
    ("Config", SectionKind::Config),
    ("Mass", SectionKind::Chassis),
    ("Heat Sinks", SectionKind::Temperature),
    ("Armor", SectionKind::Armor),
    ("Weapons", SectionKind::Weapons),
];

impl SectionKind {
    /// Classify a section by its first line.
    ///
    /// Marker matching is case-sensitive substring containment. A line
    /// matching no marker falls through to `Slots`.
    pub fn classify(first_line: &str) -> SectionKind {
        MARKERS
            .iter()
            .find(|(marker, _)| first_line.contains(marker))
            .map_or(SectionKind::Slots, |&(_, kind)| kind)
    }
}

/// Partition lines into contiguous non-empty groups.
///
/// Blank lines separate groups and never appear inside one; the first
/// line of the document always opens a group. Single pass with O(1)
/// look-back.
pub fn group_sections<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    let mut groups: Vec<Vec<&'a str>> = Vec::new();
    let mut prev_blank = true;

    for &line in lines {
        if line.is_empty() {
            prev_blank = true;
            continue;
        }

        if prev_blank {
            groups.push(vec![line]);
        } else if let Some(open) = groups.last_mut() {
            open.push(line);
        }
        prev_blank = false;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_basic() {
        let lines = ["A", "", "B", "C", "", "D"];
        let groups = group_sections(&lines);

        assert_eq!(groups, vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
    }

    #[test]
    fn test_group_consecutive_blanks() {
        let lines = ["A", "", "", "B"];
        let groups = group_sections(&lines);

        assert_eq!(groups, vec![vec!["A"], vec!["B"]]);
    }

    #[test]
    fn test_group_leading_and_trailing_blanks() {
        let lines = ["", "A", "B", ""];
        let groups = group_sections(&lines);

        assert_eq!(groups, vec![vec!["A", "B"]]);
    }

    #[test]
    fn test_group_no_separators_is_single_group() {
        let lines = ["A", "B", "C"];
        let groups = group_sections(&lines);

        assert_eq!(groups, vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_sections(&[]).is_empty());
        assert!(group_sections(&["", ""]).is_empty());
    }

    #[test]
    fn test_classify_markers() {
        assert_eq!(SectionKind::classify("Version:1.0"), SectionKind::Info);
        assert_eq!(SectionKind::classify("Config:Biped"), SectionKind::Config);
        assert_eq!(SectionKind::classify("Mass:100"), SectionKind::Chassis);
        assert_eq!(
            SectionKind::classify("Heat Sinks:20 Single"),
            SectionKind::Temperature
        );
        assert_eq!(
            SectionKind::classify("Armor:Standard(Inner Sphere)"),
            SectionKind::Armor
        );
        assert_eq!(SectionKind::classify("Weapons:5"), SectionKind::Weapons);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(SectionKind::classify("mass:100"), SectionKind::Slots);
    }

    #[test]
    fn test_classify_fallback_to_slots() {
        assert_eq!(SectionKind::classify("Left Arm:"), SectionKind::Slots);
        assert_eq!(SectionKind::classify("Center Torso:"), SectionKind::Slots);
        assert_eq!(SectionKind::classify("Something Else"), SectionKind::Slots);
    }
}
