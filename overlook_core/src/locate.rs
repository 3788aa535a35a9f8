// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section detection.
//!
//! The scroll offset is biased by a lookahead so a section becomes active a
//! little before its top edge reaches the top of the viewport. Containment
//! is tested against the half-open range `[top, top + height)` and the first
//! match in document order wins.

use crate::layout::Section;

/// Returns the offset used for containment tests.
#[inline]
#[must_use]
pub fn biased_offset(offset: f64, lookahead: f64) -> f64 {
    offset + lookahead
}

/// Returns the first section (document order) containing the biased offset.
///
/// Sections are expected not to overlap; if they do, the earlier one wins.
/// Returns `None` when no section contains the biased offset.
#[must_use]
pub fn locate(offset: f64, lookahead: f64, sections: &[Section]) -> Option<&Section> {
    let biased = biased_offset(offset, lookahead);
    sections.iter().find(|s| s.contains(biased))
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::config::LOOKAHEAD;

    fn two_sections() -> Vec<Section> {
        vec![Section::new("a", 0.0, 500.0), Section::new("b", 500.0, 500.0)]
    }

    fn id(offset: f64, sections: &[Section]) -> Option<&str> {
        locate(offset, LOOKAHEAD, sections).map(|s| s.identifier.as_str())
    }

    #[test]
    fn lookahead_selects_next_section() {
        // 450 + 100 = 550, inside "b".
        assert_eq!(id(450.0, &two_sections()), Some("b"));
    }

    #[test]
    fn offset_inside_first_section() {
        // 300 + 100 = 400, inside "a".
        assert_eq!(id(300.0, &two_sections()), Some("a"));
    }

    #[test]
    fn boundary_belongs_to_later_section() {
        assert_eq!(id(400.0, &two_sections()), Some("b"));
        assert_eq!(id(399.0, &two_sections()), Some("a"));
    }

    #[test]
    fn past_last_section_is_none() {
        assert_eq!(id(900.0, &two_sections()), None);
        assert_eq!(id(0.0, &[]), None);
    }

    #[test]
    fn gap_between_sections_is_none() {
        let sections = vec![Section::new("a", 0.0, 200.0), Section::new("b", 400.0, 200.0)];
        assert_eq!(id(150.0, &sections), None);
    }

    #[test]
    fn overlap_prefers_document_order() {
        let sections = vec![Section::new("a", 0.0, 600.0), Section::new("b", 500.0, 500.0)];
        assert_eq!(id(450.0, &sections), Some("a"));
    }

    #[test]
    fn result_always_contains_biased_offset() {
        let sections = vec![
            Section::new("hero", 0.0, 720.0),
            Section::new("about", 720.0, 910.0),
            Section::new("history", 1630.0, 1200.0),
            Section::new("contact", 2830.0, 400.0),
        ];
        let mut offset = 0.0;
        while offset < 3500.0 {
            match locate(offset, LOOKAHEAD, &sections) {
                Some(s) => assert!(s.contains(offset + LOOKAHEAD), "{offset} not in {s:?}"),
                None => assert!(
                    sections.iter().all(|s| !s.contains(offset + LOOKAHEAD)),
                    "{offset} matched nothing but a section contains it"
                ),
            }
            offset += 37.0;
        }
    }

    #[test]
    fn zero_height_section_never_matches() {
        let sections = vec![Section::new("empty", 500.0, 0.0)];
        assert_eq!(id(400.0, &sections), None);
    }
}
