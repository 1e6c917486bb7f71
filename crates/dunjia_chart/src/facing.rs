//! Facing quality on the 24-mountain compass.
//!
//! The facing sector's element is the subject, the current period branch's
//! element the object. Their distance on the production cycle picks one of
//! five scores.

use serde::Serialize;

use dunjia_base::{Branch, Direction, Element, Mountain, mountain_by_label, mountain_for_heading};

/// Magnetic declination applied when the heading is magnetic.
pub const MAGNETIC_DECLINATION_DEG: f64 = -8.5;

/// Score when either element is unknown.
pub const NEUTRAL_FACING_SCORE: u8 = 50;

/// Result of scoring a heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacingResult {
    /// Heading actually used, after any declination, in [0, 360).
    pub heading_deg: f64,
    pub mountain: &'static Mountain,
    /// Octant shown at the top of the compass. The plate turns with the
    /// heading, so this is the octant at bearing `-heading`.
    pub octant: Direction,
    /// Element of the period branch's sector, if found.
    pub period_element: Option<Element>,
    /// One of 20, 40, 60, 80, 100, or 50 on a lookup miss.
    pub score: u8,
}

impl FacingResult {
    /// e.g. `"子 facing (Zi)"`.
    pub fn summary(&self) -> String {
        format!("{} facing ({})", self.mountain.hanja, self.mountain.label)
    }

    /// e.g. `"Space(Water) vs Time(Fire)"`, empty on a lookup miss.
    pub fn details(&self) -> String {
        match self.period_element {
            Some(time) => format!(
                "Space({}) vs Time({})",
                self.mountain.element.name(),
                time.name()
            ),
            None => String::new(),
        }
    }
}

/// Interaction score of `object` as seen from `subject`.
pub const fn interaction_score(subject: Element, object: Element) -> u8 {
    match (object.index() + 5 - subject.index()) % 5 {
        0 => 80,
        1 => 60,
        2 => 40,
        3 => 20,
        _ => 100,
    }
}

/// Apply magnetic declination when requested.
pub fn corrected_heading(heading_deg: f64, use_magnetic_north: bool) -> f64 {
    if use_magnetic_north {
        heading_deg + MAGNETIC_DECLINATION_DEG
    } else {
        heading_deg
    }
}

/// Score a heading against the current two-hour period.
pub fn score_facing(heading_deg: f64, period: u8, use_magnetic_north: bool) -> FacingResult {
    let heading = dunjia_base::normalize_360(corrected_heading(heading_deg, use_magnetic_north));
    let mountain = mountain_for_heading(heading);
    let period_element = mountain_by_label(Branch::from_index(period).name()).map(|m| m.element);
    let score = match period_element {
        Some(object) => interaction_score(mountain.element, object),
        None => NEUTRAL_FACING_SCORE,
    };
    FacingResult {
        heading_deg: heading,
        mountain,
        octant: Direction::from_heading(-heading),
        period_element,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_table() {
        assert_eq!(interaction_score(Element::Water, Element::Water), 80);
        assert_eq!(interaction_score(Element::Water, Element::Wood), 60);
        assert_eq!(interaction_score(Element::Water, Element::Fire), 40);
        assert_eq!(interaction_score(Element::Water, Element::Earth), 20);
        assert_eq!(interaction_score(Element::Water, Element::Metal), 100);
    }

    #[test]
    fn north_wraps_both_ways() {
        let a = score_facing(0.0, 6, false);
        let b = score_facing(359.0, 6, false);
        assert_eq!(a.mountain.label, "Zi");
        assert_eq!(b.mountain.label, "Zi");
        // Water facing, Fire hour (Wu)
        assert_eq!(a.score, 40);
        assert_eq!(a.details(), "Space(Water) vs Time(Fire)");
    }

    #[test]
    fn declination_moves_sector() {
        // 10 degrees true is Gui; 10 - 8.5 = 1.5 magnetic-corrected is Zi
        assert_eq!(score_facing(10.0, 0, false).mountain.label, "Gui");
        let m = score_facing(10.0, 0, true);
        assert_eq!(m.mountain.label, "Zi");
        assert!((m.heading_deg - 1.5).abs() < 1e-12);
        // small headings wrap below zero
        assert!((score_facing(3.0, 0, true).heading_deg - 354.5).abs() < 1e-12);
    }

    #[test]
    fn octant_turns_against_heading() {
        assert_eq!(score_facing(0.0, 0, false).octant, Direction::N);
        assert_eq!(score_facing(91.0, 0, false).octant, Direction::W);
        assert_eq!(score_facing(45.0, 0, false).octant, Direction::NW);
        assert_eq!(score_facing(200.0, 0, false).octant, Direction::S);
        // 20 - 8.5 = 11.5, still inside north
        assert_eq!(score_facing(20.0, 0, true).octant, Direction::N);
        // 30 true puts NW at the top only once corrected past 22.5
        assert_eq!(score_facing(30.0, 0, false).octant, Direction::NW);
        assert_eq!(score_facing(30.0, 0, true).octant, Direction::N);
    }

    #[test]
    fn summary_uses_hanja() {
        assert_eq!(score_facing(180.0, 0, false).summary(), "午 facing (Wu)");
    }
}
