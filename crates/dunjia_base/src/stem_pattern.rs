//! Heaven-over-earth stem patterns.
//!
//! A palace's heaven stem sitting over its earth stem may form a named
//! pattern. Each pattern carries a signed weight and a class; the class
//! feeds both the plate's favorable flag and the animation frequency.

use serde::Serialize;

use self::PatternClass::{Adverse, Auspicious, Punishment};

/// Broad class of a stem pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatternClass {
    Auspicious,
    Adverse,
    /// Adverse patterns severe enough to agitate the display.
    Punishment,
}

impl PatternClass {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Adverse => "Adverse",
            Self::Punishment => "Punishment",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Auspicious)
    }
}

/// One entry in the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemPattern {
    pub heaven: u8,
    pub earth: u8,
    /// Stable key used by renderers.
    pub key: &'static str,
    pub weight: i32,
    pub class: PatternClass,
}

const fn p(heaven: u8, earth: u8, key: &'static str, weight: i32, class: PatternClass) -> StemPattern {
    StemPattern { heaven, earth, key, weight, class }
}

/// Every recognised (heaven, earth) pairing. Unlisted pairs carry no pattern.
pub const STEM_PATTERNS: [StemPattern; 17] = [
    p(0, 2, "green_dragon_returns", 15, Auspicious),
    p(2, 0, "bird_falls_into_cave", 15, Auspicious),
    p(1, 2, "wonders_in_order", 10, Auspicious),
    p(3, 1, "jade_maiden_guards_gate", 12, Auspicious),
    p(2, 3, "star_follows_moon", 10, Auspicious),
    p(1, 3, "wonders_assist", 8, Auspicious),
    p(6, 6, "twin_white_metal", -15, Adverse),
    p(6, 2, "white_enters_fire", -15, Adverse),
    p(2, 6, "fire_enters_white", -12, Adverse),
    p(6, 1, "white_meets_wonder", -10, Adverse),
    p(7, 1, "white_tiger_rampant", -20, Punishment),
    p(1, 7, "green_dragon_flees", -20, Punishment),
    p(3, 9, "vermilion_bird_in_river", -15, Punishment),
    p(9, 3, "serpent_writhes", -15, Punishment),
    p(9, 9, "heaven_net_spread", -15, Adverse),
    p(8, 8, "serpent_in_earth_net", -10, Adverse),
    p(6, 8, "drifting_metal", -10, Adverse),
];

/// Pattern formed by a heaven stem over an earth stem, if any.
pub fn stem_pattern(heaven: u8, earth: u8) -> Option<&'static StemPattern> {
    STEM_PATTERNS
        .iter()
        .find(|sp| sp.heaven == heaven % 10 && sp.earth == earth % 10)
}
