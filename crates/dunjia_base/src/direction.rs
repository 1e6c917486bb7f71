//! The eight compass octants (palaces).
//!
//! Each octant owns one or two earthly branches and one element:
//!
//! | Dir | Palace | Branches      | Element |
//! |-----|--------|---------------|---------|
//! | N   | Kan    | Zi            | Water   |
//! | NE  | Gen    | Chou, Yin     | Earth   |
//! | E   | Zhen   | Mao           | Wood    |
//! | SE  | Xun    | Chen, Si      | Wood    |
//! | S   | Li     | Wu            | Fire    |
//! | SW  | Kun    | Wei, Shen     | Earth   |
//! | W   | Dui    | You           | Metal   |
//! | NW  | Qian   | Xu, Hai       | Metal   |

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::util::normalize_360;

/// A compass octant, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// All 8 directions in plate order (0 = N, 7 = NW).
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

/// Branch indices owned by each direction, in plate order.
const PALACE_BRANCHES: [&[u8]; 8] = [&[0], &[1, 2], &[3], &[4, 5], &[6], &[7, 8], &[9], &[10, 11]];

/// Direction owning each branch index (0 = Zi .. 11 = Hai).
const BRANCH_DIRECTION: [Direction; 12] = [
    Direction::N,
    Direction::NE,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::SW,
    Direction::W,
    Direction::NW,
    Direction::NW,
];

impl Direction {
    /// Short compass label ("N", "NE", ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Trigram palace name.
    pub const fn palace_name(self) -> &'static str {
        match self {
            Self::N => "Kan",
            Self::NE => "Gen",
            Self::E => "Zhen",
            Self::SE => "Xun",
            Self::S => "Li",
            Self::SW => "Kun",
            Self::W => "Dui",
            Self::NW => "Qian",
        }
    }

    /// 0-based plate index (N=0 .. NW=7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Direction at a plate index, wrapping modulo 8.
    pub const fn from_index(idx: u8) -> Self {
        ALL_DIRECTIONS[(idx % 8) as usize]
    }

    /// Branch indices owned by this direction (one or two).
    pub fn branches(self) -> &'static [u8] {
        PALACE_BRANCHES[self.index() as usize]
    }

    /// Whether this direction owns the given branch index.
    pub fn contains_branch(self, branch: u8) -> bool {
        self.branches().contains(&branch)
    }

    /// Fixed element of the palace.
    pub const fn element(self) -> Element {
        match self {
            Self::N => Element::Water,
            Self::NE | Self::SW => Element::Earth,
            Self::E | Self::SE => Element::Wood,
            Self::S => Element::Fire,
            Self::W | Self::NW => Element::Metal,
        }
    }

    /// Diametrically opposite direction.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Direction owning a branch index (wraps modulo 12).
    pub const fn from_branch(branch: u8) -> Self {
        BRANCH_DIRECTION[(branch % 12) as usize]
    }

    /// Octant containing a bearing; each spans ±22.5° around its center.
    pub fn from_heading(heading_deg: f64) -> Self {
        let h = normalize_360(heading_deg + 22.5);
        Self::from_index(((h / 45.0).floor() as u8) % 8)
    }

    /// Look up a direction by its compass label (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        ALL_DIRECTIONS
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}
