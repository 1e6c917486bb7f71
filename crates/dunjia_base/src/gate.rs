//! The eight gates and nine stars placed on the plate.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::element::Element;

/// The eight gates, in rotation-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    Open,
    Rest,
    Life,
    Harm,
    Du,
    Scene,
    Death,
    Fear,
}

/// All 8 gates in rotation-table order (0 = Open, 7 = Fear).
pub const ALL_GATES: [Gate; 8] = [
    Gate::Open,
    Gate::Rest,
    Gate::Life,
    Gate::Harm,
    Gate::Du,
    Gate::Scene,
    Gate::Death,
    Gate::Fear,
];

/// Gates that mark a direction as favorable.
pub const FAVORABLE_GATES: [Gate; 3] = [Gate::Open, Gate::Rest, Gate::Life];

impl Gate {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Harm => "Harm",
            Self::Du => "Du",
            Self::Scene => "Scene",
            Self::Death => "Death",
            Self::Fear => "Fear",
        }
    }

    /// Stable key used by renderers for localization.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Open => "door_open",
            Self::Rest => "door_rest",
            Self::Life => "door_life",
            Self::Harm => "door_harm",
            Self::Du => "door_du",
            Self::Scene => "door_scene",
            Self::Death => "door_death",
            Self::Fear => "door_fear",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Open => "開",
            Self::Rest => "休",
            Self::Life => "生",
            Self::Harm => "傷",
            Self::Du => "杜",
            Self::Scene => "景",
            Self::Death => "死",
            Self::Fear => "驚",
        }
    }

    /// 0-based table index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Gate at a table index, wrapping modulo 8.
    pub const fn from_index(idx: u8) -> Self {
        ALL_GATES[(idx % 8) as usize]
    }

    /// Fixed element of the gate.
    pub const fn element(self) -> Element {
        match self {
            Self::Open | Self::Fear => Element::Metal,
            Self::Rest => Element::Water,
            Self::Life | Self::Death => Element::Earth,
            Self::Harm | Self::Du => Element::Wood,
            Self::Scene => Element::Fire,
        }
    }

    /// Canonical home palace of the gate.
    pub const fn home(self) -> Direction {
        match self {
            Self::Rest => Direction::N,
            Self::Life => Direction::NE,
            Self::Harm => Direction::E,
            Self::Du => Direction::SE,
            Self::Scene => Direction::S,
            Self::Death => Direction::SW,
            Self::Fear => Direction::W,
            Self::Open => Direction::NW,
        }
    }

    /// Member of [`FAVORABLE_GATES`].
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Open | Self::Rest | Self::Life)
    }
}

/// The nine stars, in rotation-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Star {
    Peng,
    Rui,
    Chong,
    Fu,
    Qin,
    Xin,
    Zhu,
    Ren,
    Ying,
}

/// All 9 stars in rotation-table order (0 = Peng, 8 = Ying).
pub const ALL_STARS: [Star; 9] = [
    Star::Peng,
    Star::Rui,
    Star::Chong,
    Star::Fu,
    Star::Qin,
    Star::Xin,
    Star::Zhu,
    Star::Ren,
    Star::Ying,
];

impl Star {
    /// Romanized name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Peng => "Peng",
            Self::Rui => "Rui",
            Self::Chong => "Chong",
            Self::Fu => "Fu",
            Self::Qin => "Qin",
            Self::Xin => "Xin",
            Self::Zhu => "Zhu",
            Self::Ren => "Ren",
            Self::Ying => "Ying",
        }
    }

    /// Stable key used by renderers for localization.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Peng => "star_peng",
            Self::Rui => "star_rui",
            Self::Chong => "star_chong",
            Self::Fu => "star_fu",
            Self::Qin => "star_qin",
            Self::Xin => "star_xin",
            Self::Zhu => "star_zhu",
            Self::Ren => "star_ren",
            Self::Ying => "star_ying",
        }
    }

    /// 0-based table index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Star at a table index, wrapping modulo 9.
    pub const fn from_index(idx: u8) -> Self {
        ALL_STARS[(idx % 9) as usize]
    }
}
