//! Twelve-stage life cycle of a stem across the branches.
//!
//! Each stem is "born" at a fixed anchor branch. Yang (even) stems walk the
//! branches forward from the anchor, yin (odd) stems walk backward. The
//! number of steps selects one of twelve stages, and each stage carries a
//! fixed score.

use serde::Serialize;

use crate::cycle::{Polarity, Stem};

/// Anchor (birth) branch for each stem index.
const ANCHOR_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

/// The twelve stages, indexed by step offset from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifeStage {
    Birth,
    Bath,
    Belt,
    Official,
    Peak,
    Decline,
    Sickness,
    Death,
    Grave,
    Cut,
    Womb,
    Nourish,
}

/// All 12 stages in offset order (0 = Birth, 11 = Nourish).
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bath,
    LifeStage::Belt,
    LifeStage::Official,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Grave,
    LifeStage::Cut,
    LifeStage::Womb,
    LifeStage::Nourish,
];

impl LifeStage {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "Birth",
            Self::Bath => "Bath",
            Self::Belt => "Belt",
            Self::Official => "Official",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Grave => "Grave",
            Self::Cut => "Cut",
            Self::Womb => "Womb",
            Self::Nourish => "Nourish",
        }
    }

    /// Step offset from the anchor branch (0..11).
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Stage at a step offset, wrapping modulo 12.
    pub const fn from_offset(offset: u8) -> Self {
        ALL_LIFE_STAGES[(offset % 12) as usize]
    }

    /// Score of the stage.
    ///
    /// Bath scores 5, or 10 when `bath_boost` is set (the caller decides
    /// which gates count as sociable).
    pub const fn score(self, bath_boost: bool) -> i32 {
        match self {
            Self::Peak => 20,
            Self::Birth | Self::Official => 15,
            Self::Belt | Self::Nourish => 10,
            Self::Bath => {
                if bath_boost {
                    10
                } else {
                    5
                }
            }
            Self::Sickness => -10,
            Self::Death | Self::Cut => -15,
            Self::Grave => -35,
            Self::Decline | Self::Womb => 0,
        }
    }
}

/// Anchor branch index for a stem.
pub const fn anchor_branch(stem: Stem) -> u8 {
    ANCHOR_BRANCH[stem.index() as usize]
}

/// Steps from the stem's anchor to `branch`, in the stem's direction.
pub const fn life_stage_offset(stem: Stem, branch: u8) -> u8 {
    let anchor = anchor_branch(stem);
    let branch = branch % 12;
    match stem.polarity() {
        Polarity::Yang => (branch + 12 - anchor) % 12,
        Polarity::Yin => (anchor + 12 - branch) % 12,
    }
}

/// Life stage of `stem` at `branch`.
pub const fn life_stage(stem: Stem, branch: u8) -> LifeStage {
    LifeStage::from_offset(life_stage_offset(stem, branch))
}

/// Best (highest-scoring) stage over a set of branches.
///
/// Ties keep the first branch in the set. Returns `None` for an empty set.
pub fn best_life_stage(stem: Stem, branches: &[u8], bath_boost: bool) -> Option<(LifeStage, i32)> {
    branches
        .iter()
        .map(|&b| {
            let stage = life_stage(stem, b);
            (stage, stage.score(bath_boost))
        })
        .fold(None, |best, cur| match best {
            Some((_, s)) if s >= cur.1 => best,
            _ => Some(cur),
        })
}
