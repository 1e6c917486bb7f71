//! Types for the eight-palace plate.

use serde::Serialize;

use dunjia_base::{ALL_DIRECTIONS, Direction, Gate, Star, StemPattern};

use crate::scoring_types::DirectionalScores;

/// Final score below which a non-favorable palace is flagged unfavorable.
pub const UNFAVORABLE_BELOW: f64 = 40.0;

/// Omen flag for one palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternFlag {
    Favorable,
    Unfavorable,
    #[serde(rename = "none")]
    Neutral,
}

impl PatternFlag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::Unfavorable => "unfavorable",
            Self::Neutral => "none",
        }
    }
}

/// The four day-count shifts that rotate the plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSeed {
    /// Non-negative day count since 2024-01-01 (negative counts folded).
    pub day_count: i64,
    pub day_shift: u8,
    pub star_shift: u8,
    pub heaven_shift: u8,
    pub earth_shift: u8,
}

/// Everything placed in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PalaceCell {
    pub direction: Direction,
    pub gate: Gate,
    pub star: Star,
    /// Heaven-plate stem index (0..9).
    pub heaven_stem: u8,
    /// Earth-plate stem index (0..9).
    pub earth_stem: u8,
    pub is_void: bool,
    pub is_clash: bool,
    pub pattern: PatternFlag,
    /// Named heaven/earth pattern, whether or not it counts.
    pub named_pattern: Option<&'static StemPattern>,
}

impl PalaceCell {
    /// The named pattern if it takes effect (never in a void palace).
    pub fn counted_pattern(&self) -> Option<&'static StemPattern> {
        if self.is_void {
            None
        } else {
            self.named_pattern
        }
    }

    /// Favorable gate in a palace that is neither void nor clashed.
    pub fn is_favorable(&self) -> bool {
        self.gate.is_favorable() && !self.is_void && !self.is_clash
    }
}

/// The full plate, one cell per direction in N..NW order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlate {
    pub period: u8,
    pub seed: ChartSeed,
    pub cells: [PalaceCell; 8],
}

impl ChartPlate {
    /// Cell for a direction.
    pub fn cell(&self, direction: Direction) -> &PalaceCell {
        &self.cells[direction.index() as usize]
    }

    /// Cells in N..NW order.
    pub fn iter(&self) -> impl Iterator<Item = &PalaceCell> {
        self.cells.iter()
    }

    /// Directions whose flag equals `flag`.
    pub fn directions_with(&self, flag: PatternFlag) -> Vec<Direction> {
        ALL_DIRECTIONS
            .into_iter()
            .filter(|&d| self.cell(d).pattern == flag)
            .collect()
    }

    /// A new plate whose non-favorable cells are flagged unfavorable where
    /// the final score falls below 40.
    pub fn with_scores(&self, scores: &DirectionalScores) -> Self {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            if cell.pattern != PatternFlag::Favorable
                && scores.get(cell.direction).value < UNFAVORABLE_BELOW
            {
                cell.pattern = PatternFlag::Unfavorable;
            }
        }
        next
    }
}
