//! Fixed symbol tables and cyclic arithmetic for the directional plate.
//!
//! This crate provides:
//! - Five elements and their production/destruction relations
//! - Heavenly stems, earthly branches and the 60-position cycle
//! - The eight directions, gates and nine stars
//! - Day/hour calendar indices with void and clash branches
//! - The twelve-stage life cycle, named stem patterns and the 24 mountains
//!
//! Everything here is a total, pure function over `const` tables.

pub mod calendar;
pub mod cycle;
pub mod direction;
pub mod element;
pub mod gate;
pub mod life_cycle;
pub mod mountain;
pub mod stem_pattern;
pub mod util;

pub use calendar::{
    CYCLE_DAYS, CalendarIndices, calendar_indices, clash_branch, day_branch_index,
    day_cycle_position, day_stem_index, hour_stem_index, period_index, void_branches,
};
pub use cycle::{
    ALL_BRANCHES, ALL_STEMS, Branch, Polarity, Stem, pillar_name, sexagenary_position,
};
pub use direction::{ALL_DIRECTIONS, Direction};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, relation};
pub use gate::{ALL_GATES, ALL_STARS, FAVORABLE_GATES, Gate, Star};
pub use life_cycle::{
    ALL_LIFE_STAGES, LifeStage, anchor_branch, best_life_stage, life_stage, life_stage_offset,
};
pub use mountain::{MOUNTAINS, Mountain, mountain_by_label, mountain_for_heading};
pub use stem_pattern::{PatternClass, STEM_PATTERNS, StemPattern, stem_pattern};
pub use util::{clamp_score, in_arc, normalize_360};
