//! Directional plate, scoring cascade and overlays.
//!
//! This crate provides:
//! - Eight-palace plate generation (gates, stars, stems, void/clash flags)
//! - The ordered per-direction scoring cascade with named adjustments
//! - Personal life-cycle readings for users and guests
//! - Animation coefficients and the display sampling function
//! - 24-mountain facing scores

pub mod animation;
pub mod chart;
pub mod chart_types;
pub mod facing;
pub mod personal;
pub mod scoring;
pub mod scoring_types;

pub use animation::{
    AnimationCoefficients, animation_for, coefficients, hour_phase, sample_display_score,
};
pub use chart::{chart_seed, fold_day_count, generate_chart};
pub use chart_types::{ChartPlate, ChartSeed, PalaceCell, PatternFlag, UNFAVORABLE_BELOW};
pub use facing::{
    FacingResult, MAGNETIC_DECLINATION_DEG, NEUTRAL_FACING_SCORE, corrected_heading,
    interaction_score, score_facing,
};
pub use personal::{
    BIRTH_OVERRIDES, BirthOverride, GeoPoint, PERSONAL_SOCIABLE_GATES, PersonalReading,
    PersonalScore, Subject, UserProfile, birth_override, personal_reading, personal_score,
    subject_day_pillar,
};
pub use scoring::{
    BASE_SCORE, SCORING_SOCIABLE_GATES, SUPPRESSION_CAP, ScoringContext, TREASURE_STEMS,
    base_score, score_chart, score_direction, season_element, travel_horse,
};
pub use scoring_types::{Adjustment, Applied, DirectionalScore, DirectionalScores};
