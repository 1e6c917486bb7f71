//! One-call facade for the dunjia directional chart engine.
//!
//! Takes a civil time, a location, an optional heading and user profile,
//! and a settings bundle; returns the plate, scores, animation coefficients,
//! facing score and personal overlay in one serializable value.
//!
//! # Quick start
//!
//! ```rust
//! use dunjia_rs::*;
//!
//! let time = parse_civil("2024-03-20T12:00:00").unwrap();
//! let input = ChartInput::new(time, GeoPoint { lat: 37.57, lng: 126.98 });
//! let out = compute(&input);
//! println!("best direction: {}", out.best_direction().name());
//! ```

pub mod compute;
pub mod display;
pub mod error;
pub mod settings;

pub use compute::{
    ChartInput, ChartOutput, ChartSummary, PalaceView, compute, compute_json, load_profile,
    resolve_solar_time,
};
pub use display::{OpenState, ScoreBand, radial_scale, score_label};
pub use error::DunjiaError;
pub use settings::{ScorePrecision, Settings};

// Re-export the types callers need so they only depend on this crate.
pub use dunjia_base::{Branch, Direction, Element, Gate, Star, Stem};
pub use dunjia_chart::{
    AnimationCoefficients, ChartPlate, DirectionalScore, FacingResult, GeoPoint, PatternFlag,
    PersonalReading, UserProfile, sample_display_score,
};
pub use dunjia_time::{NaiveDateTime, SolarTime, TimeError, format_civil, parse_civil};
