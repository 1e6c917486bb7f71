//! Civil timestamps and true-solar-time correction.
//!
//! This crate provides:
//! - Parsing/formatting of naive civil timestamps
//! - Day counting against the 2024-01-01 cycle epoch
//! - Standard time → true solar time (longitude + equation of time)

pub mod civil;
pub mod error;
pub mod serde_civil;
pub mod solar;

pub use civil::{
    EPOCH_DAYS_FROM_CE, day_of_year, days_since_epoch, format_civil, parse_civil,
    seconds_with_millis,
};
pub use error::TimeError;
pub use solar::{
    DEFAULT_TIMEZONE_OFFSET_HOURS, SolarTime, equation_of_time_min, longitude_correction_min,
    standard_meridian_deg, true_solar_time,
};

/// Re-exported so downstream crates share one timestamp type.
pub use chrono::NaiveDateTime;
