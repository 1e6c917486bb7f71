//! Standard time to true solar time.
//!
//! Two terms are applied to the civil clock:
//! - longitude correction: 4 minutes per degree between the local meridian
//!   and the zone's standard meridian (`offset × 15°`);
//! - equation of time, from the three-term approximation
//!   `9.87·sin 2B − 7.53·cos B − 1.5·sin B`, `B = 360·(d − 81)/365`.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::civil::day_of_year;

/// Zone offset used when the caller does not supply one (UTC+9).
pub const DEFAULT_TIMEZONE_OFFSET_HOURS: i32 = 9;

/// Clock minutes per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// A civil timestamp together with its true solar counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTime {
    /// Input civil (standard) time.
    pub standard: NaiveDateTime,
    /// Corrected true solar time.
    pub true_solar: NaiveDateTime,
    /// Longitude term in minutes (east of the standard meridian is positive).
    pub longitude_correction_min: f64,
    /// Equation-of-time term in minutes.
    pub equation_of_time_min: f64,
}

impl SolarTime {
    /// Pass-through value used when solar correction is switched off.
    pub fn uncorrected(standard: NaiveDateTime) -> Self {
        Self {
            standard,
            true_solar: standard,
            longitude_correction_min: 0.0,
            equation_of_time_min: 0.0,
        }
    }

    /// Sum of both correction terms in minutes.
    pub fn total_correction_min(&self) -> f64 {
        self.longitude_correction_min + self.equation_of_time_min
    }
}

/// Standard meridian of a whole-hour zone, in degrees east.
pub fn standard_meridian_deg(timezone_offset_hours: i32) -> f64 {
    f64::from(timezone_offset_hours) * 15.0
}

/// Longitude correction in minutes for a local meridian.
pub fn longitude_correction_min(longitude_deg: f64, timezone_offset_hours: i32) -> f64 {
    (longitude_deg - standard_meridian_deg(timezone_offset_hours)) * MINUTES_PER_DEGREE
}

/// Equation of time in minutes for a 1-based day of year.
pub fn equation_of_time_min(day_of_year: u32) -> f64 {
    let b = (360.0 * (f64::from(day_of_year) - 81.0) / 365.0).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Correct a standard civil timestamp to true solar time.
///
/// The shift is applied at millisecond resolution; any sub-millisecond
/// remainder is dropped. A shift that would leave chrono's calendar range
/// leaves the timestamp unchanged.
pub fn true_solar_time(
    standard: NaiveDateTime,
    longitude_deg: f64,
    timezone_offset_hours: i32,
) -> SolarTime {
    let lng_min = longitude_correction_min(longitude_deg, timezone_offset_hours);
    let eot_min = equation_of_time_min(day_of_year(&standard));
    let shift_ms = ((lng_min + eot_min) * 60_000.0).trunc() as i64;
    let true_solar = standard
        .checked_add_signed(Duration::milliseconds(shift_ms))
        .unwrap_or(standard);
    SolarTime {
        standard,
        true_solar,
        longitude_correction_min: lng_min,
        equation_of_time_min: eot_min,
    }
}
