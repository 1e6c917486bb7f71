//! Calendar indices: day and hour stem/branch positions, void and clash.
//!
//! Day positions count whole civil days from 2024-01-01, which is position
//! 0 (Jia-Zi) of the 60-day cycle. The two-hour periods start at odd hours,
//! so 23:00–00:59 is period 0 and belongs to the following day.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::Serialize;

use dunjia_time::days_since_epoch;

use crate::cycle::{Branch, Stem};

/// Length of the compound stem/branch day cycle.
pub const CYCLE_DAYS: i64 = 60;

/// Resolved calendar indices for one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarIndices {
    /// Day stem index (0..9).
    pub day_stem: u8,
    /// Day branch index (0..11).
    pub day_branch: u8,
    /// Two-hour period index (0..11), also the hour branch.
    pub period: u8,
    /// Hour stem index (0..9).
    pub hour_stem: u8,
    /// Void branch pair, or `None` when the day pairing has no entry.
    pub void_branches: Option<[u8; 2]>,
    /// Branch opposite the day branch (0..11).
    pub clash_branch: u8,
}

impl CalendarIndices {
    /// Day stem as an enum.
    pub fn day_stem(&self) -> Stem {
        Stem::from_index(self.day_stem)
    }

    /// Day branch as an enum.
    pub fn day_branch(&self) -> Branch {
        Branch::from_index(self.day_branch)
    }

    /// Hour stem as an enum.
    pub fn hour_stem(&self) -> Stem {
        Stem::from_index(self.hour_stem)
    }

    /// Hour (period) branch as an enum.
    pub fn hour_branch(&self) -> Branch {
        Branch::from_index(self.period)
    }

    /// Whether a branch index is one of the void pair.
    pub fn is_void_branch(&self, branch: u8) -> bool {
        self.void_branches.is_some_and(|pair| pair.contains(&branch))
    }
}

/// Two-hour period index: `floor((hour + 1) / 2) mod 12`.
pub fn period_index(ts: &NaiveDateTime) -> u8 {
    (((ts.hour() + 1) / 2) % 12) as u8
}

/// Position (0..59) of the timestamp's day in the 60-day cycle.
///
/// Hour 23 is advanced one hour first, so the late Zi period counts toward
/// the next day.
pub fn day_cycle_position(ts: &NaiveDateTime) -> u8 {
    let target = if ts.hour() == 23 {
        *ts + Duration::hours(1)
    } else {
        *ts
    };
    let offset = days_since_epoch(target.date());
    (((offset % CYCLE_DAYS) + CYCLE_DAYS) % CYCLE_DAYS) as u8
}

/// Day stem index (0..9).
pub fn day_stem_index(ts: &NaiveDateTime) -> u8 {
    day_cycle_position(ts) % 10
}

/// Day branch index (0..11).
pub fn day_branch_index(ts: &NaiveDateTime) -> u8 {
    day_cycle_position(ts) % 12
}

/// Hour stem from the day stem and period.
///
/// Each day stem fixes the stem of its first period at `(day_stem mod 5) × 2`;
/// later periods advance by one.
pub const fn hour_stem_index(day_stem: u8, period: u8) -> u8 {
    ((day_stem % 5) * 2 + period) % 10
}

/// Void branch pair for a day stem/branch.
///
/// Keyed on `(branch − stem + 12) mod 12`. Odd keys have no entry.
pub const fn void_branches(day_stem: u8, day_branch: u8) -> Option<[u8; 2]> {
    match (day_branch + 12 - day_stem % 12) % 12 {
        0 => Some([0, 1]),
        2 => Some([2, 3]),
        4 => Some([4, 5]),
        6 => Some([6, 7]),
        8 => Some([8, 9]),
        10 => Some([10, 11]),
        _ => None,
    }
}

/// Branch opposite the day branch.
pub const fn clash_branch(day_branch: u8) -> u8 {
    (day_branch + 6) % 12
}

/// Resolve every calendar index for a (normally true-solar) timestamp.
pub fn calendar_indices(ts: &NaiveDateTime) -> CalendarIndices {
    let position = day_cycle_position(ts);
    let day_stem = position % 10;
    let day_branch = position % 12;
    let period = period_index(ts);
    CalendarIndices {
        day_stem,
        day_branch,
        period,
        hour_stem: hour_stem_index(day_stem, period),
        void_branches: void_branches(day_stem, day_branch),
        clash_branch: clash_branch(day_branch),
    }
}
