//! Eight-palace plate generation.
//!
//! The plate is a pure rotation of fixed tables. A day count since
//! 2024-01-01 and the two-hour period fix four shifts; every palace then
//! takes the table entry at `direction index + shift`.

use chrono::NaiveDateTime;
use tracing::trace;

use dunjia_base::{ALL_DIRECTIONS, CalendarIndices, Gate, Star, stem_pattern};
use dunjia_time::days_since_epoch;

use crate::chart_types::{ChartPlate, ChartSeed, PalaceCell, PatternFlag};

/// Fold a signed day count into a non-negative seed.
///
/// Negative counts become `(count rem 1000) + 1000`.
pub fn fold_day_count(days: i64) -> i64 {
    if days < 0 { days % 1000 + 1000 } else { days }
}

/// Compute the four plate shifts for a timestamp and period.
pub fn chart_seed(ts: &NaiveDateTime, period: u8) -> ChartSeed {
    let day_count = fold_day_count(days_since_epoch(ts.date()));
    let period = i64::from(period);
    ChartSeed {
        day_count,
        day_shift: (day_count % 8) as u8,
        star_shift: ((period * 2 + day_count) % 9) as u8,
        heaven_shift: ((period + day_count) % 10) as u8,
        earth_shift: ((day_count * 2) % 10) as u8,
    }
}

/// Build the plate for a (true-solar) timestamp and its calendar indices.
///
/// Cells are flagged favorable or neutral here; the unfavorable flag needs
/// final scores and is applied by [`ChartPlate::with_scores`].
pub fn generate_chart(ts: &NaiveDateTime, indices: &CalendarIndices) -> ChartPlate {
    let period = indices.period;
    let seed = chart_seed(ts, period);

    let cells = ALL_DIRECTIONS.map(|direction| {
        let i = direction.index();
        let gate = Gate::from_index(i + period + seed.day_shift);
        let star = Star::from_index(i + seed.star_shift);
        let heaven_stem = (i + seed.heaven_shift) % 10;
        let earth_stem = (i + seed.earth_shift) % 10;
        let branches = direction.branches();
        let is_void = branches.iter().any(|&b| indices.is_void_branch(b));
        let is_clash = branches.contains(&indices.clash_branch);

        let mut cell = PalaceCell {
            direction,
            gate,
            star,
            heaven_stem,
            earth_stem,
            is_void,
            is_clash,
            pattern: PatternFlag::Neutral,
            named_pattern: stem_pattern(heaven_stem, earth_stem),
        };
        if cell.is_favorable() {
            cell.pattern = PatternFlag::Favorable;
        }
        trace!(
            direction = direction.name(),
            gate = gate.name(),
            star = star.name(),
            heaven_stem,
            earth_stem,
            is_void,
            is_clash,
            "placed palace"
        );
        cell
    });

    ChartPlate {
        period,
        seed,
        cells,
    }
}
