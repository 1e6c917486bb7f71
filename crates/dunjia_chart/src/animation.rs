//! Per-direction oscillation coefficients and the sampling contract.
//!
//! The core only hands out `{frequency, amplitude}`; a renderer samples
//! [`sample_display_score`] on its own clock.

use std::f64::consts::PI;

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use dunjia_base::{ALL_DIRECTIONS, Direction, clamp_score};
use dunjia_time::seconds_with_millis;

use crate::chart_types::{ChartPlate, PalaceCell};
use crate::scoring_types::{DirectionalScore, DirectionalScores};

const BASE_FREQUENCY: f64 = 1.0;
const BASE_AMPLITUDE: f64 = 2.5;

/// Frequency/amplitude pair for one direction. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationCoefficients {
    pub direction: Direction,
    pub frequency: f64,
    pub amplitude: f64,
}

impl AnimationCoefficients {
    /// Phase seed of the direction (its plate index).
    pub fn seed(&self) -> f64 {
        f64::from(self.direction.index())
    }
}

/// Coefficients from a palace and its final score.
pub fn coefficients(cell: &PalaceCell, score: &DirectionalScore) -> AnimationCoefficients {
    let mut frequency = BASE_FREQUENCY;
    let mut amplitude = BASE_AMPLITUDE;

    if cell.is_clash {
        frequency += 3.0;
    }
    if score.has_suppression() || score.has_exhaustion() {
        frequency += 2.0;
    }
    if score.has_return() {
        frequency += 1.5;
    }
    if score.has_punishment_pattern() {
        frequency += 2.5;
    }
    if cell.gate.is_favorable() {
        frequency -= 0.2;
    }
    if score.has_strong_season() {
        amplitude += 1.5;
        frequency -= 0.1;
    }
    if score.value < 40.0 {
        amplitude -= 1.0;
    }

    AnimationCoefficients {
        direction: cell.direction,
        frequency,
        amplitude,
    }
}

/// Coefficients for every direction in N..NW order.
pub fn animation_for(plate: &ChartPlate, scores: &DirectionalScores) -> [AnimationCoefficients; 8] {
    ALL_DIRECTIONS.map(|d| coefficients(plate.cell(d), scores.get(d)))
}

/// Fraction of the hour elapsed at `ts`, millisecond resolution.
pub fn hour_phase(ts: &NaiveDateTime) -> f64 {
    (f64::from(ts.minute()) * 60.0 + seconds_with_millis(ts)) / 3600.0
}

/// Displayed score at `ts`: `clamp(base + sin(phase·π·8·f + seed)·a, 0, 100)`.
pub fn sample_display_score(base: f64, coeff: &AnimationCoefficients, ts: &NaiveDateTime) -> f64 {
    let phase = hour_phase(ts);
    let perturbation = (phase * PI * 8.0 * coeff.frequency + coeff.seed()).sin() * coeff.amplitude;
    clamp_score(base + perturbation)
}
