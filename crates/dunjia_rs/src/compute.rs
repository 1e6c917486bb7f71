//! One-call chart computation.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use dunjia_base::{
    ALL_DIRECTIONS, Branch, CalendarIndices, Direction, Gate, Stem, calendar_indices, pillar_name,
};
use dunjia_chart::{
    AnimationCoefficients, ChartPlate, DirectionalScores, FacingResult, GeoPoint, PatternFlag,
    PersonalReading, ScoringContext, UserProfile, animation_for, generate_chart,
    personal_reading, score_chart, score_facing,
};
use dunjia_time::{SolarTime, format_civil, true_solar_time};

use crate::display::{OpenState, ScoreBand, radial_scale, score_label};
use crate::error::DunjiaError;
use crate::settings::Settings;

/// Everything the engine needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    /// Civil (standard) time at the location.
    #[serde(with = "dunjia_time::serde_civil")]
    pub time: NaiveDateTime,
    pub location: GeoPoint,
    /// Compass heading in degrees; only the facing score uses it.
    #[serde(default)]
    pub heading_deg: f64,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub settings: Settings,
}

impl ChartInput {
    pub fn new(time: NaiveDateTime, location: GeoPoint) -> Self {
        Self {
            time,
            location,
            heading_deg: 0.0,
            user: None,
            settings: Settings::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DunjiaError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read a user profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<UserProfile, DunjiaError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Renderer-ready view of one palace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PalaceView {
    pub direction: Direction,
    /// Trigram palace name, e.g. `"Kan"`.
    pub palace: &'static str,
    pub gate_key: &'static str,
    pub gate_hanja: &'static str,
    pub star_key: &'static str,
    pub pillar: String,
    pub score: f64,
    pub band: ScoreBand,
    pub open_state: OpenState,
    pub label: String,
    pub radial_scale: f64,
    /// `"Best"` for favorable palaces, empty otherwise.
    pub description: &'static str,
    pub personal: i32,
}

/// Human-readable one-liners.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub chart: String,
    pub subject: String,
    pub facing: String,
    /// Set when the gate at the top of the plate is open enough to use.
    pub notice: Option<String>,
}

/// Full result of one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOutput {
    pub solar: SolarTime,
    pub indices: CalendarIndices,
    pub chart: ChartPlate,
    pub scores: DirectionalScores,
    pub animation: [AnimationCoefficients; 8],
    pub facing: FacingResult,
    pub personalization: PersonalReading,
    pub palaces: Vec<PalaceView>,
    pub summary: ChartSummary,
}

impl ChartOutput {
    /// Highest-scoring direction.
    pub fn best_direction(&self) -> Direction {
        self.scores.best()
    }

    /// Gate at the top of the plate, when it reads open above level 0.5.
    pub fn facing_gate_open(&self) -> Option<Gate> {
        facing_gate_open(&self.chart, &self.scores, &self.facing)
    }
}

fn facing_gate_open(
    chart: &ChartPlate,
    scores: &DirectionalScores,
    facing: &FacingResult,
) -> Option<Gate> {
    let cell = chart.cell(facing.octant);
    let score = scores.get(facing.octant).value;
    let open = OpenState::of(score, cell.is_void).is_open();
    (open && score / 100.0 > 0.5).then_some(cell.gate)
}

/// Resolve the clock the chart is cast on.
pub fn resolve_solar_time(time: NaiveDateTime, location: GeoPoint, settings: &Settings) -> SolarTime {
    if settings.use_true_solar_time {
        true_solar_time(time, location.lng, settings.timezone_offset_hours)
    } else {
        SolarTime::uncorrected(time)
    }
}

fn palace_views(
    chart: &ChartPlate,
    scores: &DirectionalScores,
    personal: &PersonalReading,
    settings: &Settings,
) -> Vec<PalaceView> {
    ALL_DIRECTIONS
        .into_iter()
        .map(|d| {
            let cell = chart.cell(d);
            let score = scores.get(d).value;
            PalaceView {
                direction: d,
                palace: d.palace_name(),
                gate_key: cell.gate.key(),
                gate_hanja: cell.gate.hanja(),
                star_key: cell.star.key(),
                pillar: pillar_name(
                    Stem::from_index(cell.heaven_stem),
                    Branch::from_index(d.branches()[0]),
                ),
                score,
                band: ScoreBand::of(score),
                open_state: OpenState::of(score, cell.is_void),
                label: score_label(score, cell.is_void, settings.score_precision),
                radial_scale: radial_scale(score),
                description: if cell.pattern == PatternFlag::Favorable {
                    "Best"
                } else {
                    ""
                },
                personal: personal.get(d).score,
            }
        })
        .collect()
}

/// Compute every derived value for one input tuple.
pub fn compute(input: &ChartInput) -> ChartOutput {
    let settings = &input.settings;
    let solar = resolve_solar_time(input.time, input.location, settings);
    let ts = solar.true_solar;

    let indices = calendar_indices(&ts);
    debug!(
        solar = %format_civil(&ts),
        day_stem = indices.day_stem,
        day_branch = indices.day_branch,
        period = indices.period,
        "resolved calendar indices"
    );

    let plate = generate_chart(&ts, &indices);
    let scores = score_chart(&ScoringContext::new(&ts, &indices), &plate);
    let chart = plate.with_scores(&scores);
    let animation = animation_for(&chart, &scores);
    let facing = score_facing(input.heading_deg, indices.period, settings.use_magnetic_north);
    let personalization = personal_reading(input.user.as_ref(), &ts, &chart);
    let palaces = palace_views(&chart, &scores, &personalization, settings);

    let clock = if settings.use_true_solar_time {
        "TrueSolar"
    } else {
        "Standard"
    };
    let summary = ChartSummary {
        chart: format!("Time: {} ({clock})", ts.format("%H:%M:%S")),
        subject: personalization.summary.clone(),
        facing: facing.summary(),
        notice: facing_gate_open(&chart, &scores, &facing)
            .map(|gate| format!("{} gate ({}) is usable now", gate.name(), gate.hanja())),
    };
    debug!(best = scores.best().name(), facing = facing.score, "chart computed");

    ChartOutput {
        solar,
        indices,
        chart,
        scores,
        animation,
        facing,
        personalization,
        palaces,
        summary,
    }
}

/// Parse a JSON input and compute it.
pub fn compute_json(json: &str) -> Result<ChartOutput, DunjiaError> {
    let input = ChartInput::from_json_str(json)?;
    Ok(compute(&input))
}
