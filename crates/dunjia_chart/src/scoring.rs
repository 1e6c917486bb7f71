//! Directional scoring cascade.
//!
//! Each palace starts at 65 plus a small tie-breaker, then runs an ordered
//! list of independent rules. Every rule adds a fixed weight and records
//! itself. Two clamps run after all additive rules: a void palace drops to
//! 0, otherwise a suppressed palace is capped at 40. The result is clamped
//! to [0, 100].

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use dunjia_base::{
    ALL_DIRECTIONS, CalendarIndices, Direction, Element, ElementRelation, Gate, Stem,
    best_life_stage, clamp_score, relation,
};

use crate::chart_types::{ChartPlate, PalaceCell};
use crate::scoring_types::{Adjustment, Applied, DirectionalScore, DirectionalScores};

/// Starting score of every palace.
pub const BASE_SCORE: f64 = 65.0;

/// Upper bound for a palace whose element suppresses its gate.
pub const SUPPRESSION_CAP: f64 = 40.0;

/// Gates that raise the Bath life-cycle stage from +5 to +10 when scoring.
pub const SCORING_SOCIABLE_GATES: [Gate; 3] = [Gate::Open, Gate::Rest, Gate::Scene];

/// Heaven stems (Yi, Bing, Ding) worth a flat bonus.
pub const TREASURE_STEMS: [u8; 3] = [1, 2, 3];

/// Season element for a civil month (1..12).
pub const fn season_element(month: u32) -> Element {
    match month {
        1..=3 => Element::Wood,
        4..=6 => Element::Fire,
        7..=9 => Element::Metal,
        _ => Element::Water,
    }
}

/// Travel-horse direction for a two-hour period.
///
/// Periods fall into four triads by `period mod 4`; each triad points to
/// one of Yin (NE), Hai (NW), Shen (SW) or Si (SE).
pub const fn travel_horse(period: u8) -> Direction {
    match period % 4 {
        0 => Direction::from_branch(2),
        1 => Direction::from_branch(11),
        2 => Direction::from_branch(8),
        _ => Direction::from_branch(5),
    }
}

/// Time-dependent inputs shared by every palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Civil month of the (true-solar) timestamp, 1..12.
    pub month: u32,
    pub period: u8,
    pub day_stem: u8,
}

impl ScoringContext {
    pub fn new(ts: &NaiveDateTime, indices: &CalendarIndices) -> Self {
        Self {
            month: ts.month(),
            period: indices.period,
            day_stem: indices.day_stem,
        }
    }

    pub const fn season(&self) -> Element {
        season_element(self.month)
    }

    /// Primary and secondary commander directions.
    pub const fn commanders(&self) -> (Direction, Direction) {
        let primary = (self.period + self.day_stem) % 8;
        (Direction::from_index(primary), Direction::from_index(primary + 4))
    }

    /// Direction of the branch reached by rotating the month branch by the period.
    pub const fn calendar_rotation(&self) -> Direction {
        let month_branch = ((self.month + 1) % 12) as u8;
        Direction::from_branch(month_branch + self.period)
    }

    pub const fn travel_horse(&self) -> Direction {
        travel_horse(self.period)
    }
}

/// Running score plus the adjustments applied so far.
#[derive(Debug, Clone, PartialEq)]
struct Accumulator {
    value: f64,
    fired: Vec<Applied>,
}

impl Accumulator {
    fn new(value: f64) -> Self {
        Self {
            value,
            fired: Vec::new(),
        }
    }

    fn add(&mut self, adjustment: Adjustment) {
        let delta = adjustment.additive_delta().unwrap_or(0.0);
        self.value += delta;
        self.fired.push(Applied { adjustment, delta });
    }

    fn set(&mut self, adjustment: Adjustment, value: f64) {
        let delta = value - self.value;
        self.value = value;
        self.fired.push(Applied { adjustment, delta });
    }

    fn has(&self, adjustment: Adjustment) -> bool {
        self.fired.iter().any(|a| a.adjustment == adjustment)
    }
}

type Rule = fn(&ScoringContext, &PalaceCell, &mut Accumulator);

/// Additive rules, in firing order.
const RULES: [Rule; 10] = [
    seasonal,
    gate_return,
    commander,
    calendar_rotation,
    travel_horse_bonus,
    gate_against_palace,
    named_pattern,
    life_cycle,
    treasure,
    south_harm,
];

fn seasonal(ctx: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    let relation = relation(ctx.season(), cell.direction.element());
    acc.add(Adjustment::Seasonal { relation });
}

fn gate_return(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    let home = cell.gate.home();
    if cell.direction == home {
        acc.add(Adjustment::Return);
    } else if cell.direction == home.opposite() {
        acc.add(Adjustment::OppositeReturn);
    }
}

fn commander(ctx: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    let (primary, secondary) = ctx.commanders();
    match (cell.direction == primary, cell.direction == secondary) {
        (true, true) => acc.add(Adjustment::CommanderBoth),
        (true, false) => acc.add(Adjustment::CommanderPrimary),
        (false, true) => acc.add(Adjustment::CommanderSecondary),
        (false, false) => {}
    }
}

fn calendar_rotation(ctx: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    if cell.direction == ctx.calendar_rotation() {
        acc.add(Adjustment::CalendarRotation);
    }
}

fn travel_horse_bonus(ctx: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    if cell.direction == ctx.travel_horse() {
        acc.add(Adjustment::TravelHorse);
    }
}

fn gate_against_palace(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    match relation(cell.direction.element(), cell.gate.element()) {
        ElementRelation::Destroys => acc.add(Adjustment::Suppression),
        ElementRelation::DestroyedBy => acc.add(Adjustment::Exhaustion),
        ElementRelation::Generates | ElementRelation::GeneratedBy => {
            acc.add(Adjustment::GateProduction)
        }
        ElementRelation::Same => {}
    }
}

fn named_pattern(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    if let Some(pattern) = cell.counted_pattern() {
        acc.add(Adjustment::StemPattern { pattern });
    }
}

fn life_cycle(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    let stem = Stem::from_index(cell.heaven_stem);
    let boost = SCORING_SOCIABLE_GATES.contains(&cell.gate);
    if let Some((stage, score)) = best_life_stage(stem, cell.direction.branches(), boost) {
        acc.add(Adjustment::LifeCycle { stage, score });
    }
}

fn treasure(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    if TREASURE_STEMS.contains(&cell.heaven_stem) {
        acc.add(Adjustment::Treasure);
    }
}

fn south_harm(_: &ScoringContext, cell: &PalaceCell, acc: &mut Accumulator) {
    if cell.direction == Direction::S && cell.gate == Gate::Harm {
        acc.add(Adjustment::SouthHarm);
    }
}

/// Starting value for a direction: 65 + (period + label length) × 0.01.
pub fn base_score(period: u8, direction: Direction) -> f64 {
    BASE_SCORE + (f64::from(period) + direction.name().len() as f64) * 0.01
}

/// Score one palace.
pub fn score_direction(ctx: &ScoringContext, cell: &PalaceCell) -> DirectionalScore {
    let mut acc = Accumulator::new(base_score(ctx.period, cell.direction));
    for rule in RULES {
        rule(ctx, cell, &mut acc);
    }

    if cell.is_void {
        acc.set(Adjustment::VoidKill, 0.0);
    } else if acc.has(Adjustment::Suppression) && acc.value > SUPPRESSION_CAP {
        acc.set(Adjustment::SuppressionCap, SUPPRESSION_CAP);
    }

    let value = clamp_score(acc.value);
    debug!(
        direction = cell.direction.name(),
        score = value,
        rules = acc.fired.len(),
        "scored palace"
    );
    DirectionalScore {
        direction: cell.direction,
        value,
        adjustments: acc.fired,
    }
}

/// Score every palace of a plate.
pub fn score_chart(ctx: &ScoringContext, plate: &ChartPlate) -> DirectionalScores {
    DirectionalScores {
        scores: ALL_DIRECTIONS.map(|d| score_direction(ctx, plate.cell(d))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_types::PatternFlag;
    use dunjia_base::{LifeStage, Star, stem_pattern};

    fn ctx(month: u32, period: u8, day_stem: u8) -> ScoringContext {
        ScoringContext {
            month,
            period,
            day_stem,
        }
    }

    fn cell(direction: Direction, gate: Gate, heaven: u8, earth: u8) -> PalaceCell {
        PalaceCell {
            direction,
            gate,
            star: Star::Peng,
            heaven_stem: heaven,
            earth_stem: earth,
            is_void: false,
            is_clash: false,
            pattern: PatternFlag::Neutral,
            named_pattern: stem_pattern(heaven, earth),
        }
    }

    #[test]
    fn season_table() {
        assert_eq!(season_element(1), Element::Wood);
        assert_eq!(season_element(6), Element::Fire);
        assert_eq!(season_element(9), Element::Metal);
        assert_eq!(season_element(12), Element::Water);
    }

    #[test]
    fn travel_horse_triads() {
        for p in [8, 0, 4] {
            assert_eq!(travel_horse(p), Direction::NE);
        }
        for p in [2, 6, 10] {
            assert_eq!(travel_horse(p), Direction::SW);
        }
        for p in [5, 9, 1] {
            assert_eq!(travel_horse(p), Direction::NW);
        }
        for p in [11, 3, 7] {
            assert_eq!(travel_horse(p), Direction::SE);
        }
    }

    #[test]
    fn commanders_are_opposite() {
        let (p, s) = ctx(1, 5, 6).commanders();
        assert_eq!(p, Direction::SE);
        assert_eq!(s, Direction::NW);
        assert_eq!(p.opposite(), s);
    }

    #[test]
    fn base_breaks_ties_by_label_length() {
        assert!((base_score(3, Direction::N) - 65.04).abs() < 1e-12);
        assert!((base_score(3, Direction::NE) - 65.05).abs() < 1e-12);
    }

    #[test]
    fn void_palace_scores_zero() {
        let mut c = cell(Direction::E, Gate::Open, 2, 0);
        c.is_void = true;
        let s = score_direction(&ctx(2, 4, 1), &c);
        assert_eq!(s.value, 0.0);
        assert_eq!(s.adjustments.last().map(|a| a.adjustment), Some(Adjustment::VoidKill));
        assert!(!s.fired_named("stem_pattern"));
    }

    #[test]
    fn suppression_caps_at_forty() {
        // Metal palace (W) over a Wood gate (Harm): suppression
        let c = cell(Direction::W, Gate::Harm, 2, 0);
        // commander primary lands on W: (period + day_stem) % 8 == 6
        let s = score_direction(&ctx(8, 6, 0), &c);
        assert!(s.has_suppression());
        assert!(s.value <= SUPPRESSION_CAP);
        assert!(s.fired_named("suppression_cap"));
    }

    #[test]
    fn exhaustion_when_gate_destroys_palace() {
        // Fire gate (Scene) in a Metal palace (NW)
        let s = score_direction(&ctx(1, 0, 0), &cell(Direction::NW, Gate::Scene, 0, 0));
        assert!(s.has_exhaustion());
        assert!(!s.has_suppression());
    }

    #[test]
    fn return_and_opposite_return() {
        let home = score_direction(&ctx(1, 0, 0), &cell(Direction::N, Gate::Rest, 0, 0));
        assert!(home.fired_named("return"));
        let away = score_direction(&ctx(1, 0, 0), &cell(Direction::S, Gate::Rest, 0, 0));
        assert!(away.fired_named("opposite_return"));
        assert!(!away.fired_named("return"));
    }

    #[test]
    fn south_harm_penalty() {
        let s = score_direction(&ctx(5, 3, 3), &cell(Direction::S, Gate::Harm, 0, 0));
        assert!(s.fired_named("south_harm"));
    }

    #[test]
    fn adjustments_run_in_order() {
        let s = score_direction(&ctx(7, 0, 0), &cell(Direction::N, Gate::Open, 2, 0));
        let names = s.rule_names();
        assert_eq!(names.first(), Some(&"seasonal"));
        let pos = |n: &str| names.iter().position(|x| *x == n);
        assert!(pos("stem_pattern") < pos("life_cycle"));
        assert!(pos("life_cycle") < pos("treasure"));
    }

    #[test]
    fn hand_computed_palace() {
        // N, Open gate, heaven Bing (2) over earth Jia (0), month 7, period 0,
        // day stem 0.
        //   base 65.01
        //   Metal season generates Water palace    +10
        //   Open home NW: no return
        //   primary commander N                    +25
        //   rotation branch (8 % 12) = Shen -> SW: no
        //   travel horse NE: no
        //   Water palace vs Metal gate: produced   +12
        //   bird_falls_into_cave                   +15
        //   Bing at Zi: offset 10 Womb               0
        //   treasure Bing                          +15
        // 65.01 + 77 = 142.01 -> clamped to 100
        let s = score_direction(&ctx(7, 0, 0), &cell(Direction::N, Gate::Open, 2, 0));
        assert_eq!(
            s.rule_names(),
            vec![
                "seasonal",
                "commander_primary",
                "gate_production",
                "stem_pattern",
                "life_cycle",
                "treasure"
            ]
        );
        assert_eq!(s.value, 100.0);
    }

    #[test]
    fn bath_under_sociable_gate() {
        // N, Jia over Ji, month 4, period 1, day stem 0.
        //   base 65.02
        //   Water palace destroys Fire season      -10
        //   Water palace vs Metal gate: produced   +12
        //   Jia at Zi is Bath, Open is sociable    +10
        let open = score_direction(&ctx(4, 1, 0), &cell(Direction::N, Gate::Open, 0, 5));
        assert_eq!(
            open.rule_names(),
            vec!["seasonal", "gate_production", "life_cycle"]
        );
        assert!(open.fired(|a| *a == Adjustment::LifeCycle { stage: LifeStage::Bath, score: 10 }));
        assert!((open.value - 77.02).abs() < 1e-9, "{}", open.value);

        // Life is only sociable for personal readings; here Bath stays +5
        // and the Earth gate exhausts the Water palace.
        let life = score_direction(&ctx(4, 1, 0), &cell(Direction::N, Gate::Life, 0, 5));
        assert!(life.fired(|a| *a == Adjustment::LifeCycle { stage: LifeStage::Bath, score: 5 }));
        assert!(life.has_exhaustion());
        assert!((life.value - 45.02).abs() < 1e-9, "{}", life.value);
    }

    #[test]
    fn scores_always_in_range() {
        let gates = dunjia_base::ALL_GATES;
        for month in 1..=12 {
            for period in 0..12u8 {
                for (i, d) in ALL_DIRECTIONS.into_iter().enumerate() {
                    let c = cell(d, gates[(i + period as usize) % 8], period % 10, month as u8 % 10);
                    let s = score_direction(&ctx(month, period, (i as u8) % 10), &c);
                    assert!((0.0..=100.0).contains(&s.value), "{}", s.value);
                }
            }
        }
    }
}
