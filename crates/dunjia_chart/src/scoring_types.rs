//! Types for directional scores and the adjustments behind them.

use serde::Serialize;

use dunjia_base::{Direction, ElementRelation, LifeStage, PatternClass, StemPattern};

/// One named rule that fired while scoring a palace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Adjustment {
    /// Season element against palace element.
    Seasonal { relation: ElementRelation },
    /// Gate sits in its home palace.
    Return,
    /// Gate sits opposite its home palace.
    OppositeReturn,
    CommanderBoth,
    CommanderPrimary,
    CommanderSecondary,
    CalendarRotation,
    TravelHorse,
    /// Palace element destroys gate element.
    Suppression,
    /// Gate element destroys palace element.
    Exhaustion,
    /// Gate and palace produce one another.
    GateProduction,
    StemPattern { pattern: &'static StemPattern },
    LifeCycle { stage: LifeStage, score: i32 },
    Treasure,
    SouthHarm,
    /// Void palace forced to zero.
    VoidKill,
    /// Suppressed palace capped.
    SuppressionCap,
}

impl Adjustment {
    /// Stable rule name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seasonal { .. } => "seasonal",
            Self::Return => "return",
            Self::OppositeReturn => "opposite_return",
            Self::CommanderBoth => "commander_both",
            Self::CommanderPrimary => "commander_primary",
            Self::CommanderSecondary => "commander_secondary",
            Self::CalendarRotation => "calendar_rotation",
            Self::TravelHorse => "travel_horse",
            Self::Suppression => "suppression",
            Self::Exhaustion => "exhaustion",
            Self::GateProduction => "gate_production",
            Self::StemPattern { .. } => "stem_pattern",
            Self::LifeCycle { .. } => "life_cycle",
            Self::Treasure => "treasure",
            Self::SouthHarm => "south_harm",
            Self::VoidKill => "void_kill",
            Self::SuppressionCap => "suppression_cap",
        }
    }

    /// Fixed additive weight, or `None` for the two clamps.
    pub fn additive_delta(self) -> Option<f64> {
        let d = match self {
            Self::Seasonal { relation } => match relation {
                ElementRelation::Same => 15.0,
                ElementRelation::Generates => 10.0,
                ElementRelation::GeneratedBy => -5.0,
                ElementRelation::DestroyedBy => -10.0,
                ElementRelation::Destroys => -15.0,
            },
            Self::Return => -10.0,
            Self::OppositeReturn => -15.0,
            Self::CommanderBoth => 30.0,
            Self::CommanderPrimary => 25.0,
            Self::CommanderSecondary => 20.0,
            Self::CalendarRotation => 10.0,
            Self::TravelHorse => 12.0,
            Self::Suppression => -25.0,
            Self::Exhaustion => -15.0,
            Self::GateProduction => 12.0,
            Self::StemPattern { pattern } => f64::from(pattern.weight),
            Self::LifeCycle { score, .. } => f64::from(score),
            Self::Treasure => 15.0,
            Self::SouthHarm => -30.0,
            Self::VoidKill | Self::SuppressionCap => return None,
        };
        Some(d)
    }
}

/// An adjustment together with the change it made to the running score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Applied {
    #[serde(flatten)]
    pub adjustment: Adjustment,
    pub delta: f64,
}

/// Final score of one palace plus the ordered rules that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionalScore {
    pub direction: Direction,
    /// Clamped to [0, 100].
    pub value: f64,
    pub adjustments: Vec<Applied>,
}

impl DirectionalScore {
    /// Whether any applied adjustment matches.
    pub fn fired(&self, pred: impl Fn(&Adjustment) -> bool) -> bool {
        self.adjustments.iter().any(|a| pred(&a.adjustment))
    }

    /// Whether an adjustment with this rule name fired.
    pub fn fired_named(&self, name: &str) -> bool {
        self.fired(|a| a.name() == name)
    }

    pub fn has_suppression(&self) -> bool {
        self.fired(|a| matches!(a, Adjustment::Suppression))
    }

    pub fn has_exhaustion(&self) -> bool {
        self.fired(|a| matches!(a, Adjustment::Exhaustion))
    }

    /// Return or opposite-return.
    pub fn has_return(&self) -> bool {
        self.fired(|a| matches!(a, Adjustment::Return | Adjustment::OppositeReturn))
    }

    pub fn has_punishment_pattern(&self) -> bool {
        self.fired(|a| {
            matches!(a, Adjustment::StemPattern { pattern } if pattern.class == PatternClass::Punishment)
        })
    }

    /// Season shares or produces the palace element.
    pub fn has_strong_season(&self) -> bool {
        self.fired(|a| {
            matches!(
                a,
                Adjustment::Seasonal {
                    relation: ElementRelation::Same | ElementRelation::Generates
                }
            )
        })
    }

    /// Rule names in firing order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.adjustments.iter().map(|a| a.adjustment.name()).collect()
    }
}

/// Scores for all eight directions in N..NW order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionalScores {
    pub scores: [DirectionalScore; 8],
}

impl DirectionalScores {
    pub fn get(&self, direction: Direction) -> &DirectionalScore {
        &self.scores[direction.index() as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectionalScore> {
        self.scores.iter()
    }

    /// Highest-scoring direction; ties keep the earlier direction.
    pub fn best(&self) -> Direction {
        self.scores
            .iter()
            .fold(&self.scores[0], |best, s| if s.value > best.value { s } else { best })
            .direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seasonal_weights() {
        let w = |relation| Adjustment::Seasonal { relation }.additive_delta();
        assert_eq!(w(ElementRelation::Same), Some(15.0));
        assert_eq!(w(ElementRelation::Generates), Some(10.0));
        assert_eq!(w(ElementRelation::GeneratedBy), Some(-5.0));
        assert_eq!(w(ElementRelation::DestroyedBy), Some(-10.0));
        assert_eq!(w(ElementRelation::Destroys), Some(-15.0));
    }

    #[test]
    fn clamps_have_no_fixed_weight() {
        assert_eq!(Adjustment::VoidKill.additive_delta(), None);
        assert_eq!(Adjustment::SuppressionCap.additive_delta(), None);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Adjustment::OppositeReturn.name(), "opposite_return");
        assert_eq!(Adjustment::CommanderBoth.name(), "commander_both");
    }
}
