//! Presentation helpers for renderers: bands, labels and radial scaling.

use serde::Serialize;

use crate::settings::ScorePrecision;

/// Colour band of a displayed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Neutral,
    Poor,
}

impl ScoreBand {
    /// ≥90 excellent, ≥75 good, ≥60 fair, ≤30 poor, otherwise neutral.
    pub fn of(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Fair
        } else if score <= 30.0 {
            Self::Poor
        } else {
            Self::Neutral
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Neutral => "neutral",
            Self::Poor => "poor",
        }
    }
}

/// Score at which a palace reads as open.
pub const OPEN_THRESHOLD: f64 = 40.0;

/// Below this a closed palace reads as fully closed rather than insufficient.
pub const CLOSED_BELOW: f64 = 25.0;

/// Open/closed wording used at low precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenState {
    WideOpen,
    Open,
    WeaklyOpen,
    Insufficient,
    Closed,
}

impl OpenState {
    /// State of a palace. Void palaces are always closed.
    ///
    /// Open palaces are graded by `score / 100`: ≥0.8 wide open, ≥0.5 open.
    pub fn of(score: f64, is_void: bool) -> Self {
        if is_void {
            return Self::Closed;
        }
        if score >= OPEN_THRESHOLD {
            let level = score / 100.0;
            if level >= 0.8 {
                Self::WideOpen
            } else if level >= 0.5 {
                Self::Open
            } else {
                Self::WeaklyOpen
            }
        } else if score < CLOSED_BELOW {
            Self::Closed
        } else {
            Self::Insufficient
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WideOpen => "wide open",
            Self::Open => "open",
            Self::WeaklyOpen => "weakly open",
            Self::Insufficient => "insufficient",
            Self::Closed => "closed",
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::WideOpen | Self::Open | Self::WeaklyOpen)
    }
}

/// Text shown inside a palace.
pub fn score_label(score: f64, is_void: bool, precision: ScorePrecision) -> String {
    match precision {
        ScorePrecision::High => format!("{score:.0}"),
        ScorePrecision::Low => OpenState::of(score, is_void).label().to_string(),
    }
}

/// Radius multiplier for a palace wedge.
///
/// 60 and above grows linearly to 1.25 at 100; below 60 shrinks to 0.7 at
/// 30 and stays there.
pub fn radial_scale(score: f64) -> f64 {
    if score >= 60.0 {
        1.0 + (score - 60.0) / 40.0 * 0.25
    } else {
        0.7 + (score.max(30.0) - 30.0) / 30.0 * 0.3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(ScoreBand::of(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::of(89.9), ScoreBand::Good);
        assert_eq!(ScoreBand::of(75.0), ScoreBand::Good);
        assert_eq!(ScoreBand::of(60.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::of(45.0), ScoreBand::Neutral);
        assert_eq!(ScoreBand::of(30.0), ScoreBand::Poor);
        assert_eq!(ScoreBand::of(0.0), ScoreBand::Poor);
    }

    #[test]
    fn open_states() {
        assert_eq!(OpenState::of(85.0, false), OpenState::WideOpen);
        assert_eq!(OpenState::of(55.0, false), OpenState::Open);
        assert_eq!(OpenState::of(42.0, false), OpenState::WeaklyOpen);
        assert_eq!(OpenState::of(30.0, false), OpenState::Insufficient);
        assert_eq!(OpenState::of(10.0, false), OpenState::Closed);
        assert_eq!(OpenState::of(95.0, true), OpenState::Closed);
    }

    #[test]
    fn labels_follow_precision() {
        assert_eq!(score_label(72.4, false, ScorePrecision::High), "72");
        assert_eq!(score_label(72.4, false, ScorePrecision::Low), "open");
        assert_eq!(score_label(0.0, true, ScorePrecision::Low), "closed");
    }

    #[test]
    fn radial_scale_is_continuous_at_sixty() {
        assert!((radial_scale(60.0) - 1.0).abs() < 1e-12);
        assert!((radial_scale(59.999) - 1.0).abs() < 1e-3);
        assert!((radial_scale(100.0) - 1.25).abs() < 1e-12);
        assert!((radial_scale(30.0) - 0.7).abs() < 1e-12);
        assert!((radial_scale(5.0) - 0.7).abs() < 1e-12);
    }
}
