//! Life-cycle reading for a user or guest.
//!
//! The subject's day stem comes from their birth date, or from the current
//! true solar time in guest mode. Each direction then gets the best
//! life-cycle score of that stem over the palace's branches. The reading is
//! an overlay: it never feeds back into [`crate::scoring`].

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use dunjia_base::{
    ALL_DIRECTIONS, Branch, Direction, Gate, LifeStage, Stem, best_life_stage,
    day_branch_index, day_stem_index,
};

use crate::chart_types::ChartPlate;

/// Gates that raise the Bath stage to +10 in a personal reading.
pub const PERSONAL_SOCIABLE_GATES: [Gate; 3] = [Gate::Rest, Gate::Life, Gate::Scene];

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(with = "dunjia_time::serde_civil")]
    pub birth_date: NaiveDateTime,
    /// Carried for display; the day pillar uses the civil date only.
    #[serde(default)]
    pub birth_lat: Option<f64>,
    #[serde(default)]
    pub birth_lng: Option<f64>,
}

impl UserProfile {
    /// Birth coordinate when both halves are present.
    pub fn birth_location(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            lat: self.birth_lat?,
            lng: self.birth_lng?,
        })
    }
}

/// Fixed day pillar for a specific birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthOverride {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub stem: Stem,
    pub branch: Branch,
}

/// Birth dates whose day pillar is fixed rather than counted.
pub const BIRTH_OVERRIDES: [BirthOverride; 2] = [
    BirthOverride {
        year: 1972,
        month: 3,
        day: 25,
        stem: Stem::Yi,
        branch: Branch::Hai,
    },
    BirthOverride {
        year: 1993,
        month: 4,
        day: 14,
        stem: Stem::Jia,
        branch: Branch::Yin,
    },
];

/// Override entry for a civil date, if any.
pub fn birth_override(date: NaiveDate) -> Option<&'static BirthOverride> {
    BIRTH_OVERRIDES
        .iter()
        .find(|o| o.year == date.year() && o.month == date.month() && o.day == date.day())
}

/// Whose stem a reading is for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Subject {
    Guest,
    User { name: String },
}

impl Subject {
    /// Label in the form `"Guest Mode (Jia)"` or `"User: Kim (Jia)"`.
    pub fn summary(&self, stem: Stem) -> String {
        match self {
            Self::Guest => format!("Guest Mode ({})", stem.name()),
            Self::User { name } if name.trim().is_empty() => format!("User: User ({})", stem.name()),
            Self::User { name } => format!("User: {name} ({})", stem.name()),
        }
    }
}

/// Subject day stem and branch.
pub fn subject_day_pillar(user: Option<&UserProfile>, solar_now: &NaiveDateTime) -> (Stem, Branch) {
    match user {
        Some(profile) => match birth_override(profile.birth_date.date()) {
            Some(o) => (o.stem, o.branch),
            None => (
                Stem::from_index(day_stem_index(&profile.birth_date)),
                Branch::from_index(day_branch_index(&profile.birth_date)),
            ),
        },
        None => (
            Stem::from_index(day_stem_index(solar_now)),
            Branch::from_index(day_branch_index(solar_now)),
        ),
    }
}

/// Personal life-cycle value for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalScore {
    pub direction: Direction,
    pub stage: LifeStage,
    pub score: i32,
}

/// Personal overlay for all eight directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalReading {
    pub subject: Subject,
    pub day_stem: Stem,
    pub day_branch: Branch,
    pub summary: String,
    pub scores: [PersonalScore; 8],
}

impl PersonalReading {
    pub fn get(&self, direction: Direction) -> &PersonalScore {
        &self.scores[direction.index() as usize]
    }
}

/// Life-cycle score of `stem` for one palace, with the Bath stage boosted
/// when `gate` is sociable.
pub fn personal_score(stem: Stem, direction: Direction, gate: Gate) -> PersonalScore {
    let boost = PERSONAL_SOCIABLE_GATES.contains(&gate);
    let (stage, score) = best_life_stage(stem, direction.branches(), boost)
        .unwrap_or((LifeStage::Decline, 0));
    PersonalScore {
        direction,
        stage,
        score,
    }
}

/// Build the personal reading against the current plate.
pub fn personal_reading(
    user: Option<&UserProfile>,
    solar_now: &NaiveDateTime,
    plate: &ChartPlate,
) -> PersonalReading {
    let (day_stem, day_branch) = subject_day_pillar(user, solar_now);
    let subject = match user {
        Some(profile) => Subject::User {
            name: profile.name.clone(),
        },
        None => Subject::Guest,
    };
    let scores = ALL_DIRECTIONS.map(|d| personal_score(day_stem, d, plate.cell(d).gate));
    PersonalReading {
        summary: subject.summary(day_stem),
        subject,
        day_stem,
        day_branch,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dunjia_time::parse_civil;

    fn profile(name: &str, birth: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            birth_date: parse_civil(birth).unwrap(),
            birth_lat: None,
            birth_lng: None,
        }
    }

    #[test]
    fn overrides_replace_counted_pillar() {
        let now = parse_civil("2024-06-01T12:00:00").unwrap();
        let a = profile("A", "1972-03-25T08:00:00");
        assert_eq!(subject_day_pillar(Some(&a), &now), (Stem::Yi, Branch::Hai));
        let b = profile("B", "1993-04-14");
        assert_eq!(subject_day_pillar(Some(&b), &now), (Stem::Jia, Branch::Yin));
    }

    #[test]
    fn ordinary_birth_dates_are_counted() {
        let now = parse_civil("2024-06-01T12:00:00").unwrap();
        // 2024-01-11 is ten days after the epoch: Jia + 10 = Jia, Zi + 10 = Xu
        let u = profile("C", "2024-01-11T09:00:00");
        assert_eq!(subject_day_pillar(Some(&u), &now), (Stem::Jia, Branch::Xu));
    }

    #[test]
    fn guest_uses_current_time() {
        let now = parse_civil("2024-01-02T10:00:00").unwrap();
        assert_eq!(subject_day_pillar(None, &now), (Stem::Yi, Branch::Chou));
    }

    #[test]
    fn summaries() {
        assert_eq!(Subject::Guest.summary(Stem::Jia), "Guest Mode (Jia)");
        let user = Subject::User {
            name: "Mina".into(),
        };
        assert_eq!(user.summary(Stem::Geng), "User: Mina (Geng)");
        let blank = Subject::User { name: " ".into() };
        assert_eq!(blank.summary(Stem::Gui), "User: User (Gui)");
    }

    #[test]
    fn bath_boost_uses_personal_set() {
        // Jia (anchor Hai) is at Bath in Zi. Life is sociable here but not
        // when scoring; Open is the reverse.
        let plain = personal_score(Stem::Jia, Direction::N, Gate::Open);
        let boosted = personal_score(Stem::Jia, Direction::N, Gate::Life);
        assert_eq!(plain.stage, LifeStage::Bath);
        assert_eq!(plain.score, 5);
        assert_eq!(boosted.score, 10);
    }

    #[test]
    fn profile_reads_flat_birth_coordinates() {
        let json = r#"{"name":"Jun","birthDate":"1993-04-14","birthLat":37.5,"birthLng":127.0}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Jun");
        assert_eq!(
            p.birth_location(),
            Some(GeoPoint {
                lat: 37.5,
                lng: 127.0
            })
        );
    }

    #[test]
    fn profile_without_coordinates() {
        let json = r#"{"name":"Jun","birthDate":"1993-04-14T09:30:00+09:00","birthLat":37.5}"#;
        let p: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.birth_lng, None);
        assert_eq!(p.birth_location(), None);
        assert_eq!(subject_day_pillar(Some(&p), &p.birth_date), (Stem::Jia, Branch::Yin));
    }

    #[test]
    fn profile_serializes_flat_keys() {
        let mut p = profile("Jun", "1993-04-14");
        p.birth_lat = Some(37.5);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains(r#""birthLat":37.5"#), "{json}");
        assert!(json.contains(r#""birthLng":null"#), "{json}");
    }
}
