//! The 24 mountains: fifteen-degree compass sectors used for facing.
//!
//! Twelve sectors carry a branch, eight a stem and four a trigram corner.
//! Zi straddles north (352.5°–7.5°).

use serde::Serialize;

use crate::cycle::Polarity;
use crate::element::Element;
use crate::util::{in_arc, normalize_360};

use Element::{Earth, Fire, Metal, Water, Wood};
use Polarity::{Yang, Yin};

/// One 15° sector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mountain {
    pub hanja: &'static str,
    /// Romanized label; branch sectors share the branch's name.
    pub label: &'static str,
    pub start_deg: f64,
    pub end_deg: f64,
    pub element: Element,
    pub polarity: Polarity,
}

const fn m(
    hanja: &'static str,
    label: &'static str,
    start_deg: f64,
    end_deg: f64,
    element: Element,
    polarity: Polarity,
) -> Mountain {
    Mountain {
        hanja,
        label,
        start_deg,
        end_deg,
        element,
        polarity,
    }
}

/// Sectors clockwise from Ren. Zi is at index 1.
pub const MOUNTAINS: [Mountain; 24] = [
    m("壬", "Ren", 337.5, 352.5, Water, Yang),
    m("子", "Zi", 352.5, 7.5, Water, Yin),
    m("癸", "Gui", 7.5, 22.5, Water, Yin),
    m("丑", "Chou", 22.5, 37.5, Earth, Yin),
    m("艮", "Gan", 37.5, 52.5, Earth, Yang),
    m("寅", "Yin", 52.5, 67.5, Wood, Yang),
    m("甲", "Jia", 67.5, 82.5, Wood, Yang),
    m("卯", "Mao", 82.5, 97.5, Wood, Yin),
    m("乙", "Yi", 97.5, 112.5, Wood, Yin),
    m("辰", "Chen", 112.5, 127.5, Earth, Yang),
    m("巽", "Xun", 127.5, 142.5, Wood, Yin),
    m("巳", "Si", 142.5, 157.5, Fire, Yang),
    m("丙", "Bing", 157.5, 172.5, Fire, Yang),
    m("午", "Wu", 172.5, 187.5, Fire, Yin),
    m("丁", "Ding", 187.5, 202.5, Fire, Yin),
    m("未", "Wei", 202.5, 217.5, Earth, Yin),
    m("坤", "Kun", 217.5, 232.5, Earth, Yang),
    m("申", "Shen", 232.5, 247.5, Metal, Yang),
    m("庚", "Geng", 247.5, 262.5, Metal, Yang),
    m("酉", "You", 262.5, 277.5, Metal, Yin),
    m("辛", "Xin", 277.5, 292.5, Metal, Yin),
    m("戌", "Xu", 292.5, 307.5, Earth, Yang),
    m("乾", "Qian", 307.5, 322.5, Metal, Yang),
    m("亥", "Hai", 322.5, 337.5, Water, Yin),
];

const ZI: usize = 1;

/// Sector containing a heading (any real value; normalized to [0, 360)).
pub fn mountain_for_heading(heading_deg: f64) -> &'static Mountain {
    let h = normalize_360(heading_deg);
    if h >= 352.5 || h < 7.5 {
        return &MOUNTAINS[ZI];
    }
    MOUNTAINS
        .iter()
        .find(|mt| in_arc(h, mt.start_deg, mt.end_deg))
        .unwrap_or(&MOUNTAINS[0])
}

/// Sector labelled with a branch (or stem/corner) name.
pub fn mountain_by_label(label: &str) -> Option<&'static Mountain> {
    MOUNTAINS.iter().find(|mt| mt.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectors_tile_the_circle() {
        for (i, mt) in MOUNTAINS.iter().enumerate() {
            let next = &MOUNTAINS[(i + 1) % 24];
            assert_eq!(mt.end_deg, next.start_deg, "{} -> {}", mt.label, next.label);
            let span = normalize_360(mt.end_deg - mt.start_deg);
            assert!((span - 15.0).abs() < 1e-12, "{}", mt.label);
        }
    }

    #[test]
    fn north_wraps_to_zi() {
        assert_eq!(mountain_for_heading(0.0).label, "Zi");
        assert_eq!(mountain_for_heading(359.0).label, "Zi");
        assert_eq!(mountain_for_heading(352.5).label, "Zi");
        assert_eq!(mountain_for_heading(7.4).label, "Zi");
        assert_eq!(mountain_for_heading(-1.0).label, "Zi");
    }

    #[test]
    fn boundaries_belong_to_the_later_sector() {
        assert_eq!(mountain_for_heading(7.5).label, "Gui");
        assert_eq!(mountain_for_heading(337.5).label, "Ren");
        assert_eq!(mountain_for_heading(180.0).label, "Wu");
        assert_eq!(mountain_for_heading(45.0).label, "Gan");
    }

    #[test]
    fn branch_labels_resolve() {
        assert_eq!(mountain_by_label("Wu").map(|mt| mt.element), Some(Fire));
        assert_eq!(mountain_by_label("Hai").map(|mt| mt.hanja), Some("亥"));
        assert!(mountain_by_label("Nowhere").is_none());
    }

    #[test]
    fn every_branch_has_a_sector() {
        for b in crate::cycle::ALL_BRANCHES {
            assert!(mountain_by_label(b.name()).is_some(), "{}", b.name());
        }
    }
}
