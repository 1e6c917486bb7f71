//! Heavenly stems (10) and earthly branches (12).
//!
//! A stem and a branch advancing together form the 60-position compound
//! cycle; position `p` pairs stem `p mod 10` with branch `p mod 12`.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// Romanized name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Hanja glyph.
    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at an index, wrapping modulo 10.
    pub const fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Even-indexed stems are yang, odd-indexed are yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Element: consecutive pairs share one (Jia/Yi Wood .. Ren/Gui Water).
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Look up a stem by romanized name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        ALL_STEMS
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// The 12 earthly branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl Branch {
    /// Romanized name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Hanja glyph.
    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at an index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// The branch six places away on the 12-slot wheel.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 6)
    }

    /// Look up a branch by romanized name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Position (0..59) in the compound cycle for a stem/branch pair.
///
/// Returns `None` for pairs of mixed parity, which never occur together.
pub fn sexagenary_position(stem: Stem, branch: Branch) -> Option<u8> {
    (0..60u8).find(|p| p % 10 == stem.index() && p % 12 == branch.index())
}

/// Display label for a stem/branch pair, e.g. `"Jia-Zi"`.
pub fn pillar_name(stem: Stem, branch: Branch) -> String {
    format!("{}-{}", stem.name(), branch.name())
}
