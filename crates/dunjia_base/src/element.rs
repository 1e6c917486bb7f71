//! The five elements and their production/destruction cycles.
//!
//! Order: Wood → Fire → Earth → Metal → Water → Wood (production).
//! Destruction skips one step: Wood→Earth, Fire→Metal, Earth→Water,
//! Metal→Wood, Water→Fire.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in production order (0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based index in production order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a production-order index, wrapping modulo 5.
    pub const fn from_index(idx: u8) -> Self {
        ALL_ELEMENTS[(idx % 5) as usize]
    }

    /// The element this one produces.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one destroys.
    pub const fn destroys(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// How an object element stands relative to a subject element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Subject produces object.
    Generates,
    /// Subject destroys object.
    Destroys,
    /// Object destroys subject.
    DestroyedBy,
    /// Object produces subject.
    GeneratedBy,
}

impl ElementRelation {
    /// Steps from subject to object along the production order (0..4).
    pub const fn distance(self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Generates => 1,
            Self::Destroys => 2,
            Self::DestroyedBy => 3,
            Self::GeneratedBy => 4,
        }
    }
}

/// Relation of `object` as seen from `subject`.
///
/// Uses `(object − subject + 5) mod 5` over the production order.
pub const fn relation(subject: Element, object: Element) -> ElementRelation {
    match (object.index() + 5 - subject.index()) % 5 {
        0 => ElementRelation::Same,
        1 => ElementRelation::Generates,
        2 => ElementRelation::Destroys,
        3 => ElementRelation::DestroyedBy,
        _ => ElementRelation::GeneratedBy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn destruction_table() {
        assert_eq!(Element::Wood.destroys(), Element::Earth);
        assert_eq!(Element::Fire.destroys(), Element::Metal);
        assert_eq!(Element::Metal.destroys(), Element::Wood);
        assert_eq!(Element::Water.destroys(), Element::Fire);
        assert_eq!(Element::Earth.destroys(), Element::Water);
    }

    #[test]
    fn relation_covers_every_pair_once() {
        for s in ALL_ELEMENTS {
            for o in ALL_ELEMENTS {
                let r = relation(s, o);
                match r {
                    ElementRelation::Same => assert_eq!(s, o),
                    ElementRelation::Generates => assert_eq!(s.generates(), o),
                    ElementRelation::Destroys => assert_eq!(s.destroys(), o),
                    ElementRelation::DestroyedBy => assert_eq!(o.destroys(), s),
                    ElementRelation::GeneratedBy => assert_eq!(o.generates(), s),
                }
            }
        }
    }

    #[test]
    fn relation_distance_matches_index_arithmetic() {
        for s in ALL_ELEMENTS {
            for o in ALL_ELEMENTS {
                let d = (o.index() + 5 - s.index()) % 5;
                assert_eq!(relation(s, o).distance(), d);
            }
        }
    }
}
