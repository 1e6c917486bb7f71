//! Golden calendar indices across the epoch and the 60-day cycle.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use dunjia_base::{
    ALL_DIRECTIONS, Branch, Stem, calendar_indices, day_branch_index, day_stem_index,
    mountain_for_heading, void_branches,
};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn epoch_day_is_jia_zi() {
    let c = calendar_indices(&at(2024, 1, 1, 0, 0));
    assert_eq!(c.day_stem(), Stem::Jia);
    assert_eq!(c.day_branch(), Branch::Zi);
    assert_eq!(c.clash_branch, 6);
    assert_eq!(c.void_branches, Some([0, 1]));
    assert_eq!(c.period, 0);
    assert_eq!(c.hour_stem(), Stem::Jia);
}

#[test]
fn day_indices_stay_in_range_and_repeat_every_sixty_days() {
    let start = at(2019, 3, 7, 14, 0);
    for n in 0..400 {
        let t = start + Duration::days(n);
        let stem = day_stem_index(&t);
        let branch = day_branch_index(&t);
        assert!(stem <= 9);
        assert!(branch <= 11);
        let later = t + Duration::days(60);
        assert_eq!(stem, day_stem_index(&later));
        assert_eq!(branch, day_branch_index(&later));
    }
}

#[test]
fn late_evening_shares_next_morning_day() {
    let evening = at(2024, 7, 14, 23, 30);
    let morning = at(2024, 7, 15, 0, 30);
    assert_eq!(day_stem_index(&evening), day_stem_index(&morning));
    assert_eq!(day_branch_index(&evening), day_branch_index(&morning));
    assert_ne!(day_stem_index(&at(2024, 7, 14, 22, 59)), day_stem_index(&evening));
}

#[test]
fn void_pairs_only_for_even_differences() {
    for diff in 0..12u8 {
        let v = void_branches(0, diff);
        if diff % 2 == 0 {
            assert_eq!(v, Some([diff, diff + 1]));
        } else {
            assert_eq!(v, None);
        }
    }
}

#[test]
fn produced_days_always_have_a_void_pair() {
    let start = at(2024, 1, 1, 12, 0);
    for n in -120..120 {
        let c = calendar_indices(&(start + Duration::days(n)));
        let pair = c.void_branches.unwrap();
        let owners = ALL_DIRECTIONS
            .iter()
            .filter(|d| pair.iter().any(|&b| d.contains_branch(b)))
            .count();
        assert!((1..=2).contains(&owners));
    }
}

#[test]
fn facing_sectors_wrap_at_north() {
    assert_eq!(mountain_for_heading(0.0).label, "Zi");
    assert_eq!(mountain_for_heading(359.0).label, "Zi");
    assert_eq!(mountain_for_heading(360.0).label, "Zi");
}
