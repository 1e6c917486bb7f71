//! Golden values for the true-solar-time correction.

use dunjia_time::{
    DEFAULT_TIMEZONE_OFFSET_HOURS, equation_of_time_min, parse_civil, true_solar_time,
};

#[test]
fn epoch_on_standard_meridian() {
    let t = parse_civil("2024-01-01T00:00:00").unwrap();
    let s = true_solar_time(t, 135.0, DEFAULT_TIMEZONE_OFFSET_HOURS);
    assert_eq!(s.longitude_correction_min, 0.0);
    // d = 1 => B = 360*(-80)/365 deg
    let b = (360.0_f64 * -80.0 / 365.0).to_radians();
    let expected = 9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();
    assert!((s.equation_of_time_min - expected).abs() < 1e-12);
    assert!(s.true_solar < t, "early January runs slow: {}", s.true_solar);
}

#[test]
fn seoul_noon_in_early_november() {
    // Equation of time peaks near +16 min in early November.
    let t = parse_civil("2024-11-03T12:00:00").unwrap();
    let s = true_solar_time(t, 126.978, 9);
    assert!(s.equation_of_time_min > 14.0, "eot {}", s.equation_of_time_min);
    let shift = (s.true_solar - t).num_seconds() as f64 / 60.0;
    assert!((shift - s.total_correction_min()).abs() < 1.0 / 60.0);
}

#[test]
fn equation_of_time_sign_changes_through_year() {
    // mid-February is strongly negative, early November strongly positive
    assert!(equation_of_time_min(45) < -10.0);
    assert!(equation_of_time_min(307) > 10.0);
}

#[test]
fn other_zones_use_their_own_meridian() {
    let t = parse_civil("2024-06-01T09:00:00").unwrap();
    // Beijing (UTC+8, meridian 120 E)
    let s = true_solar_time(t, 116.4074, 8);
    assert!((s.longitude_correction_min - (116.4074 - 120.0) * 4.0).abs() < 1e-9);
}

#[test]
fn correction_crosses_midnight() {
    let t = parse_civil("2024-02-10T00:10:00").unwrap();
    let s = true_solar_time(t, 126.978, 9);
    // -32 min longitude and about -14 min equation of time.
    assert_eq!(s.true_solar.format("%Y-%m-%d").to_string(), "2024-02-09");
}
