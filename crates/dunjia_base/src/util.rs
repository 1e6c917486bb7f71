//! Angle and score helpers shared by the plate tables.

/// Wrap a bearing into [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Whether `deg` lies in the half-open arc `[start, end)`, walking clockwise.
///
/// Arcs with `start > end` wrap through north.
pub fn in_arc(deg: f64, start: f64, end: f64) -> bool {
    let d = normalize_360(deg);
    if start <= end {
        d >= start && d < end
    } else {
        d >= start || d < end
    }
}

/// Clamp a score to the 0..=100 band.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_full_turns() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(725.5) - 5.5).abs() < 1e-10);
    }

    #[test]
    fn wraps_negative() {
        assert!((normalize_360(-8.5) - 351.5).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn arc_plain() {
        assert!(in_arc(45.0, 37.5, 52.5));
        assert!(in_arc(37.5, 37.5, 52.5));
        assert!(!in_arc(52.5, 37.5, 52.5));
    }

    #[test]
    fn arc_through_north() {
        assert!(in_arc(0.0, 352.5, 7.5));
        assert!(in_arc(359.9, 352.5, 7.5));
        assert!(in_arc(-1.0, 352.5, 7.5));
        assert!(!in_arc(7.5, 352.5, 7.5));
    }

    #[test]
    fn clamp_band() {
        assert_eq!(clamp_score(-3.0), 0.0);
        assert_eq!(clamp_score(140.0), 100.0);
        assert_eq!(clamp_score(42.5), 42.5);
    }
}
