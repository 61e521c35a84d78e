pub const FULL_TURN: i64 = 360;

/// Maps any whole-degree angle into `[0, 360)`.
pub fn normalize(deg: i64) -> i64 {
    deg.rem_euclid(FULL_TURN)
}

/// Counter-clockwise distance from `from` to `to`, in `[0, 360)`.
pub fn ccw_distance(from: i64, to: i64) -> i64 {
    normalize(to - from)
}

pub fn to_radians(deg: i64) -> f64 {
    (deg as f64).to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_both_directions() {
        assert_eq!(normalize(455), 95);
        assert_eq!(normalize(360), 0);
        assert_eq!(normalize(-30), 330);
        assert_eq!(normalize(-720), 0);
        assert_eq!(normalize(-361), 359);
    }

    #[test]
    fn test_normalize_idempotent() {
        for deg in -1080..=1080 {
            let once = normalize(deg);
            assert!((0..FULL_TURN).contains(&once));
            assert_eq!(normalize(once), once);
        }
    }

    #[test]
    fn test_ccw_distance_across_zero() {
        assert_eq!(ccw_distance(335, 95), 120);
        assert_eq!(ccw_distance(155, 275), 120);
        assert_eq!(ccw_distance(10, 10), 0);
    }
}
