pub const ROI_FLOOR_PCT: f64 = -100.0;
pub const ROI_CEILING_PCT: f64 = 500.0;
pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 10.0;

/// Saturating map of an ROI percentage onto the 1..=10 preference scale,
/// rounded to one decimal place.
pub fn normalize_roi(roi: f64) -> f64 {
    let clamped = roi.clamp(ROI_FLOOR_PCT, ROI_CEILING_PCT);
    let scaled = (clamped - ROI_FLOOR_PCT) / (ROI_CEILING_PCT - ROI_FLOOR_PCT)
        * (SCALE_MAX - SCALE_MIN)
        + SCALE_MIN;
    round_tenths(scaled)
}

/// Half away from zero at the tenths digit.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use crate::metrics::normalize::{normalize_roi, round_tenths};

    #[test]
    fn endpoints_map_to_scale_bounds() {
        assert_eq!(normalize_roi(-100.0), 1.0);
        assert_eq!(normalize_roi(500.0), 10.0);
    }

    #[test]
    fn saturates_outside_domain() {
        assert_eq!(normalize_roi(-1_000.0), normalize_roi(-100.0));
        assert_eq!(normalize_roi(10_000.0), normalize_roi(500.0));
        assert_eq!(normalize_roi(f64::MAX), 10.0);
        assert_eq!(normalize_roi(f64::MIN), 1.0);
    }

    #[test]
    fn interior_points() {
        assert_eq!(normalize_roi(0.0), 2.5);
        assert_eq!(normalize_roi(200.0), 5.5);
        assert_eq!(normalize_roi(400.0), 8.5);
        // 4.75 rounds away from zero
        assert_eq!(normalize_roi(150.0), 4.8);
    }

    #[test]
    fn monotone_non_decreasing() {
        let mut previous = normalize_roi(-250.0);
        let mut roi = -250.0;
        while roi <= 750.0 {
            let current = normalize_roi(roi);
            assert!(current >= previous, "dropped at roi {roi}");
            assert!((1.0..=10.0).contains(&current));
            previous = current;
            roi += 0.5;
        }
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_tenths(4.75), 4.8);
        assert_eq!(round_tenths(-4.75), -4.8);
        assert_eq!(round_tenths(4.74), 4.7);
    }
}
