//! Criteria aggregation.
//!
//! The band score is the mean of the four rubric criteria, truncated toward
//! zero. Absent criteria count as zero and no range check is applied, so
//! out-of-scale inputs flow straight through to the feedback lookup.

use bandwise_types::evaluation::Criteria;

/// Number of rubric criteria averaged into a band score.
pub const CRITERIA_COUNT: f64 = 4.0;

/// Compute the band score for a set of criteria.
///
/// Conversion to `i64` saturates for values beyond the integer range.
pub fn band_score(criteria: &Criteria) -> i64 {
    (criteria.total() / CRITERIA_COUNT).trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_mean() {
        assert_eq!(band_score(&Criteria::new(8.0, 7.0, 6.0, 7.0)), 7);
    }

    #[test]
    fn fractional_mean_truncates() {
        // 27 / 4 = 6.75
        assert_eq!(band_score(&Criteria::new(7.0, 7.0, 7.0, 6.0)), 6);
        // 4.5 / 4 = 1.125
        assert_eq!(band_score(&Criteria::new(4.5, 0.0, 0.0, 0.0)), 1);
    }

    #[test]
    fn missing_criteria_count_as_zero() {
        let c = Criteria {
            task_achievement: Some(8.0),
            coherence: Some(8.0),
            ..Criteria::default()
        };
        assert_eq!(band_score(&c), 4);
        assert_eq!(band_score(&Criteria::default()), 0);
    }

    #[test]
    fn negative_truncates_toward_zero() {
        // -6 / 4 = -1.5
        assert_eq!(band_score(&Criteria::new(-6.0, 0.0, 0.0, 0.0)), -1);
        assert_eq!(band_score(&Criteria::new(-1.0, -1.0, -1.0, -1.0)), -1);
    }

    #[test]
    fn out_of_scale_values_pass_through() {
        assert_eq!(band_score(&Criteria::new(10.0, 10.0, 10.0, 10.0)), 10);
        assert_eq!(band_score(&Criteria::new(400.0, 0.0, 0.0, 0.0)), 100);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(band_score(&Criteria::new(f64::MAX, 0.0, 0.0, 0.0)), i64::MAX);
    }

    #[test]
    fn matches_floor_of_mean_for_non_negative_integers() {
        for a in 0..=9 {
            for b in [0, 4, 9] {
                let c = Criteria::new(a as f64, b as f64, 5.0, 6.0);
                assert_eq!(band_score(&c), (a + b + 5 + 6) / 4);
            }
        }
    }
}
