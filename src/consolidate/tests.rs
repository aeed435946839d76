//! Test suite for range consolidation.

use super::*;

/// Helper to create intervals more concisely in tests.
fn iv(low: i64, high: i64) -> Interval {
    Interval::new(low, high)
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn test_empty_list_fails() {
        let result = consolidate(&[]);
        assert_eq!(
            result,
            Err(ConsolidateError::InvalidInput {
                violations: vec![Violation::Empty]
            })
        );
    }

    #[test]
    fn test_low_higher_than_high_fails() {
        let result = consolidate(&[iv(5, 2)]);
        assert_eq!(
            result,
            Err(ConsolidateError::InvalidInput {
                violations: vec![Violation::Inverted {
                    index: 0,
                    interval: iv(5, 2)
                }]
            })
        );
    }

    #[test]
    fn test_inverted_second_range_fails() {
        let err = consolidate(&[iv(1, 5), iv(3, 1)]).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::Inverted {
                index: 1,
                interval: iv(3, 1)
            }]
        );
    }

    #[test]
    fn test_every_invalid_range_is_reported() {
        let err = consolidate(&[iv(9, 0), iv(1, 2), iv(4, 3), iv(7, 6)]).unwrap_err();
        let indices: Vec<usize> = err
            .violations()
            .iter()
            .map(|v| match v {
                Violation::Inverted { index, .. } => *index,
                Violation::Empty => usize::MAX,
            })
            .collect();
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_error_message_names_bounds() {
        let err = consolidate(&[iv(5, 2)]).unwrap_err();
        assert!(err.to_string().contains("low value 5 cannot be > high value 2"));
    }
}

#[cfg(test)]
mod merging {
    use super::*;

    #[test]
    fn test_single_range_unchanged() {
        assert_eq!(consolidate(&[iv(4, 9)]).unwrap(), vec![iv(4, 9)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(consolidate(&[iv(1, 2), iv(1, 2)]).unwrap(), vec![iv(1, 2)]);
    }

    #[test]
    fn test_overlap_merges() {
        assert_eq!(consolidate(&[iv(1, 5), iv(2, 6)]).unwrap(), vec![iv(1, 6)]);
    }

    #[test]
    fn test_gap_keeps_ranges_apart() {
        assert_eq!(
            consolidate(&[iv(1, 5), iv(10, 15)]).unwrap(),
            vec![iv(1, 5), iv(10, 15)]
        );
    }

    #[test]
    fn test_gap_of_two_keeps_ranges_apart() {
        assert_eq!(
            consolidate(&[iv(1, 2), iv(4, 5)]).unwrap(),
            vec![iv(1, 2), iv(4, 5)]
        );
    }

    #[test]
    fn test_consecutive_bounds_merge() {
        assert_eq!(consolidate(&[iv(1, 2), iv(3, 5)]).unwrap(), vec![iv(1, 5)]);
    }

    #[test]
    fn test_touching_bounds_merge() {
        assert_eq!(consolidate(&[iv(1, 3), iv(3, 5)]).unwrap(), vec![iv(1, 5)]);
    }

    #[test]
    fn test_unsorted_input() {
        assert_eq!(consolidate(&[iv(3, 5), iv(1, 2)]).unwrap(), vec![iv(1, 5)]);
    }

    #[test]
    fn test_nested_ranges_collapse_to_outer() {
        assert_eq!(
            consolidate(&[iv(2, 3), iv(1, 10), iv(5, 6)]).unwrap(),
            vec![iv(1, 10)]
        );
    }

    #[test]
    fn test_nested_range_followed_by_gap() {
        assert_eq!(
            consolidate(&[iv(1, 10), iv(2, 3), iv(5, 6), iv(20, 25)]).unwrap(),
            vec![iv(1, 10), iv(20, 25)]
        );
    }

    #[test]
    fn test_zip_code_sample() {
        let input = [iv(94133, 94133), iv(94200, 94299), iv(94226, 94399)];
        assert_eq!(
            consolidate(&input).unwrap(),
            vec![iv(94133, 94133), iv(94200, 94399)]
        );
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(
            consolidate(&[iv(-10, -5), iv(-4, 0), iv(3, 3)]).unwrap(),
            vec![iv(-10, 0), iv(3, 3)]
        );
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        assert_eq!(
            consolidate(&[iv(i64::MAX, i64::MAX), iv(i64::MIN, i64::MIN)]).unwrap(),
            vec![iv(i64::MIN, i64::MIN), iv(i64::MAX, i64::MAX)]
        );
        assert_eq!(
            consolidate(&[iv(i64::MIN, 0), iv(1, i64::MAX)]).unwrap(),
            vec![iv(i64::MIN, i64::MAX)]
        );
    }
}

#[cfg(test)]
mod contract {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Builds `count` valid ranges with lows in `0..1000` and widths in `0..100`.
    fn random_ranges(rng: &mut StdRng, count: usize) -> Vec<Interval> {
        (0..count)
            .map(|_| {
                let low = rng.gen_range(0..1000);
                iv(low, low + rng.gen_range(0..100))
            })
            .collect()
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = vec![iv(3, 5), iv(1, 2)];
        let before = input.clone();
        consolidate(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn test_idempotent() {
        let once = consolidate(&[iv(8, 12), iv(1, 3), iv(2, 4), iv(20, 20)]).unwrap();
        let twice = consolidate(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_large_random_input() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let input = random_ranges(&mut rng, 1000);
        let merged = consolidate(&input).unwrap();

        assert!(assertions::is_consolidated(&merged));
        for value in 0..1100 {
            let covered_in = input.iter().any(|r| r.contains(value));
            let covered_out = merged.iter().any(|r| r.contains(value));
            assert_eq!(covered_in, covered_out, "coverage differs at {}", value);
        }
    }
}
