use std::error::Error;
use std::fmt;

use crate::core::data::construction_history::{ConstructionHistory, IterationSet};
use crate::core::data::interval::Interval;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenerateConstructionError {
    ZeroDepth,
}

impl fmt::Display for GenerateConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDepth => write!(f, "construction depth must be greater than zero"),
        }
    }
}

impl Error for GenerateConstructionError {}

/// Applies one step of the middle-thirds recurrence to a whole level.
///
/// Each interval contributes its left third then its right third, so the
/// output preserves the left-to-right order of the input.
#[must_use]
pub fn subdivide(level: &IterationSet) -> IterationSet {
    let mut next = Vec::with_capacity(level.len() * 2);

    for interval in level {
        let (left, right) = interval.split_thirds();
        next.push(left);
        next.push(right);
    }

    next
}

/// Builds `depth` levels of the construction starting from `initial`.
///
/// Every level is derived from the previous one only; rounding error is
/// allowed to accumulate and is never corrected against the seed.
pub fn generate_construction(
    initial: Interval,
    depth: u32,
) -> Result<ConstructionHistory, GenerateConstructionError> {
    if depth == 0 {
        return Err(GenerateConstructionError::ZeroDepth);
    }

    let mut levels: Vec<IterationSet> = Vec::with_capacity(depth as usize);
    levels.push(vec![initial]);

    for _ in 1..depth {
        let next = match levels.last() {
            Some(previous) => subdivide(previous),
            None => break,
        };
        levels.push(next);
    }

    Ok(ConstructionHistory::from_levels(levels))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn assert_interval(actual: &Interval, start: f64, end: f64) {
        assert!(
            (actual.start() - start).abs() < TOLERANCE && (actual.end() - end).abs() < TOLERANCE,
            "expected [{}, {}], got [{}, {}]",
            start,
            end,
            actual.start(),
            actual.end()
        );
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        assert_eq!(
            generate_construction(Interval::UNIT, 0),
            Err(GenerateConstructionError::ZeroDepth)
        );
    }

    #[test]
    fn test_depth_one_holds_only_the_seed() {
        let history = generate_construction(Interval::UNIT, 1).unwrap();

        assert_eq!(history.depth(), 1);
        assert_eq!(history.level(0), Some(&vec![Interval::UNIT]));
    }

    #[test]
    fn test_returns_exactly_depth_levels() {
        for depth in 1..=12 {
            let history = generate_construction(Interval::UNIT, depth).unwrap();
            assert_eq!(history.depth(), depth as usize);
        }
    }

    #[test]
    fn test_depth_three_matches_known_construction() {
        let history = generate_construction(Interval::UNIT, 3).unwrap();

        let level_0 = history.level(0).unwrap();
        assert_eq!(level_0.len(), 1);
        assert_interval(&level_0[0], 0.0, 1.0);

        let level_1 = history.level(1).unwrap();
        assert_eq!(level_1.len(), 2);
        assert_interval(&level_1[0], 0.0, 1.0 / 3.0);
        assert_interval(&level_1[1], 2.0 / 3.0, 1.0);

        let level_2 = history.level(2).unwrap();
        assert_eq!(level_2.len(), 4);
        assert_interval(&level_2[0], 0.0, 1.0 / 9.0);
        assert_interval(&level_2[1], 2.0 / 9.0, 1.0 / 3.0);
        assert_interval(&level_2[2], 2.0 / 3.0, 7.0 / 9.0);
        assert_interval(&level_2[3], 8.0 / 9.0, 1.0);
    }

    #[test]
    fn test_each_level_doubles_the_previous() {
        let history = generate_construction(Interval::UNIT, 10).unwrap();

        for pair in history.levels().windows(2) {
            assert_eq!(pair[1].len(), pair[0].len() * 2);
        }
    }

    #[test]
    fn test_levels_stay_ordered_and_disjoint() {
        let history = generate_construction(Interval::UNIT, 8).unwrap();

        for level in history.levels() {
            for pair in level.windows(2) {
                assert!(pair[0].end() < pair[1].start());
            }
        }
    }

    #[test]
    fn test_non_unit_seed_is_subdivided_in_place() {
        let seed = Interval::new(0.25, 0.55).unwrap();
        let history = generate_construction(seed, 2).unwrap();
        let level_1 = history.level(1).unwrap();

        assert_interval(&level_1[0], 0.25, 0.35);
        assert_interval(&level_1[1], 0.45, 0.55);
    }

    #[test]
    fn test_subdivide_empty_level_is_empty() {
        assert!(subdivide(&Vec::new()).is_empty());
    }
}
