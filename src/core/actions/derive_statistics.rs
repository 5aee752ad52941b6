//! Per-level statistics of a construction history.
//!
//! All functions are pure lookups over an already generated history. Indices
//! are 0-based construction levels; an index past the generated depth yields
//! `None`.

use crate::core::data::construction_history::ConstructionHistory;

/// Theoretical Hausdorff dimension of the limiting Cantor set, `ln 2 / ln 3`.
///
/// Shown as a fixed reference next to the empirical growth curve.
#[must_use]
pub fn fractal_dimension() -> f64 {
    std::f64::consts::LN_2 / 3.0_f64.ln()
}

#[must_use]
pub fn segment_count(history: &ConstructionHistory, index: usize) -> Option<usize> {
    history.level(index).map(Vec::len)
}

#[must_use]
pub fn total_length(history: &ConstructionHistory, index: usize) -> Option<f64> {
    history
        .level(index)
        .map(|level| level.iter().map(|interval| interval.length()).sum())
}

#[must_use]
pub fn log_segment_count(history: &ConstructionHistory, index: usize) -> Option<f64> {
    segment_count(history, index).map(|count| (count as f64).ln())
}

/// Percentage of the original unit length still present at `index`.
#[must_use]
pub fn efficiency(history: &ConstructionHistory, index: usize) -> Option<f64> {
    total_length(history, index).map(|length| length * 100.0)
}

/// Snapshot of every statistic for one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStatistics {
    pub index: usize,
    pub segment_count: usize,
    pub total_length: f64,
    pub log_segment_count: f64,
    pub fractal_dimension: f64,
    pub efficiency: f64,
}

impl IterationStatistics {
    #[must_use]
    pub fn derive(history: &ConstructionHistory, index: usize) -> Option<Self> {
        let segment_count = segment_count(history, index)?;
        let total_length = total_length(history, index)?;

        Some(Self {
            index,
            segment_count,
            total_length,
            log_segment_count: (segment_count as f64).ln(),
            fractal_dimension: fractal_dimension(),
            efficiency: total_length * 100.0,
        })
    }
}

/// A single `(x, y)` sample of a chart series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// `(i, ln(segment count))` for every level in `0..upto`.
#[must_use]
pub fn growth_series(history: &ConstructionHistory, upto: usize) -> Vec<SeriesPoint> {
    (0..upto.min(history.depth()))
        .filter_map(|index| {
            log_segment_count(history, index).map(|y| SeriesPoint {
                x: index as f64,
                y,
            })
        })
        .collect()
}

/// `(i, total length)` for every level in `0..upto`.
#[must_use]
pub fn length_series(history: &ConstructionHistory, upto: usize) -> Vec<SeriesPoint> {
    (0..upto.min(history.depth()))
        .filter_map(|index| {
            total_length(history, index).map(|y| SeriesPoint {
                x: index as f64,
                y,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_construction::generate_construction;
    use crate::core::data::interval::Interval;

    const TOLERANCE: f64 = 1e-9;

    fn history(depth: u32) -> ConstructionHistory {
        generate_construction(Interval::UNIT, depth).unwrap()
    }

    #[test]
    fn test_segment_count_starts_at_one_and_doubles() {
        let history = history(10);

        assert_eq!(segment_count(&history, 0), Some(1));
        for index in 0..9 {
            assert_eq!(
                segment_count(&history, index + 1).unwrap(),
                2 * segment_count(&history, index).unwrap()
            );
        }
    }

    #[test]
    fn test_total_length_follows_two_thirds_power() {
        let history = history(12);

        for index in 0..12 {
            let expected = (2.0_f64 / 3.0).powi(index as i32);
            let actual = total_length(&history, index).unwrap();
            assert!(
                (actual - expected).abs() < TOLERANCE,
                "level {}: expected {}, got {}",
                index,
                expected,
                actual
            );
        }
    }

    #[test]
    fn test_log_segment_count_is_linear_in_level() {
        let history = history(12);

        for index in 0..12 {
            let expected = index as f64 * std::f64::consts::LN_2;
            let actual = log_segment_count(&history, index).unwrap();
            assert!((actual - expected).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_fractal_dimension_constant() {
        let dimension = fractal_dimension();

        assert!((dimension - 0.630_929_753_571_457_4).abs() < TOLERANCE);
        assert!((dimension - 2.0_f64.ln() / 3.0_f64.ln()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depth_three_statistics() {
        let history = history(3);

        assert_eq!(segment_count(&history, 2), Some(4));
        assert!((total_length(&history, 2).unwrap() - 4.0 / 9.0).abs() < TOLERANCE);
        assert!((efficiency(&history, 2).unwrap() - 44.444_444_444).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_lookups_are_none() {
        let history = history(3);

        assert_eq!(segment_count(&history, 3), None);
        assert_eq!(total_length(&history, 3), None);
        assert_eq!(log_segment_count(&history, 3), None);
        assert_eq!(efficiency(&history, 3), None);
        assert_eq!(IterationStatistics::derive(&history, 3), None);
    }

    #[test]
    fn test_derive_bundles_every_statistic() {
        let history = history(5);
        let stats = IterationStatistics::derive(&history, 4).unwrap();

        assert_eq!(stats.index, 4);
        assert_eq!(stats.segment_count, 16);
        assert!((stats.total_length - 16.0 / 81.0).abs() < TOLERANCE);
        assert!((stats.log_segment_count - 16.0_f64.ln()).abs() < TOLERANCE);
        assert!((stats.efficiency - stats.total_length * 100.0).abs() < TOLERANCE);
        assert_eq!(stats.fractal_dimension, fractal_dimension());
    }

    #[test]
    fn test_series_cover_requested_levels_only() {
        let history = history(8);

        let growth = growth_series(&history, 3);
        let length = length_series(&history, 3);

        assert_eq!(growth.len(), 3);
        assert_eq!(length.len(), 3);
        assert_eq!(growth[0], SeriesPoint { x: 0.0, y: 0.0 });
        assert_eq!(length[0], SeriesPoint { x: 0.0, y: 1.0 });
        assert!((growth[2].y - 4.0_f64.ln()).abs() < TOLERANCE);
    }

    #[test]
    fn test_series_are_capped_at_history_depth() {
        let history = history(4);

        assert_eq!(growth_series(&history, 20).len(), 4);
        assert_eq!(length_series(&history, 20).len(), 4);
    }
}
