use crate::core::actions::derive_statistics::{IterationStatistics, SeriesPoint};
use crate::core::cantor::shapes::ConstructionShape;

/// Everything the three charts need for one rendered iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub max_iterations: usize,
    pub construction: Vec<ConstructionShape>,
    pub growth: Vec<SeriesPoint>,
    pub length: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatTarget {
    SegmentCount,
    TotalLength,
    FractalDimension,
    Efficiency,
}

impl StatTarget {
    pub const ALL: &'static [Self] = &[
        Self::SegmentCount,
        Self::TotalLength,
        Self::FractalDimension,
        Self::Efficiency,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SegmentCount => "Segments",
            Self::TotalLength => "Total length",
            Self::FractalDimension => "Fractal dimension",
            Self::Efficiency => "Remaining",
        }
    }

    #[must_use]
    pub const fn decimals(self) -> usize {
        match self {
            Self::SegmentCount => 0,
            Self::TotalLength | Self::FractalDimension => 3,
            Self::Efficiency => 1,
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Efficiency => "%",
            _ => "",
        }
    }

    #[must_use]
    pub fn value(self, stats: &IterationStatistics) -> f64 {
        match self {
            Self::SegmentCount => stats.segment_count as f64,
            Self::TotalLength => stats.total_length,
            Self::FractalDimension => stats.fractal_dimension,
            Self::Efficiency => stats.efficiency,
        }
    }
}

/// Formats a statistic the way every presenter shows it.
#[must_use]
pub fn format_stat(value: f64, decimals: usize, suffix: &str) -> String {
    format!("{:.*}{}", decimals, value, suffix)
}

/// State of the on-screen controls after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsView {
    pub iteration: usize,
    pub max_iterations: usize,
    pub selection_enabled: bool,
    pub animating: bool,
    pub speed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimals_match_stat_panel() {
        assert_eq!(StatTarget::SegmentCount.decimals(), 0);
        assert_eq!(StatTarget::TotalLength.decimals(), 3);
        assert_eq!(StatTarget::FractalDimension.decimals(), 3);
        assert_eq!(StatTarget::Efficiency.decimals(), 1);
    }

    #[test]
    fn test_only_efficiency_has_a_suffix() {
        for &target in StatTarget::ALL {
            let expected = if target == StatTarget::Efficiency { "%" } else { "" };
            assert_eq!(target.suffix(), expected);
        }
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(4.0, 0, ""), "4");
        assert_eq!(format_stat(0.444_444, 3, ""), "0.444");
        assert_eq!(format_stat(44.444_4, 1, "%"), "44.4%");
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: Vec<&str> = StatTarget::ALL.iter().map(|t| t.label()).collect();
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label), "duplicate label {}", label);
        }
    }
}
