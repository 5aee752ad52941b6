use crate::core::data::interval::Interval;

/// Intervals present at one construction level, left to right.
pub type IterationSet = Vec<Interval>;

/// Every level of the construction, computed once and read-only afterwards.
///
/// Level 0 holds the seed interval; level `i + 1` holds twice as many
/// intervals as level `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionHistory {
    levels: Vec<IterationSet>,
}

impl ConstructionHistory {
    pub(crate) fn from_levels(levels: Vec<IterationSet>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn level(&self, index: usize) -> Option<&IterationSet> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn levels(&self) -> &[IterationSet] {
        &self.levels
    }

    #[must_use]
    pub fn seed(&self) -> Option<Interval> {
        self.levels.first().and_then(|level| level.first()).copied()
    }
}
