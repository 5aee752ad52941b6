use std::collections::HashMap;
use std::time::Duration;

use crate::controllers::playback::{
    ChartData, ControlsView, PlaybackPresenterPort, StatTarget, format_stat,
};
use crate::presenters::tween::NumberTween;

#[derive(Debug, Clone)]
struct StatDisplay {
    tween: NumberTween,
    decimals: usize,
    suffix: String,
}

/// Retained view state for an immediate-mode window: the latest chart, the
/// easing statistic values and the control states.
#[derive(Debug, Default)]
pub struct PanelPresenter {
    chart: Option<ChartData>,
    stats: HashMap<StatTarget, StatDisplay>,
    controls: Option<ControlsView>,
    chart_dirty: bool,
}

impl PanelPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn chart(&self) -> Option<&ChartData> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn controls(&self) -> Option<ControlsView> {
        self.controls
    }

    /// Returns true once after every new chart.
    pub fn take_chart_dirty(&mut self) -> bool {
        std::mem::take(&mut self.chart_dirty)
    }

    /// Forces a redraw of the current chart, e.g. after a resize.
    pub fn mark_chart_dirty(&mut self) {
        self.chart_dirty = self.chart.is_some();
    }

    /// Currently shown text for a statistic, mid-tween values included.
    #[must_use]
    pub fn stat_text(&self, target: StatTarget) -> Option<String> {
        self.stats
            .get(&target)
            .map(|stat| format_stat(stat.tween.shown(), stat.decimals, &stat.suffix))
    }

    #[must_use]
    pub fn is_animating_stats(&self) -> bool {
        self.stats.values().any(|stat| !stat.tween.is_settled())
    }

    /// Returns whether any shown value changed.
    pub fn advance_stats(&mut self, elapsed: Duration) -> bool {
        let mut changed = false;
        for stat in self.stats.values_mut() {
            changed |= stat.tween.advance(elapsed);
        }
        changed
    }
}

impl PlaybackPresenterPort for PanelPresenter {
    fn render_chart(&mut self, chart: &ChartData) {
        self.chart = Some(chart.clone());
        self.chart_dirty = true;
    }

    fn render_text(&mut self, target: StatTarget, value: f64, decimals: usize, suffix: &str) {
        self.stats
            .entry(target)
            .and_modify(|stat| {
                stat.tween.retarget(value);
                stat.decimals = decimals;
                suffix.clone_into(&mut stat.suffix);
            })
            .or_insert(StatDisplay {
                tween: NumberTween::new(value),
                decimals,
                suffix: suffix.to_string(),
            });
    }

    fn render_controls(&mut self, controls: ControlsView) {
        self.controls = Some(controls);
    }
}
