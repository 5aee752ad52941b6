use crate::controllers::playback::data::chart_data::{ChartData, ControlsView, StatTarget};

pub trait PlaybackPresenterPort {
    fn render_chart(&mut self, chart: &ChartData);
    fn render_text(&mut self, target: StatTarget, value: f64, decimals: usize, suffix: &str);
    fn render_controls(&mut self, controls: ControlsView);
}
