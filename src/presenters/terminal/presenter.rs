use std::io::Write;

use tracing::warn;

use crate::controllers::playback::{
    ChartData, ControlsView, PlaybackPresenterPort, StatTarget, format_stat,
};
use crate::core::cantor::shapes::ConstructionShape;

const FILLED: char = '█';
const EMPTY: char = ' ';

/// Draws each rendered iteration as rows of block characters.
pub struct TerminalPresenter<W: Write> {
    out: W,
    columns: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, columns: usize) -> Self {
        Self {
            out,
            columns: columns.max(1),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!(error = %err, "terminal write failed");
        }
    }
}

/// One text row per shown level; every interval marks at least one cell.
#[must_use]
pub fn construction_rows(shapes: &[ConstructionShape], columns: usize) -> Vec<String> {
    let levels = shapes.iter().map(|shape| shape.level + 1).max().unwrap_or(0);
    let mut rows = vec![vec![EMPTY; columns]; levels];

    for shape in shapes {
        let row = &mut rows[shape.level];
        let first = (shape.interval.start() * columns as f64).round() as usize;
        let last = (shape.interval.end() * columns as f64).round() as usize;
        let first = first.min(columns.saturating_sub(1));
        let last = last.clamp(first + 1, columns);

        for cell in &mut row[first..last] {
            *cell = FILLED;
        }
    }

    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

impl<W: Write> PlaybackPresenterPort for TerminalPresenter<W> {
    fn render_chart(&mut self, chart: &ChartData) {
        let mut text = format!("\n{}\n", chart.title);

        for (level, row) in construction_rows(&chart.construction, self.columns)
            .iter()
            .enumerate()
        {
            text.push_str(&format!("{:>2} |{}|\n", level, row));
        }

        if let (Some(growth), Some(length)) = (chart.growth.last(), chart.length.last()) {
            text.push_str(&format!(
                "   ln(segments) = {:.3}   total length = {:.6}\n",
                growth.y, length.y
            ));
        }

        self.emit(&text);
    }

    fn render_text(&mut self, target: StatTarget, value: f64, decimals: usize, suffix: &str) {
        let line = format!(
            "   {:<18}{}\n",
            format!("{}:", target.label()),
            format_stat(value, decimals, suffix)
        );
        self.emit(&line);
    }

    fn render_controls(&mut self, controls: ControlsView) {
        let status = if controls.animating { "playing" } else { "paused" };
        let line = format!(
            "   [{}/{}] {} at speed {}\n",
            controls.iteration, controls.max_iterations, status, controls.speed
        );
        self.emit(&line);
    }
}
