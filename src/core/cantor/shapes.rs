//! Geometry of the construction view.
//!
//! Level `i` is drawn as a row of rectangles centred at
//! `y = max_iterations - i - 1`, so level 0 sits on top.

use crate::core::cantor::colour_scale::level_colour;
use crate::core::data::colour::Colour;
use crate::core::data::construction_history::ConstructionHistory;
use crate::core::data::interval::Interval;

pub const ROW_HALF_HEIGHT: f64 = 0.35;
pub const SHAPE_OPACITY: f64 = 0.8;
pub const X_AXIS_RANGE: (f64, f64) = (-0.05, 1.05);

#[must_use]
pub fn y_axis_range(max_iterations: usize) -> (f64, f64) {
    (-0.5, max_iterations as f64 - 0.5)
}

/// One filled rectangle of the construction view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionShape {
    pub level: usize,
    pub interval: Interval,
    pub row_y: f64,
    pub colour: Colour,
}

impl ConstructionShape {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.row_y - ROW_HALF_HEIGHT
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.row_y + ROW_HALF_HEIGHT
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.interval.start()
            && x <= self.interval.end()
            && y >= self.bottom()
            && y <= self.top()
    }

    #[must_use]
    pub fn hover_label(&self) -> String {
        format!(
            "Iteration: {}\nSegment: [{:.4}, {:.4}]\nLength: {:.6}",
            self.level,
            self.interval.start(),
            self.interval.end(),
            self.interval.length()
        )
    }
}

/// Shapes for levels `0..shown`, capped at the history depth.
#[must_use]
pub fn construction_shapes(
    history: &ConstructionHistory,
    shown: usize,
    max_iterations: usize,
) -> Vec<ConstructionShape> {
    let last_level = max_iterations.saturating_sub(1);

    history
        .levels()
        .iter()
        .take(shown)
        .enumerate()
        .flat_map(|(level, intervals)| {
            let row_y = last_level as f64 - level as f64;
            let colour = level_colour(level, last_level);

            intervals.iter().map(move |&interval| ConstructionShape {
                level,
                interval,
                row_y,
                colour,
            })
        })
        .collect()
}

/// The topmost shape under `(x, y)`, if any.
#[must_use]
pub fn shape_at(shapes: &[ConstructionShape], x: f64, y: f64) -> Option<&ConstructionShape> {
    shapes.iter().rev().find(|shape| shape.contains(x, y))
}

#[must_use]
pub fn construction_title(shown: usize) -> String {
    format!(
        "Cantor Set Construction - Iteration {}",
        shown.saturating_sub(1)
    )
}
