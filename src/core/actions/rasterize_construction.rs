use rayon::prelude::*;

use crate::core::cantor::shapes::{ConstructionShape, SHAPE_OPACITY, X_AXIS_RANGE, y_axis_range};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};

pub const BACKGROUND: Colour = Colour {
    r: 18,
    g: 18,
    b: 30,
};

/// Renders construction shapes into an RGB buffer, one rayon task per row.
///
/// The x axis spans [`X_AXIS_RANGE`] and the y axis spans the rows of a
/// `max_iterations`-level construction. Every shape covers at least one pixel
/// column, so levels narrower than a pixel stay visible.
pub fn rasterize_construction(
    shapes: &[ConstructionShape],
    max_iterations: usize,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut pixel_buffer = PixelBuffer::new(width, height, BACKGROUND)?;
    let stride = pixel_buffer.row_stride();

    let (x_min, x_max) = X_AXIS_RANGE;
    let (y_min, y_max) = y_axis_range(max_iterations);
    let x_span = x_max - x_min;
    let y_span = y_max - y_min;
    let width_px = f64::from(width);
    let height_px = f64::from(height);

    pixel_buffer
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(row, pixels)| {
            let world_y = y_max - (row as f64 + 0.5) / height_px * y_span;

            for shape in shapes {
                if world_y < shape.bottom() || world_y > shape.top() {
                    continue;
                }

                let colour = shape.colour.over(BACKGROUND, SHAPE_OPACITY);
                let first = ((shape.interval.start() - x_min) / x_span * width_px).floor();
                let last = ((shape.interval.end() - x_min) / x_span * width_px).ceil();

                let first = (first.max(0.0) as usize).min(width as usize);
                let last = (last.max(0.0) as usize).min(width as usize).max(first + 1);

                for column in first..last.min(width as usize) {
                    let index = column * BYTES_PER_PIXEL;
                    pixels[index] = colour.r;
                    pixels[index + 1] = colour.g;
                    pixels[index + 2] = colour.b;
                }
            }
        });

    Ok(pixel_buffer)
}

/// Maps the centre of pixel `(x, y)` back to construction coordinates.
#[must_use]
pub fn pixel_to_data(x: f64, y: f64, width: u32, height: u32, max_iterations: usize) -> (f64, f64) {
    let (x_min, x_max) = X_AXIS_RANGE;
    let (y_min, y_max) = y_axis_range(max_iterations);

    (
        x_min + x / f64::from(width.max(1)) * (x_max - x_min),
        y_max - y / f64::from(height.max(1)) * (y_max - y_min),
    )
}
