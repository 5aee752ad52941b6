use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a rasterized construction frame.
pub trait FilePresenterPort {
    fn present(&self, frame: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
