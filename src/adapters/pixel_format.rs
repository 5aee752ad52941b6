//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

const RGBA_BYTES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    FrameTooSmall {
        frame_width: u32,
        frame_height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },
    FrameLength { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameTooSmall {
                frame_width,
                frame_height,
                buffer_width,
                buffer_height,
            } => write!(
                f,
                "{}x{} buffer does not fit a {}x{} frame",
                buffer_width, buffer_height, frame_width, frame_height
            ),
            Self::FrameLength { expected, actual } => write!(
                f,
                "frame length {} does not match expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Copies an RGB buffer into the top-left corner of an RGBA frame of
/// `frame_width` x `frame_height`, with alpha set to 255. Pixels outside the
/// buffer are left untouched.
pub fn blit_rgb_into_rgba(
    src: &PixelBuffer,
    dst: &mut [u8],
    frame_width: u32,
    frame_height: u32,
) -> Result<(), PixelFormatError> {
    let expected = frame_width as usize * frame_height as usize * RGBA_BYTES;
    if dst.len() != expected {
        return Err(PixelFormatError::FrameLength {
            expected,
            actual: dst.len(),
        });
    }

    if src.width() > frame_width || src.height() > frame_height {
        return Err(PixelFormatError::FrameTooSmall {
            frame_width,
            frame_height,
            buffer_width: src.width(),
            buffer_height: src.height(),
        });
    }

    let dst_stride = frame_width as usize * RGBA_BYTES;
    let src_rows = src.buffer().chunks_exact(src.row_stride());

    for (src_row, dst_row) in src_rows.zip(dst.chunks_exact_mut(dst_stride)) {
        for (src_pixel, dst_pixel) in src_row
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst_row.chunks_exact_mut(RGBA_BYTES))
        {
            dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }
    }

    Ok(())
}
